// VidKit Output Planning
// Copyright (c) 2026 Xing_The_Creator | VidKit

use crate::error::Result;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// `<output_dir>/<folder-name>.<ext>`, taking the name from the absolute folder path
/// so `.` and `./` still yield the real directory name.
pub fn default_concat_output(folder: &Path, extension: &str, output_dir: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(folder)?;
    let mut names = Vec::new();
    for component in absolute.components() {
        match component {
            Component::Normal(n) => names.push(n.to_string_lossy().into_owned()),
            Component::ParentDir => {
                names.pop();
            }
            _ => {}
        }
    }
    let name = names.pop().unwrap_or_else(|| "concatenated".to_string());
    Ok(output_dir.join(format!("{}.{}", name, extension.trim_start_matches('.'))))
}

/// `<output_dir>/<video-stem>_overlay.<video-ext>`
pub fn default_overlay_output(video: &Path, output_dir: &Path) -> PathBuf {
    let stem = video
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "video".to_string());
    let name = match video.extension() {
        Some(ext) => format!("{}_overlay.{}", stem, ext.to_string_lossy()),
        None => format!("{}_overlay", stem),
    };
    output_dir.join(name)
}

/// Make `output` absolute and create its parent directory tree.
pub fn prepare_output(output: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(output)?;
    if let Some(parent) = absolute.parent() {
        if !parent.exists() {
            debug!("[OUTPUT] Creating {:?}", parent);
        }
        fs::create_dir_all(parent)?;
    }
    Ok(absolute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_default_uses_folder_name() {
        let out = default_concat_output(Path::new("/media/Holiday"), "mp4", Path::new("output")).unwrap();
        assert_eq!(out, PathBuf::from("output/Holiday.mp4"));
    }

    #[test]
    fn test_concat_default_for_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        let expected = cwd.file_name().unwrap().to_string_lossy().into_owned();
        let out = default_concat_output(Path::new("."), ".mkv", Path::new("output")).unwrap();
        assert_eq!(out, PathBuf::from("output").join(format!("{}.mkv", expected)));
    }

    #[test]
    fn test_overlay_default_keeps_extension() {
        let out = default_overlay_output(Path::new("clips/intro.MOV"), Path::new("output"));
        assert_eq!(out, PathBuf::from("output/intro_overlay.MOV"));
    }

    #[test]
    fn test_prepare_output_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a").join("b").join("final.mp4");
        let prepared = prepare_output(&target).unwrap();
        assert!(prepared.is_absolute());
        assert!(dir.path().join("a").join("b").is_dir());
        assert!(!prepared.exists());
    }
}
