// VidKit Concat - Lossless Folder Concatenation
// Copyright (c) 2026 Xing_The_Creator | VidKit
//
// Joins clips with ffmpeg's concat demuxer (`-f concat`). The manifest is
// a temp file that lives exactly as long as the `ConcatManifest` value; with
// `-c copy` the join is a stream copy with no re-encode.

use crate::error::{MediaError, Result};
use crate::ffmpeg::{Ffmpeg, FfmpegCommand};
use crate::media::MediaFile;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// One manifest line: `file '<absolute path>'`, forward slashes, quotes escaped.
pub fn manifest_line(path: &Path) -> Result<String> {
    let absolute = std::path::absolute(path)?;
    let text = absolute
        .to_str()
        .ok_or_else(|| MediaError::Validation(format!("Path is not valid UTF-8: {:?}", path)))?;
    let normalized = text.replace('\\', "/");
    let escaped = normalized.replace('\'', "\\'");
    Ok(format!("file '{}'", escaped))
}

/// Full manifest text, newline-terminated.
pub fn render_manifest(files: &[MediaFile]) -> Result<String> {
    let mut text = String::new();
    for file in files {
        text.push_str(&manifest_line(file.path())?);
        text.push('\n');
    }
    Ok(text)
}

/// A written concat manifest. Dropping it deletes the file, whether or not
/// ffmpeg succeeded.
pub struct ConcatManifest {
    file: NamedTempFile,
}

impl ConcatManifest {
    pub fn create(files: &[MediaFile]) -> Result<Self> {
        let text = render_manifest(files)?;

        let mut file = tempfile::Builder::new()
            .prefix("vidkit_concat_")
            .suffix(".txt")
            .tempfile()?;
        file.write_all(text.as_bytes())?;
        file.flush()?;

        info!(
            "[CONCAT] Manifest written ({} entries): {:?}",
            files.len(),
            file.path()
        );

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// `-f concat -safe 0 -i <manifest> -c copy -y <output>`
pub fn concat_command(manifest: &Path, output: &Path) -> Result<FfmpegCommand> {
    FfmpegCommand::new()
        .args(["-f", "concat", "-safe", "0", "-i"])
        .path(manifest)?
        .args(["-c", "copy", "-y"])
        .path(output)
}

/// Write the manifest, run ffmpeg once, and clean the manifest up.
pub fn concatenate(ffmpeg: &Ffmpeg, files: &[MediaFile], output: &Path) -> Result<PathBuf> {
    let manifest = ConcatManifest::create(files)?;
    let command = concat_command(manifest.path(), output)?;

    info!("[CONCAT] Joining {} clips into {:?}", files.len(), output);
    ffmpeg.run(&command)?;
    info!("[CONCAT] ✅ Final output: {:?}", output);

    Ok(output.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;
    use std::fs;

    #[cfg(unix)]
    #[test]
    fn test_manifest_line_escapes_quotes() {
        let line = manifest_line(Path::new("/videos/it's here.mp4")).unwrap();
        assert_eq!(line, "file '/videos/it\\'s here.mp4'");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_is_refused() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new("/videos").join(OsStr::from_bytes(b"clip\xff.mp4"));
        let err = manifest_line(&path).unwrap_err();
        assert!(matches!(err, MediaError::Validation(_)));
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_relative_paths_become_absolute() {
        let line = manifest_line(Path::new("clip.mp4")).unwrap();
        let cwd = std::env::current_dir().unwrap();
        let expected = cwd.join("clip.mp4").to_string_lossy().replace('\\', "/");
        assert_eq!(line, format!("file '{}'", expected));
    }

    #[test]
    fn test_manifest_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let clip = dir.path().join("a.mp4");
        fs::write(&clip, b"x").unwrap();
        let files = vec![MediaFile::open(&clip, MediaKind::Video).unwrap()];

        let manifest = ConcatManifest::create(&files).unwrap();
        let path = manifest.path().to_path_buf();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("file '"));
        assert!(text.ends_with("a.mp4'\n"));

        drop(manifest);
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_concat_command_layout() {
        let cmd = concat_command(Path::new("/tmp/list.txt"), Path::new("/out/all.mp4")).unwrap();
        assert_eq!(
            cmd.args,
            vec!["-f", "concat", "-safe", "0", "-i", "/tmp/list.txt", "-c", "copy", "-y", "/out/all.mp4"]
        );
    }
}
