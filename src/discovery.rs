// VidKit Discovery - Folder Scanning
// Copyright (c) 2026 Xing_The_Creator | VidKit
//
// Lists the media files of one folder (no recursion) and orders them for
// concatenation.

use crate::error::{MediaError, Result};
use crate::media::{extension_of, MediaFile, MediaKind};
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMethod {
    #[default]
    #[value(name = "alphabetical")]
    Alphabetical,
    #[value(name = "date_created")]
    DateCreated,
    #[value(name = "date_modified")]
    DateModified,
}

/// Find every regular file in `dir` whose extension matches `extension`
/// (case-insensitive, no leading dot) and sort it by `sort`.
///
/// Timestamp sorts fall back to the case-folded file name on ties so the
/// order never depends on directory enumeration.
pub fn find_media_files(dir: &Path, extension: &str, sort: SortMethod) -> Result<Vec<MediaFile>> {
    if !dir.exists() {
        return Err(MediaError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(MediaError::NotADirectory(dir.to_path_buf()));
    }

    let wanted = extension.trim_start_matches('.').to_lowercase();
    let mut found = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let path = entry?.into_path();
        // `Path::is_file` follows symlinks, so linked clips are included.
        if path.is_file() && extension_of(&path) == wanted {
            found.push(path);
        }
    }

    if found.is_empty() {
        return Err(MediaError::EmptyResult {
            dir: dir.to_path_buf(),
            extension: wanted,
        });
    }

    let mut keyed = found
        .into_iter()
        .map(|path| Ok((sort_key(&path, sort)?, folded_name(&path), path)))
        .collect::<Result<Vec<(Option<SystemTime>, String, PathBuf)>>>()?;
    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    info!("[DISCOVERY] {} .{} files in {:?} ({:?})", keyed.len(), wanted, dir, sort);

    let kind = if MediaKind::Image.accepts(&wanted) {
        MediaKind::Image
    } else {
        MediaKind::Video
    };
    Ok(keyed
        .into_iter()
        .map(|(_, _, path)| MediaFile::from_listing(path, kind))
        .collect())
}

fn folded_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

fn sort_key(path: &Path, sort: SortMethod) -> Result<Option<SystemTime>> {
    let key = match sort {
        SortMethod::Alphabetical => None,
        SortMethod::DateModified => Some(fs::metadata(path)?.modified()?),
        SortMethod::DateCreated => {
            let meta = fs::metadata(path)?;
            match meta.created() {
                Ok(t) => Some(t),
                Err(e) => {
                    debug!("[DISCOVERY] No creation time for {:?} ({}), using mtime", path, e);
                    Some(meta.modified()?)
                }
            }
        }
    };
    Ok(key)
}
