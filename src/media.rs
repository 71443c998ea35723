// VidKit Media Classification
// Copyright (c) 2026 Xing_The_Creator | VidKit

use crate::error::{MediaError, Result};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv", "webm", "flv", "wmv", "m4v"];
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tiff", "webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            MediaKind::Video => VIDEO_EXTENSIONS,
            MediaKind::Image => IMAGE_EXTENSIONS,
        }
    }

    /// Case-insensitive membership test; `ext` is given without the dot.
    pub fn accepts(self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Video => f.write_str("video"),
            MediaKind::Image => f.write_str("image"),
        }
    }
}

/// A path checked once for existence and an allowed extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaFile {
    path: PathBuf,
    kind: MediaKind,
}

impl MediaFile {
    pub fn open(path: impl Into<PathBuf>, kind: MediaKind) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(MediaError::NotFound(path));
        }

        let ext = extension_of(&path);
        if !kind.accepts(&ext) {
            return Err(MediaError::UnsupportedFormat {
                kind: kind.to_string(),
                extension: if ext.is_empty() {
                    "(none)".to_string()
                } else {
                    format!(".{}", ext)
                },
            });
        }

        Ok(Self { path, kind })
    }

    /// Used by discovery, which has already filtered by extension.
    pub(crate) fn from_listing(path: PathBuf, kind: MediaKind) -> Self {
        Self { path, kind }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Lower-cased extension without the dot, or an empty string.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
