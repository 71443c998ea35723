// VidKit Error Types
// Copyright (c) 2026 Xing_The_Creator | VidKit

use std::path::PathBuf;
use thiserror::Error;

/// Every failure a VidKit tool can report. Binaries map all of them to exit code 1.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Path does not exist: {0}")]
    NotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("No .{extension} files found in folder: {dir}")]
    EmptyResult { dir: PathBuf, extension: String },

    #[error("Unsupported {kind} format: {extension}")]
    UnsupportedFormat { kind: String, extension: String },

    #[error("{0}")]
    Validation(String),

    /// Malformed `HH:MM:SS`, `MM:SS` or `SS` string.
    #[error("Invalid time '{input}': expected HH:MM:SS, MM:SS or SS")]
    TimeFormat { input: String },

    #[error("{program} is not installed or not available in system PATH")]
    ExternalToolMissing { program: String },

    #[error("{program} exited with {status}: {stderr}")]
    ExternalToolFailure {
        program: String,
        status: String,
        stderr: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, MediaError>;
