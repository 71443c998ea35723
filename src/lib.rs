// VidKit Library
// Copyright (c) 2026 Xing_The_Creator | VidKit
//
// Shared core for the `concat-videos`, `overlay-image` and `make-test-media`
// binaries. All media work is delegated to an external ffmpeg.

pub mod cli;
pub mod concat;
pub mod config;
pub mod discovery;
pub mod error;
pub mod ffmpeg;
pub mod logging;
pub mod media;
pub mod output;
pub mod overlay;
pub mod synth;
pub mod timecode;

pub use error::{MediaError, Result};
