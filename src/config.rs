// VidKit Runtime Configuration
// Copyright (c) 2026 Xing_The_Creator | VidKit
//
// Settings come from the process environment (optionally seeded by a `.env`
// file, loaded by each binary before calling `Config::from_env`).

use std::path::PathBuf;

pub const FFMPEG_ENV: &str = "VIDKIT_FFMPEG";
pub const OUTPUT_DIR_ENV: &str = "VIDKIT_OUTPUT_DIR";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Program name or path used to launch ffmpeg.
    pub ffmpeg: String,
    /// Directory that receives default-named outputs.
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ffmpeg: "ffmpeg".to_string(),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            ffmpeg: non_empty(FFMPEG_ENV).unwrap_or(defaults.ffmpeg),
            output_dir: non_empty(OUTPUT_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        }
    }
}
