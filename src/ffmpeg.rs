// VidKit FFmpeg Invoker
// Copyright (c) 2026 Xing_The_Creator | VidKit
//
// One blocking ffmpeg child per call. Stdout is discarded; stderr is kept so
// a failing run can report what ffmpeg complained about.

use crate::config::Config;
use crate::error::{MediaError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, error, info};

/// The argument vector for one ffmpeg run (program name excluded).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FfmpegCommand {
    pub args: Vec<String>,
}

impl FfmpegCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append a path argument, guarded by [`safe_arg_path`].
    pub fn path(self, path: &Path) -> Result<Self> {
        let arg = path_arg(path)?;
        Ok(self.arg(arg))
    }

    /// Shell-like rendering for logs and progress output.
    pub fn display(&self, program: &str) -> String {
        std::iter::once(program)
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// What `--dry-run` prints instead of running ffmpeg.
#[derive(Debug, Clone, Serialize)]
pub struct InvocationPlan<'a> {
    pub program: &'a str,
    pub args: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<Vec<String>>,
}

impl<'a> InvocationPlan<'a> {
    pub fn new(program: &'a str, command: &'a FfmpegCommand) -> Self {
        Self {
            program,
            args: &command.args,
            manifest: None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MediaError::Validation(format!("Cannot render plan: {}", e)))
    }
}

/// Prefix relative paths that start with `-` so ffmpeg never parses them as options.
pub fn safe_arg_path(path: &Path) -> PathBuf {
    if path.to_string_lossy().starts_with('-') {
        Path::new(".").join(path)
    } else {
        path.to_path_buf()
    }
}

/// UTF-8 rendering of a path argument. Non-UTF-8 paths are refused rather
/// than passed on lossily.
pub fn path_arg(path: &Path) -> Result<String> {
    let safe = safe_arg_path(path);
    safe.to_str()
        .map(str::to_string)
        .ok_or_else(|| MediaError::Validation(format!("Path is not valid UTF-8: {:?}", path)))
}

/// A located, runnable ffmpeg binary.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    program: String,
    path: PathBuf,
}

impl Ffmpeg {
    /// Resolve the configured program on PATH and confirm `-version` succeeds.
    pub fn locate(config: &Config) -> Result<Self> {
        let missing = || MediaError::ExternalToolMissing {
            program: config.ffmpeg.clone(),
        };

        let path = which::which(&config.ffmpeg).map_err(|e| {
            debug!("[FFMPEG] Lookup of '{}' failed: {}", config.ffmpeg, e);
            missing()
        })?;

        let probe = Command::new(&path)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match probe {
            Ok(status) if status.success() => {
                info!("[FFMPEG] Using {:?}", path);
                Ok(Self {
                    program: config.ffmpeg.clone(),
                    path,
                })
            }
            Ok(status) => {
                debug!("[FFMPEG] {:?} -version exited with {}", path, status);
                Err(missing())
            }
            Err(e) => {
                debug!("[FFMPEG] Failed to spawn {:?}: {}", path, e);
                Err(missing())
            }
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run to completion. A nonzero exit becomes `ExternalToolFailure` carrying stderr.
    pub fn run(&self, command: &FfmpegCommand) -> Result<()> {
        debug!("[FFMPEG] {}", command.display(&self.program));

        let output = Command::new(&self.path)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let status = match output.status.code() {
            Some(code) => format!("exit code {}", code),
            None => "a signal".to_string(),
        };
        error!("[FFMPEG] ❌ {} failed ({})", self.program, status);

        Err(MediaError::ExternalToolFailure {
            program: self.program.clone(),
            status,
            stderr,
        })
    }
}
