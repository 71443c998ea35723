// VidKit Synth - Test Media Generation
// Copyright (c) 2026 Xing_The_Creator | VidKit
//
// Produces small clips and images from ffmpeg's lavfi `color` source so the
// concat and overlay tools can be tried without real footage.

use crate::error::Result;
use crate::ffmpeg::{Ffmpeg, FfmpegCommand};
use std::path::{Path, PathBuf};
use tracing::{error, info};

fn escape_chars(text: &str, special: &[char]) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if special.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape text for a `drawtext` option inside a `-vf` graph. Two levels:
/// the option parser first, then the graph parser that strips one level
/// before options are split on `:`.
pub fn escape_drawtext(text: &str) -> String {
    let option = escape_chars(text, &['\\', ':', '\'']);
    escape_chars(&option, &['\\', '\'', '[', ']', ',', ';'])
}

fn drawtext(text: &str, fontsize: u32, fontcolor: &str) -> String {
    format!(
        "drawtext=fontsize={}:fontcolor={}:x=(w-text_w)/2:y=(h-text_h)/2:text={}",
        fontsize,
        fontcolor,
        escape_drawtext(text)
    )
}

/// Something `make-test-media` can render with a single ffmpeg run.
pub trait Asset {
    fn file_name(&self) -> &str;
    fn command(&self, output: &Path) -> Result<FfmpegCommand>;
}

/// A solid-color video clip with an optional centered caption.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorClip {
    pub file_name: String,
    pub color: String,
    pub width: u32,
    pub height: u32,
    pub duration: u32,
    pub caption: Option<String>,
}

impl Asset for ColorClip {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn command(&self, output: &Path) -> Result<FfmpegCommand> {
        let mut cmd = FfmpegCommand::new().args(["-f", "lavfi", "-i"]).arg(format!(
            "color={}:size={}x{}:duration={}",
            self.color, self.width, self.height, self.duration
        ));
        if let Some(caption) = &self.caption {
            cmd = cmd.arg("-vf").arg(drawtext(caption, 30, "white"));
        }
        cmd.arg("-y").path(output)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImageStyle {
    /// Opaque background color.
    Solid(String),
    /// Fully transparent background with semi-opaque white text.
    Transparent,
}

/// A single-frame still (logo or watermark).
#[derive(Debug, Clone, PartialEq)]
pub struct StillImage {
    pub file_name: String,
    pub style: ImageStyle,
    pub width: u32,
    pub height: u32,
    pub caption: Option<String>,
    pub fontsize: u32,
}

impl Asset for StillImage {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn command(&self, output: &Path) -> Result<FfmpegCommand> {
        let (source, fontcolor) = match &self.style {
            ImageStyle::Solid(color) => (
                format!("color={}:size={}x{}:duration=1", color, self.width, self.height),
                "white",
            ),
            ImageStyle::Transparent => (
                format!("color=c=black@0.0:s={}x{}:d=1", self.width, self.height),
                "white@0.8",
            ),
        };

        let mut cmd = FfmpegCommand::new().args(["-f", "lavfi", "-i"]).arg(source);
        if let Some(caption) = &self.caption {
            cmd = cmd.arg("-vf").arg(drawtext(caption, self.fontsize, fontcolor));
        }
        cmd.args(["-frames:v", "1", "-y"]).path(output)
    }
}

pub fn default_clips(duration: u32) -> Vec<ColorClip> {
    [
        ("video1_intro.mp4", "red", "Video 1 - Intro"),
        ("video2_middle.mp4", "green", "Video 2 - Middle"),
        ("video3_outro.mp4", "blue", "Video 3 - Outro"),
    ]
    .into_iter()
    .map(|(name, color, caption)| ColorClip {
        file_name: name.to_string(),
        color: color.to_string(),
        width: 640,
        height: 480,
        duration,
        caption: Some(caption.to_string()),
    })
    .collect()
}

pub fn default_images() -> Vec<StillImage> {
    vec![
        StillImage {
            file_name: "logo.png".to_string(),
            style: ImageStyle::Solid("blue".to_string()),
            width: 150,
            height: 80,
            caption: Some("MY LOGO".to_string()),
            fontsize: 24,
        },
        StillImage {
            file_name: "watermark.png".to_string(),
            style: ImageStyle::Transparent,
            width: 200,
            height: 200,
            caption: Some("WATERMARK".to_string()),
            fontsize: 36,
        },
        StillImage {
            file_name: "small_logo.png".to_string(),
            style: ImageStyle::Solid("gray".to_string()),
            width: 50,
            height: 50,
            caption: Some("©".to_string()),
            fontsize: 24,
        },
    ]
}

/// Outcome of one generation batch.
#[derive(Debug, Default)]
pub struct SynthReport {
    pub created: Vec<PathBuf>,
    pub failed: Vec<(String, String)>,
}

/// Run every asset in order inside `dir`. A failing asset is recorded and
/// the batch continues.
pub fn generate<A: Asset>(ffmpeg: &Ffmpeg, dir: &Path, assets: &[A]) -> Result<SynthReport> {
    std::fs::create_dir_all(dir)?;
    let mut report = SynthReport::default();

    for asset in assets {
        let file_name = asset.file_name();
        let target = dir.join(file_name);
        println!("Creating {}...", file_name);

        match asset.command(&target).and_then(|cmd| ffmpeg.run(&cmd)) {
            Ok(()) => {
                info!("[SYNTH] Created {:?}", target);
                println!("✅ Created {}", file_name);
                report.created.push(target);
            }
            Err(e) => {
                error!("[SYNTH] {} failed: {}", file_name, e);
                println!("❌ Failed to create {}", file_name);
                report.failed.push((file_name.to_string(), e.to_string()));
            }
        }
    }

    Ok(report)
}
