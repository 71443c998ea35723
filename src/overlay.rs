// VidKit Overlay - Image Compositing
// Copyright (c) 2026 Xing_The_Creator | VidKit
//
// Builds the `-filter_complex` graph that places a still image over a video:
//   [1:v] -> scale -> [scaled] -> format/alpha -> [transparent] -> overlay
// Each stage reads the tag written by the stage before it.

use crate::error::{MediaError, Result};
use crate::ffmpeg::{Ffmpeg, FfmpegCommand};
use crate::media::{MediaFile, MediaKind};
use crate::timecode::parse_time_to_seconds;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// Stream label of the base video (first `-i`).
pub const BASE_INPUT: &str = "0:v";
/// Stream label of the overlay image (second `-i`).
pub const OVERLAY_INPUT: &str = "1:v";

const SCALED_TAG: &str = "scaled";
const TRANSPARENT_TAG: &str = "transparent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
    /// Offsets are absolute coordinates.
    Custom,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
        Position::Center,
        Position::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
            Position::Center => "center",
            Position::Custom => "custom",
        }
    }

    /// `x:y` overlay coordinates in terms of `main_*`/`overlay_*` sizes.
    pub fn expression(self, offset_x: i32, offset_y: i32) -> String {
        match self {
            Position::TopLeft | Position::Custom => format!("{}:{}", offset_x, offset_y),
            Position::TopRight => format!("main_w-overlay_w-{}:{}", offset_x, offset_y),
            Position::BottomLeft => format!("{}:main_h-overlay_h-{}", offset_x, offset_y),
            Position::BottomRight => {
                format!("main_w-overlay_w-{}:main_h-overlay_h-{}", offset_x, offset_y)
            }
            Position::Center => "(main_w-overlay_w)/2:(main_h-overlay_h)/2".to_string(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Position::ALL.iter().map(|p| p.as_str()).collect();
                MediaError::Validation(format!(
                    "Unknown position '{}' (expected one of: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// Everything that shapes the overlay filter graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlaySpec {
    pub position: Position,
    /// `"N%"` or literal scale-filter arguments such as `"100:100"`.
    pub scale: Option<String>,
    pub opacity: f64,
    pub offset_x: i32,
    pub offset_y: i32,
    pub start_time: Option<String>,
    pub duration: Option<String>,
}

impl Default for OverlaySpec {
    fn default() -> Self {
        Self {
            position: Position::TopRight,
            scale: None,
            opacity: 1.0,
            offset_x: 10,
            offset_y: 10,
            start_time: None,
            duration: None,
        }
    }
}

impl OverlaySpec {
    pub fn validate(&self) -> Result<()> {
        validate_opacity(self.opacity)?;
        if let Some(scale) = self.scale() {
            scale_arguments(scale)?;
        }
        Ok(())
    }

    fn scale(&self) -> Option<&str> {
        self.scale.as_deref().filter(|s| !s.is_empty())
    }

    /// `enable='...'` clause for the overlay, if the spec is time-gated.
    pub fn enable_clause(&self) -> Result<Option<String>> {
        let start = match self.start_time.as_deref() {
            Some(s) => parse_time_to_seconds(s)?,
            None => {
                if self.duration.is_some() {
                    warn!("[OVERLAY] Duration given without a start time; showing for the whole video");
                }
                return Ok(None);
            }
        };

        let clause = match self.duration.as_deref() {
            Some(d) => {
                let end = start + parse_time_to_seconds(d)?;
                format!("enable='between(t,{},{})'", number(start), number(end))
            }
            None => format!("enable='gte(t,{})'", number(start)),
        };
        Ok(Some(clause))
    }
}

pub fn validate_opacity(opacity: f64) -> Result<()> {
    if (0.0..=1.0).contains(&opacity) {
        Ok(())
    } else {
        Err(MediaError::Validation(
            "Opacity must be between 0.0 and 1.0".to_string(),
        ))
    }
}

/// Arguments for the `scale` filter. `"50%"` becomes `iw*0.5:ih*0.5`.
pub fn scale_arguments(scale: &str) -> Result<String> {
    match scale.strip_suffix('%') {
        Some(percent) => {
            let value: f64 = percent.trim().parse().map_err(|_| {
                MediaError::Validation(format!("Invalid percentage scale: {}", scale))
            })?;
            let factor = number(value / 100.0);
            Ok(format!("iw*{}:ih*{}", factor, factor))
        }
        None => Ok(scale.to_string()),
    }
}

/// Shortest round-trip form that always keeps a fraction: `10.0`, `0.5`.
fn number(value: f64) -> String {
    format!("{:?}", value)
}

/// Ordered filter-graph segments, joined with `;` for `-filter_complex`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterGraph {
    segments: Vec<String>,
}

impl FilterGraph {
    /// Build the overlay graph for `spec`, reading the video from `base` and
    /// the image from `overlay` (stream labels without brackets).
    pub fn for_overlay(spec: &OverlaySpec, base: &str, overlay: &str) -> Result<Self> {
        spec.validate()?;

        let mut graph = FilterGraph::default();
        let mut current = overlay.to_string();

        if let Some(scale) = spec.scale() {
            graph.push(format!(
                "[{}]scale={}[{}]",
                current,
                scale_arguments(scale)?,
                SCALED_TAG
            ));
            current = SCALED_TAG.to_string();
        }

        if spec.opacity < 1.0 {
            graph.push(format!(
                "[{}]format=rgba,colorchannelmixer=aa={}[{}]",
                current,
                number(spec.opacity),
                TRANSPARENT_TAG
            ));
            current = TRANSPARENT_TAG.to_string();
        }

        let mut overlay_filter = format!(
            "[{}][{}]overlay={}",
            base,
            current,
            spec.position.expression(spec.offset_x, spec.offset_y)
        );
        if let Some(enable) = spec.enable_clause()? {
            overlay_filter.push(':');
            overlay_filter.push_str(&enable);
        }
        graph.push(overlay_filter);

        Ok(graph)
    }

    pub fn push(&mut self, segment: String) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for FilterGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(";"))
    }
}

/// Open the video and the overlay image. Both must exist before either
/// extension is looked at.
pub fn open_inputs(video: &Path, image: &Path) -> Result<(MediaFile, MediaFile)> {
    for path in [video, image] {
        if !path.exists() {
            return Err(MediaError::NotFound(path.to_path_buf()));
        }
    }
    Ok((
        MediaFile::open(video, MediaKind::Video)?,
        MediaFile::open(image, MediaKind::Image)?,
    ))
}

/// `-i <video> -i <image> -filter_complex <graph> -c:a copy -y <output>`
pub fn overlay_command(
    video: &Path,
    image: &Path,
    graph: &FilterGraph,
    output: &Path,
) -> Result<FfmpegCommand> {
    FfmpegCommand::new()
        .arg("-i")
        .path(video)?
        .arg("-i")
        .path(image)?
        .arg("-filter_complex")
        .arg(graph.to_string())
        .args(["-c:a", "copy", "-y"])
        .path(output)
}

/// Composite `image` over `video` into `output` with one ffmpeg run.
pub fn overlay_image(
    ffmpeg: &Ffmpeg,
    video: &MediaFile,
    image: &MediaFile,
    spec: &OverlaySpec,
    output: &Path,
) -> Result<PathBuf> {
    let graph = FilterGraph::for_overlay(spec, BASE_INPUT, OVERLAY_INPUT)?;
    let command = overlay_command(video.path(), image.path(), &graph, output)?;

    info!(
        "[OVERLAY] {} on {} at {} -> {:?}",
        image.file_name(),
        video.file_name(),
        spec.position,
        output
    );
    ffmpeg.run(&command)?;
    info!("[OVERLAY] ✅ Wrote {:?}", output);

    Ok(output.to_path_buf())
}
