// VidKit overlay-image Entry Point
// Copyright (c) 2026 Xing_The_Creator | VidKit

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use vidkit::config::Config;
use vidkit::ffmpeg::{Ffmpeg, InvocationPlan};
use vidkit::output::{default_overlay_output, prepare_output};
use vidkit::overlay::{
    self, overlay_command, validate_opacity, FilterGraph, OverlaySpec, Position, BASE_INPUT,
    OVERLAY_INPUT,
};

#[derive(Parser)]
#[command(name = "overlay-image")]
#[command(about = "Overlay an image (watermark/logo) onto a video", long_about = None)]
#[command(after_help = "Examples:
  overlay-image video.mp4 logo.png
  overlay-image video.mp4 logo.png --position bottom-left --scale 150:100
  overlay-image video.mp4 watermark.png --opacity 0.7 --position center
  overlay-image video.mp4 logo.png --start-time 00:00:10 --duration 00:00:30
  overlay-image video.mp4 logo.png --position custom --offset-x 100 --offset-y 50")]
struct Cli {
    /// Input video file
    video: PathBuf,

    /// Overlay image file (PNG, JPG, ...)
    image: PathBuf,

    /// Output video (default: <output dir>/<VIDEO_NAME>_overlay.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Where to place the overlay
    #[arg(short, long, value_enum, default_value_t = Position::TopRight)]
    position: Position,

    /// Scale the image: "100:100", "50%", "iw*0.5:ih*0.5"
    #[arg(short, long)]
    scale: Option<String>,

    /// Overlay opacity, 0.0 to 1.0
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    opacity: f64,

    /// X offset from the edge, or absolute X for `custom`
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    offset_x: i32,

    /// Y offset from the edge, or absolute Y for `custom`
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    offset_y: i32,

    /// When the overlay appears (HH:MM:SS, MM:SS or SS)
    #[arg(long)]
    start_time: Option<String>,

    /// How long the overlay stays (HH:MM:SS, MM:SS or SS)
    #[arg(long, requires = "start_time")]
    duration: Option<String>,

    /// Print the ffmpeg invocation as JSON without running it
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    match vidkit::cli::start::<Cli>() {
        Ok(cli) => vidkit::cli::finish(run(cli)),
        Err(code) => code,
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    validate_opacity(cli.opacity)?;
    let config = Config::from_env();

    let ffmpeg = if cli.dry_run {
        None
    } else {
        Some(Ffmpeg::locate(&config).context("Please install ffmpeg and ensure it's accessible from command line")?)
    };

    let (video, image) = overlay::open_inputs(&cli.video, &cli.image)?;

    let spec = OverlaySpec {
        position: cli.position,
        scale: cli.scale,
        opacity: cli.opacity,
        offset_x: cli.offset_x,
        offset_y: cli.offset_y,
        start_time: cli.start_time,
        duration: cli.duration,
    };
    // Surface graph errors (bad scale or time) before touching the filesystem.
    let graph = FilterGraph::for_overlay(&spec, BASE_INPUT, OVERLAY_INPUT)?;

    let output = cli
        .output
        .unwrap_or_else(|| default_overlay_output(video.path(), &config.output_dir));

    let Some(ffmpeg) = ffmpeg else {
        let output = std::path::absolute(&output)?;
        let command = overlay_command(video.path(), image.path(), &graph, &output)?;
        println!("{}", InvocationPlan::new(&config.ffmpeg, &command).to_json()?);
        return Ok(());
    };

    let output = prepare_output(&output)
        .with_context(|| format!("Cannot prepare output location {:?}", output))?;

    println!("Overlaying image: {}", image.file_name());
    println!("On video: {}", video.file_name());
    println!("Position: {}", spec.position);
    println!("Output: {}", output.display());

    overlay::overlay_image(&ffmpeg, &video, &image, &spec, &output)
        .context("Error during overlay")?;

    println!("\n✅ Successfully created video with overlay: {}", output.display());
    Ok(())
}
