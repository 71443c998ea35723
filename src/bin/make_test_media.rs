// VidKit make-test-media Entry Point
// Copyright (c) 2026 Xing_The_Creator | VidKit

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use vidkit::config::Config;
use vidkit::ffmpeg::Ffmpeg;
use vidkit::synth::{self, default_clips, default_images, SynthReport};

#[derive(Parser)]
#[command(name = "make-test-media")]
#[command(about = "Generate sample videos and images for trying concat-videos and overlay-image", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Three short color clips for concatenation
    Videos {
        /// Target folder
        #[arg(long, default_value = "test_videos")]
        dir: PathBuf,

        /// Length of each clip in seconds
        #[arg(long, default_value_t = 3)]
        duration: u32,
    },

    /// A logo, a transparent watermark and a small logo for overlays
    Images {
        /// Target folder
        #[arg(long, default_value = "test_images")]
        dir: PathBuf,
    },

    /// Both videos and images with default settings
    All,
}

fn main() -> ExitCode {
    match vidkit::cli::start::<Cli>() {
        Ok(cli) => vidkit::cli::finish(run(cli)),
        Err(code) => code,
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env();
    let ffmpeg = Ffmpeg::locate(&config)
        .context("Please install ffmpeg and ensure it's accessible from command line")?;

    let created = match cli.command {
        Commands::Videos { dir, duration } => make_videos(&ffmpeg, &dir, duration)?,
        Commands::Images { dir } => make_images(&ffmpeg, &dir, &config.output_dir)?,
        Commands::All => {
            make_videos(&ffmpeg, Path::new("test_videos"), 3)?
                + make_images(&ffmpeg, Path::new("test_images"), &config.output_dir)?
        }
    };

    if created == 0 {
        bail!("No test media was created. Check that ffmpeg is properly installed.");
    }
    Ok(())
}

fn make_videos(ffmpeg: &Ffmpeg, dir: &Path, duration: u32) -> anyhow::Result<usize> {
    println!("Creating test videos for concatenation demo...");
    let report = synth::generate(ffmpeg, dir, &default_clips(duration))?;
    summarize(&report, "test videos", dir);

    if !report.created.is_empty() {
        println!("\nNow you can test the concatenation tool:");
        println!("concat-videos \"{}\" --output \"test_concatenated.mp4\"", dir.display());
    }
    Ok(report.created.len())
}

fn make_images(ffmpeg: &Ffmpeg, dir: &Path, output_dir: &Path) -> anyhow::Result<usize> {
    println!("Creating test images for overlay functionality...");
    let report = synth::generate(ffmpeg, dir, &default_images())?;
    summarize(&report, "test images", dir);

    if !report.created.is_empty() {
        let video = output_dir.join("test_videos.mp4");
        if !video.exists() {
            println!("\nFirst create test videos with: make-test-media videos");
            println!("Then run: concat-videos test_videos");
        }
        println!("\nNow you can test the overlay tool:");
        let video = video.display();
        let dir = dir.display();
        println!("overlay-image \"{}\" \"{}/logo.png\"", video, dir);
        println!(
            "overlay-image \"{}\" \"{}/watermark.png\" --position center --opacity 0.7",
            video, dir
        );
        println!(
            "overlay-image \"{}\" \"{}/small_logo.png\" --position bottom-right",
            video, dir
        );
    }
    Ok(report.created.len())
}

fn summarize(report: &SynthReport, what: &str, dir: &Path) {
    if report.created.is_empty() {
        println!("❌ No {} were created.", what);
    } else {
        println!(
            "\n✅ Created {} {} in '{}' folder",
            report.created.len(),
            what,
            dir.display()
        );
    }
    for (name, reason) in &report.failed {
        eprintln!("   {}: {}", name, reason);
    }
}
