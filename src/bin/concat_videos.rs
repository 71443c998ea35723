// VidKit concat-videos Entry Point
// Copyright (c) 2026 Xing_The_Creator | VidKit

use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use vidkit::concat::{self, concat_command, render_manifest};
use vidkit::config::Config;
use vidkit::discovery::{find_media_files, SortMethod};
use vidkit::ffmpeg::{Ffmpeg, InvocationPlan};
use vidkit::media::MediaKind;
use vidkit::output::{default_concat_output, prepare_output};

#[derive(Parser)]
#[command(name = "concat-videos")]
#[command(about = "Concatenate all video files in a folder into a single video", long_about = None)]
#[command(after_help = "Examples:
  concat-videos ./ToMerge                      # Output: output/ToMerge.mp4
  concat-videos /home/user/videos -o output/merged.mp4
  concat-videos ./videos --sort date_created")]
struct Cli {
    /// Folder containing the files to concatenate
    folder: PathBuf,

    /// Output file (default: <output dir>/<FOLDER_NAME>.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Order in which files are joined
    #[arg(short, long, value_enum, default_value_t = SortMethod::Alphabetical)]
    sort: SortMethod,

    /// Extension of the files to pick up
    #[arg(long, default_value = "mp4")]
    ext: String,

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
    let config = Config::from_env();
    let ext = cli.ext.trim_start_matches('.').to_lowercase();
    if !MediaKind::Video.accepts(&ext) {
        bail!("Unsupported video format: .{}", ext);
    }

    let ffmpeg = if cli.dry_run {
        None
    } else {
        Some(Ffmpeg::locate(&config).context("Please install ffmpeg and ensure it's accessible from command line")?)
    };

    let files = find_media_files(&cli.folder, &ext, cli.sort)?;

    let output = match cli.output {
        Some(path) => path,
        None => default_concat_output(&cli.folder, &ext, &config.output_dir)?,
    };

    let Some(ffmpeg) = ffmpeg else {
        let output = std::path::absolute(&output)?;
        let manifest_path = std::env::temp_dir().join("vidkit_concat.txt");
        let command = concat_command(&manifest_path, &output)?;
        let manifest = render_manifest(&files)?;
        let plan = InvocationPlan {
            manifest: Some(manifest.lines().map(str::to_string).collect()),
            ..InvocationPlan::new(&config.ffmpeg, &command)
        };
        println!("{}", plan.to_json()?);
        return Ok(());
    };

    let output = prepare_output(&output)
        .with_context(|| format!("Cannot prepare output location {:?}", output))?;

    println!("Found {} .{} files to concatenate:", files.len(), ext);
    for (i, file) in files.iter().enumerate() {
        println!("  {}. {}", i + 1, file.file_name());
    }
    println!("\nConcatenating videos into: {}", output.display());
    info!("[CONCAT] Sort method: {:?}", cli.sort);

    concat::concatenate(&ffmpeg, &files, &output).context("Error during concatenation")?;

    println!("\n✅ Successfully concatenated videos to: {}", output.display());
    Ok(())
}
