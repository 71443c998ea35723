// VidKit CLI Plumbing
// Copyright (c) 2026 Xing_The_Creator | VidKit
//
// Shared start-up and exit handling for the binaries. Every failure,
// argument errors included, ends in exit code 1.

use clap::Parser;
use std::process::ExitCode;

/// Load `.env`, install logging and parse arguments.
/// `--help`/`--version` yield `Err(SUCCESS)`, bad arguments `Err(FAILURE)`.
pub fn start<C: Parser>() -> Result<C, ExitCode> {
    dotenv::dotenv().ok();
    crate::logging::init();

    C::try_parse().map_err(|e| {
        let _ = e.print();
        if e.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

/// Print a top-level error and map the outcome to an exit code.
pub fn finish(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
