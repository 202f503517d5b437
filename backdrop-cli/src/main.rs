// backdrop-cli/src/main.rs
//
// Entry point for the Backdrop CLI. Parses arguments, initializes logging,
// and dispatches to the command implementations.
//
// Responsibilities include:
// - Parsing user-provided arguments (see cli.rs).
// - Setting up env_logger with a default `info` filter (RUST_LOG overrides).
// - Invoking the asset preparation logic in backdrop-core.
// - Reporting the outcome. The process exits 0 even when both preparation
//   steps fail; the outcome is communicated through diagnostics only.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use env_logger::Env;
use log::{error, info};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Prepare(args) => commands::prepare::run_prepare(args),
        // Add other command arms here -> { run_other_command(args) }
    };

    match result {
        Ok(report) => {
            info!("Asset preparation finished: {}", report.output_path.display());
        }
        Err(e) => {
            error!("Asset preparation failed: {e}");
            eprintln!("Suggestions:");
            eprintln!("  1. Check the network connection");
            eprintln!("  2. Check write permissions on the output directory");
            eprintln!("  3. Create the video file manually at the target path");
        }
    }
}
