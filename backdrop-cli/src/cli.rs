// backdrop-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Backdrop: background video asset preparation tool",
    long_about = "Prepares the placeholder background video for the drone game \
                  via the backdrop-core library: downloads a sample clip, or \
                  writes a descriptive placeholder when the download fails."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prepares the background video asset (sample download with placeholder fallback)
    Prepare(PrepareArgs),
    // Add other subcommands here later (e.g., generate, verify)
}

#[derive(Parser, Debug)]
pub struct PrepareArgs {
    /// Directory where the video asset will be saved
    #[arg(
        short = 'o',
        long = "output",
        value_name = "OUTPUT_DIR",
        default_value = backdrop_core::config::DEFAULT_OUTPUT_DIR
    )]
    pub output_dir: PathBuf,

    /// Optional: Override the asset file name
    #[arg(long, value_name = "FILENAME")]
    pub filename: Option<String>,

    /// Optional: Override the intended video width in pixels
    #[arg(long, value_name = "PIXELS")]
    pub width: Option<u32>,

    /// Optional: Override the intended video height in pixels
    #[arg(long, value_name = "PIXELS")]
    pub height: Option<u32>,

    /// Optional: Override the intended video duration in seconds
    #[arg(long, value_name = "SECONDS")]
    pub duration: Option<u32>,

    /// Optional: Override the sample video URL
    #[arg(long, value_name = "URL")]
    pub source_url: Option<String>,

    /// Optional: HTTP timeout for the sample download, in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Optional: API key for the video generation service.
    /// Can also be set via the OPENAI_API_KEY environment variable.
    /// No generation call is made with it yet.
    #[arg(long, value_name = "KEY", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Skip printing the generation prompt
    #[arg(long, default_value_t = false)]
    pub no_prompt: bool,
}
