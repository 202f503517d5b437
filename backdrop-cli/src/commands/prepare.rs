//! Implementation of the 'prepare' subcommand.
//!
//! This module assembles the asset specification from CLI arguments, prints
//! the generation prompt, and delegates the download-or-placeholder run to
//! the backdrop-core library.

use crate::cli::PrepareArgs;

use backdrop_core::config::AssetSpecBuilder;
use backdrop_core::error::CoreResult;
use backdrop_core::{
    build_video_prompt, format_bytes, format_duration, prepare_asset, AssetSource, AssetSpec,
    PrepareReport,
};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

/// Creates and validates the AssetSpec from CLI arguments.
fn create_asset_spec(args: &PrepareArgs) -> CoreResult<AssetSpec> {
    let mut spec = AssetSpecBuilder::new()
        .output_dir(args.output_dir.clone())
        .build();

    if let Some(filename) = &args.filename {
        spec.video_filename = filename.clone();
    }

    if let Some(width) = args.width {
        spec.video_width = width;
    }

    if let Some(height) = args.height {
        spec.video_height = height;
    }

    if let Some(duration) = args.duration {
        spec.video_duration_secs = duration;
    }

    if let Some(url) = &args.source_url {
        spec.source_url = url.clone();
    }

    if let Some(timeout) = args.timeout {
        spec.download_timeout_secs = timeout;
    }

    if let Some(key) = &args.api_key {
        spec.api_key = key.clone();
    }

    spec.validate()?;
    Ok(spec)
}

/// Runs the `prepare` command. Returns the report of the successful step,
/// or an error when both the download and the placeholder write failed.
pub fn run_prepare(args: PrepareArgs) -> CoreResult<PrepareReport> {
    let spec = create_asset_spec(&args)?;

    info!("Preparing background video asset");
    info!("Output directory: {}", spec.output_dir.display());
    info!("Target file: {}", spec.video_filename);
    info!(
        "Intended video: {}x{}, {} seconds (model: {})",
        spec.video_width, spec.video_height, spec.video_duration_secs, spec.model
    );
    if spec.api_key.is_empty() {
        debug!("No generation API key configured (OPENAI_API_KEY unset)");
    }

    if !args.no_prompt {
        println!("{}", style("Generation prompt:").bold());
        println!("{}", build_video_prompt(&spec));
        println!("{}", "-".repeat(80));
    }

    info!("Attempting sample video download from {}", spec.source_url);

    // Spinner until the response length is known, then a sized bar.
    let bar = ProgressBar::new_spinner();
    bar.set_message("downloading sample video");
    let mut observer = |downloaded: u64, total: Option<u64>| {
        if let (Some(total), None) = (total, bar.length()) {
            bar.set_style(ProgressStyle::default_bar());
            bar.set_length(total);
        }
        bar.set_position(downloaded);
    };

    let result = prepare_asset(&spec, Some(&mut observer));
    bar.finish_and_clear();

    let report = result?;
    print_summary(&report);
    Ok(report)
}

/// Prints the end-of-run summary for the produced file.
fn print_summary(report: &PrepareReport) {
    println!();
    println!("{}", style("========================================").cyan());
    println!("{} {}", style("Asset ready:").bold(), report.output_path.display());
    println!("  File size: {}", style(format_bytes(report.file_size)).bold());
    println!("  Elapsed:   {}", style(format_duration(report.elapsed)).bold());
    match report.source {
        AssetSource::Download => {
            println!("  Source:    downloaded sample clip");
            println!();
            println!("Note: the sample is a generic short clip. Replace it with a");
            println!("generated video before shipping.");
        }
        AssetSource::Placeholder => {
            println!("  Source:    placeholder description");
            println!();
            println!("Note: the file is a text placeholder. Generate the real video");
            println!("with one of the services listed inside it, then replace the file.");
        }
    }
    println!("{}", style("========================================").cyan());
}
