//! Placeholder fallback for the background video asset.
//!
//! When the sample download fails, a human-readable text file describing the
//! intended video is written to the destination instead. The file carries the
//! same name as the video so the rest of the asset pipeline has something to
//! point at until a real clip is produced.

use crate::config::AssetSpec;
use crate::error::CoreResult;
use crate::utils::aspect_label;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Video generation services worth trying for the real asset, listed in the
/// placeholder so whoever picks the file up knows where to go.
const SUGGESTED_SERVICES: [&str; 4] = [
    "OpenAI Sora",
    "Runway ML",
    "Pika Labs",
    "Stability AI Stable Video Diffusion",
];

/// Writes a descriptive placeholder for the intended video to `dest`.
///
/// The file embeds the configured filename, resolution, and duration, a
/// summary of the intended content, a generation timestamp, and the list of
/// suggested generation services. Any existing file at `dest` is truncated
/// and overwritten.
///
/// # Arguments
///
/// * `spec` - The asset specification describing the intended video
/// * `dest` - Destination path; its parent directory must already exist
///
/// # Returns
///
/// * `Ok(())` - The placeholder was written
/// * `Err(CoreError::Io)` - Local write failure (permissions, disk full)
pub fn write_placeholder(spec: &AssetSpec, dest: &Path) -> CoreResult<()> {
    let file = File::create(dest)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# Drone game background video")?;
    writeln!(writer, "# File name: {}", spec.video_filename)?;
    writeln!(
        writer,
        "# Resolution: {}x{} ({} landscape)",
        spec.video_width,
        spec.video_height,
        aspect_label(spec.video_width, spec.video_height)
    )?;
    writeln!(writer, "# Duration: {} seconds", spec.video_duration_secs)?;
    writeln!(writer, "# Format: MP4")?;
    writeln!(writer, "# Style: cinematic, immersive")?;
    writeln!(writer, "# Content:")?;
    writeln!(writer, "# 1. Scenic landscape with mountains, forests, and lakes")?;
    writeln!(writer, "# 2. A modern drone in smooth flight")?;
    writeln!(writer, "# 3. Dynamic camera following the drone")?;
    writeln!(writer, "# 4. Vibrant colors and realistic lighting")?;
    writeln!(writer, "# 5. Smooth transitions and animations")?;
    writeln!(writer, "# 6. Seamless loop")?;
    writeln!(writer, "# 7. No text or logos")?;
    writeln!(writer, "# Purpose: background for the game's login screen and main menu")?;
    writeln!(
        writer,
        "# Generated: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(writer)?;
    writeln!(
        writer,
        "# Note: this is a placeholder file; the actual video must be produced"
    )?;
    writeln!(writer, "# with a video generation service and saved over this file.")?;
    writeln!(writer, "# Suggested services:")?;
    for (index, service) in SUGGESTED_SERVICES.iter().enumerate() {
        writeln!(writer, "# {}. {}", index + 1, service)?;
    }

    writer.flush()?;
    log::debug!("Placeholder description written to {}", dest.display());
    Ok(())
}
