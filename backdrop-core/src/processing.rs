//! Asset preparation orchestration.
//!
//! Runs the two preparation steps in order: the sample download, then the
//! placeholder fallback when the download fails. The overall run succeeds
//! when either step succeeds; only a run where both steps fail returns an
//! error.

use crate::acquisition::{self, ProgressObserver};
use crate::config::AssetSpec;
use crate::error::CoreResult;
use crate::placeholder;
use crate::{AssetSource, PrepareReport};

use std::fs;
use std::time::Instant;

/// Prepares the background video asset described by `spec`.
///
/// The output directory is created (with parents) first, so both steps can
/// assume it exists. The sample download is attempted once; any failure is
/// logged and followed by exactly one placeholder write to the same path.
/// No retries happen at any level.
///
/// # Arguments
///
/// * `spec` - The asset specification; callers should `validate()` it first
/// * `progress` - Optional observer for download progress
///
/// # Returns
///
/// * `Ok(PrepareReport)` - At least one step succeeded; the report records
///   which step produced the file, its size, and the elapsed time
/// * `Err(_)` - Both steps failed; the error describes the fallback failure
pub fn prepare_asset(
    spec: &AssetSpec,
    progress: Option<ProgressObserver<'_>>,
) -> CoreResult<PrepareReport> {
    let start = Instant::now();

    fs::create_dir_all(&spec.output_dir)?;
    let dest = spec.output_path();

    let source = match acquisition::download_sample(spec, &dest, progress) {
        Ok(bytes) => {
            log::info!("Sample video downloaded successfully ({bytes} bytes)");
            AssetSource::Download
        }
        Err(e) => {
            log::warn!("Sample video download failed: {e}");
            log::info!("Writing placeholder description instead");
            placeholder::write_placeholder(spec, &dest)?;
            AssetSource::Placeholder
        }
    };

    let file_size = fs::metadata(&dest)?.len();

    Ok(PrepareReport {
        output_path: dest,
        source,
        file_size,
        elapsed: start.elapsed(),
    })
}
