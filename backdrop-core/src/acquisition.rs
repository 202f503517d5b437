//! Sample video acquisition over HTTP.
//!
//! This module downloads the stand-in sample clip to the destination path.
//! The response's content type is checked before any file is opened, and the
//! body is streamed in fixed-size chunks through a staging file that is only
//! persisted to the destination once the transfer completes. A transfer that
//! fails mid-stream therefore never leaves a partial file behind.

use crate::config::AssetSpec;
use crate::error::{CoreError, CoreResult};

use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header;
use tempfile::Builder as TempFileBuilder;
use url::Url;

/// Size of the read buffer used while streaming the response body.
pub const DOWNLOAD_CHUNK_SIZE: usize = 8192;

/// Callback invoked after each streamed chunk with the byte count so far
/// and the response's declared total length, when known.
pub type ProgressObserver<'a> = &'a mut dyn FnMut(u64, Option<u64>);

/// Downloads the sample clip described by `spec` to `dest`.
///
/// Issues a single GET against `spec.source_url` with the configured
/// timeout. The declared `Content-Type` must start with `video/`; anything
/// else fails without touching the filesystem. The body is streamed into a
/// temporary file beside `dest` and atomically persisted on completion.
///
/// # Arguments
///
/// * `spec` - The asset specification holding the source URL and timeout
/// * `dest` - Destination path; its parent directory must already exist
/// * `progress` - Optional observer notified after each chunk
///
/// # Returns
///
/// * `Ok(bytes)` - Total number of bytes written to `dest`
/// * `Err(CoreError::Http)` - Transport failure or non-2xx status
/// * `Err(CoreError::ContentType)` - Response is not a video payload
/// * `Err(CoreError::Io)` - Local write failure
pub fn download_sample(
    spec: &AssetSpec,
    dest: &Path,
    mut progress: Option<ProgressObserver<'_>>,
) -> CoreResult<u64> {
    let source = Url::parse(&spec.source_url)
        .map_err(|e| CoreError::InvalidUrl(spec.source_url.clone(), e))?;

    let client = Client::builder()
        .timeout(Duration::from_secs(spec.download_timeout_secs))
        .build()?;

    log::debug!("Requesting sample video from {source}");
    let mut response = client.get(source).send()?.error_for_status()?;

    // Reject non-video payloads before any file is opened.
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();
    if !content_type.starts_with("video/") {
        return Err(CoreError::ContentType(content_type));
    }

    let total_len = response.content_length();

    let staging_dir = dest.parent().filter(|p| !p.as_os_str().is_empty()).ok_or_else(|| {
        CoreError::PathError(format!(
            "Destination '{}' has no parent directory",
            dest.display()
        ))
    })?;

    // Stream into a staging file; it is cleaned up on drop if anything
    // below fails, so no partial file is ever visible at `dest`.
    let staging = TempFileBuilder::new()
        .prefix(".backdrop_download_")
        .suffix(".part")
        .tempfile_in(staging_dir)?;

    let mut downloaded: u64 = 0;
    {
        let mut writer = BufWriter::new(staging.as_file());
        let mut chunk = [0u8; DOWNLOAD_CHUNK_SIZE];
        loop {
            let read = response.read(&mut chunk)?;
            if read == 0 {
                break;
            }
            writer.write_all(&chunk[..read])?;
            downloaded += read as u64;
            if let Some(observer) = progress.as_mut() {
                observer(downloaded, total_len);
            }
        }
        writer.flush()?;
    }

    staging.persist(dest).map_err(|e| CoreError::Io(e.error))?;

    log::debug!("Sample video written to {} ({downloaded} bytes)", dest.display());
    Ok(downloaded)
}
