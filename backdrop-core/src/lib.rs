//! Core library for preparing a placeholder background video asset.
//!
//! This crate builds the generation prompt for the intended video, attempts
//! to download a short sample clip over HTTP, and falls back to writing a
//! descriptive text placeholder when the download fails.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use backdrop_core::{AssetSpec, AssetSource, prepare_asset};
//!
//! let spec = AssetSpec::default();
//! spec.validate().unwrap();
//!
//! println!("{}", backdrop_core::build_video_prompt(&spec));
//!
//! let report = prepare_asset(&spec, None).unwrap();
//! match report.source {
//!     AssetSource::Download => println!("downloaded {} bytes", report.file_size),
//!     AssetSource::Placeholder => println!("wrote placeholder description"),
//! }
//! ```

pub mod acquisition;
pub mod config;
pub mod error;
pub mod placeholder;
pub mod processing;
pub mod prompt;
pub mod utils;

// Re-exports for public API
pub use acquisition::{download_sample, ProgressObserver, DOWNLOAD_CHUNK_SIZE};
pub use config::{AssetSpec, AssetSpecBuilder};
pub use error::{CoreError, CoreResult};
pub use placeholder::write_placeholder;
pub use processing::prepare_asset;
pub use prompt::build_video_prompt;
pub use utils::{aspect_label, format_bytes, format_duration};

use std::path::PathBuf;
use std::time::Duration;

/// How the prepared asset was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSource {
    /// The sample clip was downloaded from the configured URL.
    Download,
    /// The download failed and a descriptive text placeholder was written.
    Placeholder,
}

/// Result of an asset preparation run.
///
/// Returned by the `prepare_asset` function when at least one of the two
/// preparation steps succeeded.
#[derive(Debug, Clone)]
pub struct PrepareReport {
    /// Full path of the produced file.
    pub output_path: PathBuf,
    /// Which step produced the file.
    pub source: AssetSource,
    /// Size of the produced file in bytes.
    pub file_size: u64,
    /// Wall-clock time of the whole run.
    pub elapsed: Duration,
}
