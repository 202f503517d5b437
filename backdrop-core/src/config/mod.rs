//! Configuration structures and constants for the backdrop-core library.
//!
//! This module provides the configuration system for asset preparation
//! behavior, including the target video's dimensions, duration, and the
//! source of the downloadable sample clip.

mod builder;

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

pub use builder::AssetSpecBuilder;

// Default constants

/// Default directory receiving the prepared asset, relative to the
/// working directory of the invoking process.
pub const DEFAULT_OUTPUT_DIR: &str = "./assets/videos";

/// Default file name for the prepared asset.
pub const DEFAULT_VIDEO_FILENAME: &str = "game-intro.mp4";

/// Default video width in pixels. 1920x1080 gives the 16:9 landscape
/// frame the game's menu screens are laid out for.
pub const DEFAULT_VIDEO_WIDTH: u32 = 1920;

/// Default video height in pixels.
pub const DEFAULT_VIDEO_HEIGHT: u32 = 1080;

/// Default target duration of the background loop, in seconds.
pub const DEFAULT_VIDEO_DURATION_SECS: u32 = 15;

/// Default generative model identifier. Echoed in diagnostics; no
/// generation call is made with it.
pub const DEFAULT_MODEL: &str = "gpt-4-vision-preview";

/// Public sample clip used as a stand-in until a real background video
/// is generated.
pub const DEFAULT_SAMPLE_VIDEO_URL: &str =
    "https://samplelib.com/lib/preview/mp4/sample-5s.mp4";

/// Default HTTP timeout for the sample download, in seconds. Generous so
/// that slow transfers still complete.
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 600;

/// Describes the background video asset to prepare.
///
/// This structure holds all the parameters required for asset preparation,
/// including the destination path components, the intended video's
/// dimensions and duration, and the sample download settings. It is
/// typically created by the consumer of the library (e.g., backdrop-cli)
/// and passed to the `prepare_asset` function.
///
/// All fields have sensible defaults. The builder pattern provides a
/// convenient way to create and configure instances.
///
/// # Examples
///
/// ```rust,no_run
/// use backdrop_core::config::AssetSpecBuilder;
/// use std::path::PathBuf;
///
/// let spec = AssetSpecBuilder::new()
///     .output_dir(PathBuf::from("assets/videos"))
///     .video_filename("menu-loop.mp4")
///     .dimensions(1920, 1080)
///     .duration_secs(15)
///     .build();
/// spec.validate().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct AssetSpec {
    /// Directory where the asset will be written. Created (with parents)
    /// before either preparation step runs.
    pub output_dir: PathBuf,

    /// File name of the asset within `output_dir`.
    pub video_filename: String,

    /// Intended video width in pixels. Must exceed `video_height`.
    pub video_width: u32,

    /// Intended video height in pixels.
    pub video_height: u32,

    /// Intended duration of the background loop, in seconds.
    pub video_duration_secs: u32,

    /// Generative model identifier. Not used for any API call.
    pub model: String,

    /// API credential for the generative service. Read from the
    /// environment by the CLI; empty when absent. Unused operationally.
    pub api_key: String,

    /// URL of the downloadable sample clip.
    pub source_url: String,

    /// HTTP timeout applied to the sample download, in seconds.
    pub download_timeout_secs: u64,
}

impl Default for AssetSpec {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            video_filename: DEFAULT_VIDEO_FILENAME.to_string(),
            video_width: DEFAULT_VIDEO_WIDTH,
            video_height: DEFAULT_VIDEO_HEIGHT,
            video_duration_secs: DEFAULT_VIDEO_DURATION_SECS,
            model: DEFAULT_MODEL.to_string(),
            api_key: String::new(),
            source_url: DEFAULT_SAMPLE_VIDEO_URL.to_string(),
            download_timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
        }
    }
}

impl AssetSpec {
    /// Returns the full path of the asset file: `output_dir/video_filename`.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.video_filename)
    }

    /// Validates the specification.
    ///
    /// Checks that the filename is non-empty and a bare name (no path
    /// separators), the dimensions are positive and landscape-oriented,
    /// the duration and timeout are nonzero, and the source URL parses.
    pub fn validate(&self) -> CoreResult<()> {
        if self.video_filename.is_empty() {
            return Err(CoreError::Config("video filename must not be empty".to_string()));
        }
        if self.video_filename.contains('/') || self.video_filename.contains('\\') {
            return Err(CoreError::Config(format!(
                "video filename '{}' must not contain path separators",
                self.video_filename
            )));
        }
        if self.video_width == 0 || self.video_height == 0 {
            return Err(CoreError::Config(format!(
                "video dimensions must be positive, got {}x{}",
                self.video_width, self.video_height
            )));
        }
        if self.video_width <= self.video_height {
            return Err(CoreError::Config(format!(
                "video must be landscape (width > height), got {}x{}",
                self.video_width, self.video_height
            )));
        }
        if self.video_duration_secs == 0 {
            return Err(CoreError::Config("video duration must be positive".to_string()));
        }
        if self.download_timeout_secs == 0 {
            return Err(CoreError::Config("download timeout must be positive".to_string()));
        }
        url::Url::parse(&self.source_url)
            .map_err(|e| CoreError::InvalidUrl(self.source_url.clone(), e))?;
        Ok(())
    }
}
