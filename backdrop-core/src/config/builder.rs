// ============================================================================
// backdrop-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for AssetSpec
//
// This module implements the builder pattern for the AssetSpec structure,
// providing a fluent API for creating and configuring AssetSpec instances.
// Every field has a default, so consumers only set the parameters they
// want to override.
//
// KEY COMPONENTS:
// - AssetSpecBuilder: Builder struct for creating AssetSpec instances
//
// AI-ASSISTANT-INFO: Builder pattern implementation for AssetSpec

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::AssetSpec;

/// Builder for creating AssetSpec instances.
///
/// # Examples
///
/// ```rust
/// use backdrop_core::config::AssetSpecBuilder;
/// use std::path::PathBuf;
///
/// let spec = AssetSpecBuilder::new()
///     .output_dir(PathBuf::from("assets/videos"))
///     .video_filename("game-intro.mp4")
///     .dimensions(1920, 1080)
///     .duration_secs(15)
///     .source_url("https://samplelib.com/lib/preview/mp4/sample-5s.mp4")
///     .download_timeout_secs(600)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssetSpecBuilder {
    spec: AssetSpec,
}

impl AssetSpecBuilder {
    /// Creates a new AssetSpecBuilder with default values.
    pub fn new() -> Self {
        Self { spec: AssetSpec::default() }
    }

    /// Sets the directory where the asset will be written.
    pub fn output_dir(mut self, dir: PathBuf) -> Self {
        self.spec.output_dir = dir;
        self
    }

    /// Sets the file name of the asset within the output directory.
    pub fn video_filename<S: Into<String>>(mut self, name: S) -> Self {
        self.spec.video_filename = name.into();
        self
    }

    /// Sets the intended video dimensions in pixels.
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.spec.video_width = width;
        self.spec.video_height = height;
        self
    }

    /// Sets the intended duration of the background loop, in seconds.
    pub fn duration_secs(mut self, secs: u32) -> Self {
        self.spec.video_duration_secs = secs;
        self
    }

    /// Sets the generative model identifier.
    pub fn model<S: Into<String>>(mut self, model: S) -> Self {
        self.spec.model = model.into();
        self
    }

    /// Sets the API credential for the generative service.
    pub fn api_key<S: Into<String>>(mut self, key: S) -> Self {
        self.spec.api_key = key.into();
        self
    }

    /// Sets the URL of the downloadable sample clip.
    pub fn source_url<S: Into<String>>(mut self, url: S) -> Self {
        self.spec.source_url = url.into();
        self
    }

    /// Sets the HTTP timeout for the sample download, in seconds.
    pub fn download_timeout_secs(mut self, secs: u64) -> Self {
        self.spec.download_timeout_secs = secs;
        self
    }

    /// Consumes the builder and returns the configured AssetSpec.
    ///
    /// The result is not validated; call [`AssetSpec::validate`] before use.
    #[must_use]
    pub fn build(self) -> AssetSpec {
        self.spec
    }
}
