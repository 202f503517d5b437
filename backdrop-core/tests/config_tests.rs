// backdrop-core/tests/config_tests.rs

use backdrop_core::config::{
    AssetSpec, AssetSpecBuilder, DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_SAMPLE_VIDEO_URL,
    DEFAULT_VIDEO_DURATION_SECS, DEFAULT_VIDEO_FILENAME, DEFAULT_VIDEO_HEIGHT,
    DEFAULT_VIDEO_WIDTH,
};
use backdrop_core::error::CoreError;
use std::path::PathBuf;

#[test]
fn test_default_spec_matches_constants_and_validates() {
    let spec = AssetSpec::default();

    assert_eq!(spec.video_filename, DEFAULT_VIDEO_FILENAME);
    assert_eq!(spec.video_width, DEFAULT_VIDEO_WIDTH);
    assert_eq!(spec.video_height, DEFAULT_VIDEO_HEIGHT);
    assert_eq!(spec.video_duration_secs, DEFAULT_VIDEO_DURATION_SECS);
    assert_eq!(spec.source_url, DEFAULT_SAMPLE_VIDEO_URL);
    assert_eq!(spec.download_timeout_secs, DEFAULT_DOWNLOAD_TIMEOUT_SECS);
    assert!(spec.api_key.is_empty());
    assert!(spec.validate().is_ok());
}

#[test]
fn test_builder_overrides_fields() {
    let spec = AssetSpecBuilder::new()
        .output_dir(PathBuf::from("custom/videos"))
        .video_filename("loop.mp4")
        .dimensions(1280, 720)
        .duration_secs(30)
        .model("video-gen-2")
        .api_key("secret")
        .source_url("https://example.com/clip.mp4")
        .download_timeout_secs(60)
        .build();

    assert_eq!(spec.output_dir, PathBuf::from("custom/videos"));
    assert_eq!(spec.video_filename, "loop.mp4");
    assert_eq!(spec.video_width, 1280);
    assert_eq!(spec.video_height, 720);
    assert_eq!(spec.video_duration_secs, 30);
    assert_eq!(spec.model, "video-gen-2");
    assert_eq!(spec.api_key, "secret");
    assert_eq!(spec.source_url, "https://example.com/clip.mp4");
    assert_eq!(spec.download_timeout_secs, 60);
    assert!(spec.validate().is_ok());
}

#[test]
fn test_output_path_joins_dir_and_filename() {
    let spec = AssetSpecBuilder::new()
        .output_dir(PathBuf::from("assets/videos"))
        .video_filename("intro.mp4")
        .build();

    assert_eq!(spec.output_path(), PathBuf::from("assets/videos").join("intro.mp4"));
}

fn expect_config_error(spec: &AssetSpec) {
    match spec.validate().err().expect("expected validation failure") {
        CoreError::Config(_) => {}
        e => panic!("Unexpected error type: {:?}", e),
    }
}

#[test]
fn test_validate_rejects_zero_dimensions() {
    let mut spec = AssetSpec::default();
    spec.video_width = 0;
    expect_config_error(&spec);

    let mut spec = AssetSpec::default();
    spec.video_height = 0;
    expect_config_error(&spec);
}

#[test]
fn test_validate_rejects_portrait_and_square_orientation() {
    let spec = AssetSpecBuilder::new().dimensions(1080, 1920).build();
    expect_config_error(&spec);

    let spec = AssetSpecBuilder::new().dimensions(1080, 1080).build();
    expect_config_error(&spec);
}

#[test]
fn test_validate_rejects_zero_duration() {
    let spec = AssetSpecBuilder::new().duration_secs(0).build();
    expect_config_error(&spec);
}

#[test]
fn test_validate_rejects_bad_filenames() {
    let spec = AssetSpecBuilder::new().video_filename("").build();
    expect_config_error(&spec);

    let spec = AssetSpecBuilder::new().video_filename("videos/intro.mp4").build();
    expect_config_error(&spec);
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let spec = AssetSpecBuilder::new().download_timeout_secs(0).build();
    expect_config_error(&spec);
}

#[test]
fn test_validate_rejects_unparseable_url() {
    let spec = AssetSpecBuilder::new().source_url("not a url").build();
    match spec.validate().err().expect("expected URL failure") {
        CoreError::InvalidUrl(raw, _) => assert_eq!(raw, "not a url"),
        e => panic!("Unexpected error type: {:?}", e),
    }
}
