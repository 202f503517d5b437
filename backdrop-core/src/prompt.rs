//! Generation prompt builder for the intended background video.
//!
//! The prompt describes the video a generative service would be asked to
//! produce. No generation call is made; the text is printed so it can be
//! pasted into whichever service ends up producing the real asset.

use crate::config::AssetSpec;
use crate::utils::aspect_label;

/// Builds the generation prompt for the background video described by `spec`.
///
/// The prompt embeds the configured aspect ratio and duration; the content
/// and style requirements are fixed by the game's art direction.
#[must_use]
pub fn build_video_prompt(spec: &AssetSpec) -> String {
    let aspect = aspect_label(spec.video_width, spec.video_height);
    format!(
        "Create a stunning, high-quality animated background video for a drone flight mobile game. \
         The video should be in landscape orientation ({aspect} aspect ratio) and last approximately \
         {duration} seconds. The content should include:\n\
         \n\
         1. Aerial view of a scenic landscape with mountains, forests, and lakes\n\
         2. A sleek, modern drone flying smoothly through the environment\n\
         3. Dynamic camera movements following the drone\n\
         4. Vibrant colors and realistic lighting effects\n\
         5. Smooth transitions and fluid animations\n\
         6. No text or logos on the video\n\
         7. The video should loop seamlessly\n\
         \n\
         Style requirements:\n\
         - Cinematic and immersive\n\
         - High resolution and detail\n\
         - Professional quality suitable for a mobile game\n\
         - Visually appealing and engaging\n\
         - Calming yet exciting atmosphere\n\
         \n\
         The video will be used as a background for the game's login screen and main menu, \
         so it should set the mood for an exciting drone flight experience.",
        duration = spec.video_duration_secs,
    )
}
