use crate::encode::compiler::{VideoArtifact, compile_video};
use crate::foundation::error::{StoryError, StoryResult};
use crate::render::frame::{RenderThreading, render_story};
use crate::render::scene::SLIDE_CANVAS;
use crate::story::segment::segment;

/// Fixed export rate: every slide occupies exactly one second of output,
/// regardless of its text length or spoken narration duration.
pub const EXPORT_FRAME_RATE: u32 = 1;

/// Options for [`export_story_video`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ExportOpts {
    /// Render threading configuration.
    pub threading: RenderThreading,
}

/// Segment, render, and compile a narrative into a silent MP4 artifact.
///
/// Pipeline:
/// 1. [`segment`](crate::segment) the narrative into slides
/// 2. [`render_story`](crate::render_story) every slide to a frame
/// 3. [`compile_video`](crate::compile_video) the ordered frames at 1 fps
#[tracing::instrument(skip(story_text))]
pub fn export_story_video(story_text: &str, opts: &ExportOpts) -> StoryResult<VideoArtifact> {
    if story_text.trim().is_empty() {
        return Err(StoryError::validation("narrative must be non-empty"));
    }

    let slides = segment(story_text);
    tracing::debug!(slides = slides.len(), "segmented narrative");

    let frames = render_story(&slides, SLIDE_CANVAS, &opts.threading)?;
    compile_video(&frames, EXPORT_FRAME_RATE)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/export.rs"]
mod tests;
