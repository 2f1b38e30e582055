//! Storyreel turns a block of narrative text into an illustrated slide video.
//!
//! The core is the slide compilation pipeline, which produces a silent MP4 at
//! one slide per second:
//!
//! 1. **Segment**: `&str -> Vec<Slide>` (sentence-like units, pure function)
//! 2. **Render**: `Slide -> FrameRGBA` (deterministic 640x480 raster: fixed
//!    background, fixed character illustration, word-wrapped caption)
//! 3. **Compile**: `&[FrameRGBA] -> VideoArtifact` (stage zero-padded PNGs
//!    into the encoder sandbox, invoke the system `ffmpeg` once, read back
//!    the container bytes)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: identical slide text yields pixel-identical
//!   frames for a fixed canvas and font environment.
//! - **Single-flight encoder**: the sandbox loads once per process behind a
//!   shared gate, and at most one compile runs at a time.
//!
//! OCR, story generation, and narration pacing are external collaborators
//! behind the [`TextExtractor`], [`StoryGenerator`], and
//! [`NarrationSynthesizer`] traits; the exported artifact never depends on
//! them.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod foundation;
mod pipeline;
mod render;
mod session;
mod story;

pub use encode::compiler::{VIDEO_MIME_TYPE, VideoArtifact, compile_video};
pub use encode::request::{EncodeRequest, MAX_FRAMES, frame_file_name};
pub use encode::sandbox::{EncoderSandbox, is_ffmpeg_on_path};
pub use foundation::core::{Canvas, Rgba8};
pub use foundation::error::{StoryError, StoryResult};
pub use pipeline::export::{EXPORT_FRAME_RATE, ExportOpts, export_story_video};
pub use render::caption::{
    CAPTION_BASELINE_START_Y, CAPTION_FONT_SIZE_PX, CAPTION_FONT_STACK, CAPTION_LINE_HEIGHT_PX,
    CAPTION_MAX_LINE_WIDTH_PX, wrap_caption,
};
pub use render::frame::{FrameRGBA, RenderThreading, SlideRenderer, render_story};
pub use render::scene::{BACKGROUND, CAPTION_COLOR, SLIDE_CANVAS};
pub use render::text::TextMeasurer;
pub use session::ports::{NarrationSynthesizer, StoryGenerator, TextExtractor, story_prompt};
pub use session::state::SessionState;
pub use story::model::{Slide, Story};
pub use story::segment::segment;
