use std::ffi::OsString;
use std::path::Path;

use crate::foundation::error::{StoryError, StoryResult};

/// Maximum number of frames the three-digit naming scheme supports.
pub const MAX_FRAMES: usize = 1000;

/// Staged file name for a frame ordinal: `frame000.png` .. `frame999.png`.
///
/// Zero-padding guarantees lexicographic order of the names equals ordinal
/// order, which is how the encoder infers sequence.
pub fn frame_file_name(ordinal: u32) -> String {
    format!("frame{ordinal:03}.png")
}

/// One strongly typed encoder invocation.
///
/// Replaces a loosely structured argument list: every knob the compiler turns
/// is a named field, and everything else about the invocation is fixed.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EncodeRequest {
    /// printf-style input pattern matching the staged frame names.
    pub input_pattern: String,
    /// Constant output frame rate in frames per second.
    pub frame_rate: u32,
    /// Video codec passed to the encoder.
    pub codec: String,
    /// Output pixel format.
    pub pixel_format: String,
    /// Container file name inside the staging directory.
    pub output_name: String,
}

impl EncodeRequest {
    /// The fixed MP4 request: H.264 + yuv420p for broad playback
    /// compatibility, silent output.
    pub fn mp4(frame_rate: u32) -> Self {
        Self {
            input_pattern: "frame%03d.png".to_string(),
            frame_rate,
            codec: "libx264".to_string(),
            pixel_format: "yuv420p".to_string(),
            output_name: "output.mp4".to_string(),
        }
    }

    /// Validate invocation parameters.
    pub fn validate(&self) -> StoryResult<()> {
        if self.frame_rate == 0 {
            return Err(StoryError::validation("encode frame_rate must be non-zero"));
        }
        if self.input_pattern.is_empty() {
            return Err(StoryError::validation("encode input_pattern must be non-empty"));
        }
        if self.codec.is_empty() || self.pixel_format.is_empty() {
            return Err(StoryError::validation(
                "encode codec/pixel_format must be non-empty",
            ));
        }
        if self.output_name.is_empty() {
            return Err(StoryError::validation("encode output_name must be non-empty"));
        }
        Ok(())
    }

    /// Encoder argv for frames staged under `stage_dir`.
    ///
    /// `-framerate` precedes `-i` so it applies to the image-sequence input;
    /// `-an` keeps the output silent.
    pub(crate) fn to_args(&self, stage_dir: &Path) -> Vec<OsString> {
        vec![
            OsString::from("-y"),
            OsString::from("-loglevel"),
            OsString::from("error"),
            OsString::from("-framerate"),
            OsString::from(self.frame_rate.to_string()),
            OsString::from("-i"),
            stage_dir.join(&self.input_pattern).into_os_string(),
            OsString::from("-an"),
            OsString::from("-c:v"),
            OsString::from(&self.codec),
            OsString::from("-pix_fmt"),
            OsString::from(&self.pixel_format),
            OsString::from("-movflags"),
            OsString::from("+faststart"),
            stage_dir.join(&self.output_name).into_os_string(),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/request.rs"]
mod tests;
