use std::io::Cursor;
use std::path::Path;
use std::process::Command;

use crate::encode::request::{EncodeRequest, MAX_FRAMES, frame_file_name};
use crate::encode::sandbox::EncoderSandbox;
use crate::foundation::error::{StoryError, StoryResult};
use crate::render::frame::FrameRGBA;
use crate::render::scene::BACKGROUND;

/// MIME type of compiled artifacts.
pub const VIDEO_MIME_TYPE: &str = "video/mp4";

/// The compiled video container, held in memory for the current session.
///
/// A new compile supersedes any previously stored artifact; nothing is
/// persisted across sessions.
#[derive(Clone, PartialEq, Eq)]
pub struct VideoArtifact {
    /// MIME type of `bytes`; always `video/mp4`.
    pub mime_type: &'static str,
    /// Container file bytes.
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for VideoArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoArtifact")
            .field("mime_type", &self.mime_type)
            .field("byte_len", &self.bytes.len())
            .finish()
    }
}

/// Compile an ordered frame sequence into a single MP4 artifact.
///
/// Protocol: reject empty input before touching the sandbox, ensure the
/// shared encoder sandbox is ready, take the single-compile gate, stage every
/// frame as a zero-padded PNG in ordinal order, invoke the encoder once, and
/// read the container back as bytes. The staging directory is discarded
/// regardless of outcome.
///
/// Fails with [`StoryError::InputEmpty`] on zero frames,
/// [`StoryError::EncoderUnavailable`] when the sandbox cannot load,
/// [`StoryError::CompileBusy`] while another compile is in flight, and
/// [`StoryError::Encoding`] when the encoder reports non-success.
#[tracing::instrument(skip(frames), fields(frame_count = frames.len()))]
pub fn compile_video(frames: &[FrameRGBA], frame_rate: u32) -> StoryResult<VideoArtifact> {
    if frames.is_empty() {
        return Err(StoryError::InputEmpty);
    }
    validate_frames(frames)?;

    let request = EncodeRequest::mp4(frame_rate);
    request.validate()?;

    let sandbox = EncoderSandbox::shared()?;
    let _compile = sandbox.try_begin_compile()?;
    let stage = sandbox.stage_dir()?;

    for frame in frames {
        stage_frame(stage.path(), frame)?;
    }

    let bytes = run_encoder(&request, stage.path())?;
    tracing::debug!(byte_len = bytes.len(), "encoded video artifact");
    Ok(VideoArtifact {
        mime_type: VIDEO_MIME_TYPE,
        bytes,
    })
}

fn validate_frames(frames: &[FrameRGBA]) -> StoryResult<()> {
    if frames.len() > MAX_FRAMES {
        return Err(StoryError::validation(format!(
            "at most {MAX_FRAMES} frames are supported by the staging naming scheme, got {}",
            frames.len()
        )));
    }

    let first = &frames[0];
    for (i, frame) in frames.iter().enumerate() {
        if frame.ordinal as usize != i {
            return Err(StoryError::validation(format!(
                "frame ordinals must be contiguous from 0: found {} at position {i}",
                frame.ordinal
            )));
        }
        if frame.width != first.width || frame.height != first.height {
            return Err(StoryError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, first.width, first.height
            )));
        }
        let expected = (frame.width as usize)
            .saturating_mul(frame.height as usize)
            .saturating_mul(4);
        if frame.data.len() != expected {
            return Err(StoryError::validation(
                "frame.data size mismatch with width*height*4",
            ));
        }
    }
    Ok(())
}

/// Write one frame into the staging directory under its ordinal-derived name.
fn stage_frame(stage_dir: &Path, frame: &FrameRGBA) -> StoryResult<()> {
    use anyhow::Context as _;

    let mut flattened = vec![0u8; frame.data.len()];
    flatten_premul_over_bg_to_opaque_rgba8(
        &mut flattened,
        &frame.data,
        [BACKGROUND.r, BACKGROUND.g, BACKGROUND.b, BACKGROUND.a],
    )?;

    let img = image::RgbaImage::from_raw(frame.width, frame.height, flattened)
        .ok_or_else(|| StoryError::validation("frame buffer does not match dimensions"))?;
    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| StoryError::encoding(format!("failed to encode staged frame png: {e}")))?;

    let path = stage_dir.join(frame_file_name(frame.ordinal));
    std::fs::write(&path, &png)
        .with_context(|| format!("failed to stage frame '{}'", path.display()))?;
    Ok(())
}

fn run_encoder(request: &EncodeRequest, stage_dir: &Path) -> StoryResult<Vec<u8>> {
    use anyhow::Context as _;

    let output = Command::new("ffmpeg")
        .args(request.to_args(stage_dir))
        .output()
        .map_err(|e| {
            StoryError::encoder_unavailable(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(StoryError::encoding(format!(
            "ffmpeg exited with status {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let out_path = stage_dir.join(&request.output_name);
    let bytes = std::fs::read(&out_path)
        .with_context(|| format!("failed to read encoded output '{}'", out_path.display()))?;
    Ok(bytes)
}

/// Flatten premultiplied RGBA8 over an opaque background color.
///
/// The encoder consumes opaque frames; staged pixels carry no transparency
/// after this pass.
fn flatten_premul_over_bg_to_opaque_rgba8(
    dst: &mut [u8],
    src_premul: &[u8],
    bg_rgba: [u8; 4],
) -> StoryResult<()> {
    if dst.len() != src_premul.len() || !dst.len().is_multiple_of(4) {
        return Err(StoryError::validation(
            "flatten_premul_over_bg_to_opaque_rgba8 expects equal-length rgba8 buffers",
        ));
    }

    let bg_r = bg_rgba[0] as u16;
    let bg_g = bg_rgba[1] as u16;
    let bg_b = bg_rgba[2] as u16;

    for (d, s) in dst.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        let a = s[3] as u16;
        if a == 255 {
            d.copy_from_slice(s);
            d[3] = 255;
            continue;
        }

        let inv = 255u16 - a;
        let r = s[0] as u16 + mul_div255(bg_r, inv);
        let g = s[1] as u16 + mul_div255(bg_g, inv);
        let b = s[2] as u16 + mul_div255(bg_b, inv);

        d[0] = r.min(255) as u8;
        d[1] = g.min(255) as u8;
        d[2] = b.min(255) as u8;
        d[3] = 255;
    }

    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/encode/compiler.rs"]
mod tests;
