use super::*;

fn frame(ordinal: u32, w: u32, h: u32) -> FrameRGBA {
    FrameRGBA {
        ordinal,
        width: w,
        height: h,
        data: vec![0u8; (w * h * 4) as usize],
    }
}

#[test]
fn empty_input_is_rejected_before_touching_the_sandbox() {
    assert!(matches!(compile_video(&[], 1), Err(StoryError::InputEmpty)));
}

#[test]
fn zero_frame_rate_is_rejected_before_encoding() {
    assert!(matches!(
        compile_video(&[frame(0, 2, 2)], 0),
        Err(StoryError::Validation(_))
    ));
}

#[test]
fn frame_validation_catches_gaps_and_mismatches() {
    let mut frames = vec![frame(0, 4, 4), frame(2, 4, 4)];
    assert!(validate_frames(&frames).is_err());

    frames[1].ordinal = 1;
    validate_frames(&frames).unwrap();

    frames[1].width = 8;
    frames[1].data = vec![0u8; 8 * 4 * 4];
    assert!(validate_frames(&frames).is_err());
}

#[test]
fn short_frame_buffer_is_rejected() {
    let mut bad = frame(0, 4, 4);
    bad.data.pop();
    assert!(validate_frames(&[bad]).is_err());
}

#[test]
fn too_many_frames_for_the_naming_scheme_are_rejected() {
    let frames: Vec<FrameRGBA> = (0..=MAX_FRAMES as u32).map(|i| frame(i, 2, 2)).collect();
    assert!(validate_frames(&frames).is_err());
}

#[test]
fn flatten_premul_alpha_0_returns_bg() {
    let src = vec![0u8, 0, 0, 0];
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg_to_opaque_rgba8(&mut dst, &src, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn flatten_premul_alpha_255_is_identity() {
    let src = vec![1u8, 2, 3, 255];
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg_to_opaque_rgba8(&mut dst, &src, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn video_artifact_debug_omits_bytes() {
    let artifact = VideoArtifact {
        mime_type: VIDEO_MIME_TYPE,
        bytes: vec![0u8; 4096],
    };
    let dbg = format!("{artifact:?}");
    assert!(dbg.contains("video/mp4"));
    assert!(dbg.contains("4096"));
}
