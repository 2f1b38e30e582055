use super::*;

use crate::render::scene::SLIDE_CANVAS;

fn slide(ordinal: u32, text: &str) -> Slide {
    Slide {
        ordinal,
        text: text.to_string(),
    }
}

#[test]
fn render_is_deterministic_for_identical_text() {
    let mut renderer = SlideRenderer::new(SLIDE_CANVAS);
    let s = slide(0, "A small cat sat on the mat.");
    let a = renderer.render_slide(&s).unwrap();
    let b = renderer.render_slide(&s).unwrap();
    assert_eq!(a.data, b.data);
}

#[test]
fn rendered_frame_matches_canvas_and_keeps_ordinal() {
    let mut renderer = SlideRenderer::new(SLIDE_CANVAS);
    let frame = renderer.render_slide(&slide(7, "Hello.")).unwrap();
    assert_eq!(frame.ordinal, 7);
    assert_eq!(frame.width, 640);
    assert_eq!(frame.height, 480);
    assert_eq!(frame.data.len(), 640 * 480 * 4);
}

#[test]
fn empty_caption_renders_background_and_illustration() {
    let mut renderer = SlideRenderer::new(SLIDE_CANVAS);
    let frame = renderer.render_slide(&slide(0, "")).unwrap();

    // Top-left corner is the page background.
    assert_eq!(&frame.data[0..4], &[0xFF, 0xF8, 0xDC, 0xFF]);

    // The face disc covers its own center.
    let center = (150 * 640 + 320) * 4;
    assert_eq!(&frame.data[center..center + 4], &[0xFF, 0xCC, 0x80, 0xFF]);

    // Pupil centers are black.
    let pupil = (130 * 640 + 270) * 4;
    assert_eq!(&frame.data[pupil..pupil + 4], &[0x00, 0x00, 0x00, 0xFF]);
}

#[test]
fn parallel_rendering_preserves_slide_order() {
    let slides: Vec<Slide> = (0..6)
        .map(|i| slide(i, &format!("Slide number {i}.")))
        .collect();

    let sequential = render_story(&slides, SLIDE_CANVAS, &RenderThreading::default()).unwrap();
    let parallel = render_story(
        &slides,
        SLIDE_CANVAS,
        &RenderThreading {
            parallel: true,
            threads: Some(2),
        },
    )
    .unwrap();

    assert_eq!(sequential.len(), parallel.len());
    for (s, p) in sequential.iter().zip(&parallel) {
        assert_eq!(s.ordinal, p.ordinal);
        assert_eq!(s.data, p.data);
    }
}

#[test]
fn zero_worker_threads_is_rejected() {
    let err = render_story(
        &[],
        SLIDE_CANVAS,
        &RenderThreading {
            parallel: true,
            threads: Some(0),
        },
    );
    assert!(err.is_err());
}

#[test]
fn oversized_canvas_is_rejected_at_render_time() {
    let mut renderer = SlideRenderer::new(Canvas {
        width: 70_000,
        height: 480,
    });
    assert!(renderer.render_slide(&slide(0, "x")).is_err());
}
