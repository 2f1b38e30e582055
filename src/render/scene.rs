use kurbo::{BezPath, Circle, Point, Shape};

use crate::foundation::core::{Canvas, Rgba8};

/// Fixed slide canvas dimensions.
pub const SLIDE_CANVAS: Canvas = Canvas {
    width: 640,
    height: 480,
};

/// Cornsilk page background.
pub const BACKGROUND: Rgba8 = Rgba8::opaque(0xFF, 0xF8, 0xDC);

/// Caption text fill.
pub const CAPTION_COLOR: Rgba8 = Rgba8::opaque(0x00, 0x00, 0x00);

const FACE: Rgba8 = Rgba8::opaque(0xFF, 0xCC, 0x80);
const EYE_WHITE: Rgba8 = Rgba8::opaque(0xFF, 0xFF, 0xFF);
const PUPIL: Rgba8 = Rgba8::opaque(0x00, 0x00, 0x00);
const MOUTH: Rgba8 = Rgba8::opaque(0xB7, 0x1C, 0x1C);

/// One filled vector shape of the fixed illustration.
pub(crate) struct SceneFill {
    /// Fill color.
    pub(crate) color: Rgba8,
    /// Shape outline.
    pub(crate) path: BezPath,
}

/// The fixed cartoon character, identical on every frame.
///
/// Face disc at (320,150) r=100, eye whites r=30 at (270,130) and (370,130),
/// pupils r=10 at the same centers, and a crescent smile below the eyes. The
/// mouth is a closed two-quadratic shape rather than a stroked curve, keeping
/// the renderer on fill-only drawing.
pub(crate) fn character_fills() -> Vec<SceneFill> {
    let circle = |x: f64, y: f64, r: f64| Circle::new(Point::new(x, y), r).to_path(0.1);

    let mut mouth = BezPath::new();
    mouth.move_to((240.0, 200.0));
    mouth.quad_to((320.0, 270.0), (400.0, 200.0));
    mouth.quad_to((320.0, 250.0), (240.0, 200.0));
    mouth.close_path();

    vec![
        SceneFill {
            color: FACE,
            path: circle(320.0, 150.0, 100.0),
        },
        SceneFill {
            color: EYE_WHITE,
            path: circle(270.0, 130.0, 30.0),
        },
        SceneFill {
            color: EYE_WHITE,
            path: circle(370.0, 130.0, 30.0),
        },
        SceneFill {
            color: PUPIL,
            path: circle(270.0, 130.0, 10.0),
        },
        SceneFill {
            color: PUPIL,
            path: circle(370.0, 130.0, 10.0),
        },
        SceneFill {
            color: MOUTH,
            path: mouth,
        },
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
