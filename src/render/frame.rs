use std::collections::HashMap;

use rayon::prelude::*;

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{StoryError, StoryResult};
use crate::render::caption::{
    CAPTION_BASELINE_START_Y, CAPTION_FONT_SIZE_PX, CAPTION_FONT_STACK, CAPTION_LINE_HEIGHT_PX,
    wrap_caption,
};
use crate::render::scene::{self, character_fills};
use crate::render::text::{CaptionBrush, CaptionEngine};
use crate::story::model::Slide;

/// A rendered frame as premultiplied RGBA8 pixels.
///
/// One frame corresponds to exactly one slide and carries its ordinal so the
/// compiler can derive the staged file name.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Ordinal of the slide this frame was rendered from.
    pub ordinal: u32,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, premultiplied alpha.
    pub data: Vec<u8>,
}

/// Threading controls for story-level rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderThreading {
    /// Enable parallel rendering when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

/// Deterministic renderer turning slides into pixels.
///
/// The raster context is reused across frames; identical slide text yields
/// pixel-identical output for a fixed canvas and font environment.
pub struct SlideRenderer {
    canvas: Canvas,
    ctx: Option<vello_cpu::RenderContext>,
    captions: CaptionEngine,
    // Resolved caption fonts keyed by (blob id, face index).
    font_cache: HashMap<(u64, u32), vello_cpu::peniko::FontData>,
}

impl SlideRenderer {
    /// Create a renderer for `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            ctx: None,
            captions: CaptionEngine::new(CAPTION_FONT_STACK, CAPTION_FONT_SIZE_PX),
            font_cache: HashMap::new(),
        }
    }

    /// Render one slide: background, fixed illustration, wrapped caption.
    ///
    /// Rendering does not fail for any valid slide; an empty caption draws
    /// only the background and illustration.
    pub fn render_slide(&mut self, slide: &Slide) -> StoryResult<FrameRGBA> {
        let width: u16 = self
            .canvas
            .width
            .try_into()
            .map_err(|_| StoryError::validation("canvas width exceeds u16"))?;
        let height: u16 = self
            .canvas
            .height
            .try_into()
            .map_err(|_| StoryError::validation("canvas height exceeds u16"))?;

        let caption_brush = CaptionBrush {
            r: scene::CAPTION_COLOR.r,
            g: scene::CAPTION_COLOR.g,
            b: scene::CAPTION_COLOR.b,
            a: scene::CAPTION_COLOR.a,
        };
        let lines = wrap_caption(&slide.text, &mut self.captions);
        let layouts: Vec<parley::Layout<CaptionBrush>> = lines
            .iter()
            .map(|line| self.captions.layout_line(line, caption_brush))
            .collect();

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(paint_color(scene::BACKGROUND));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.canvas.width),
            f64::from(self.canvas.height),
        ));

        for fill in character_fills() {
            ctx.set_paint(paint_color(fill.color));
            ctx.fill_path(&bezpath_to_cpu(&fill.path));
        }

        let center_x = f64::from(self.canvas.width) / 2.0;
        for (i, layout) in layouts.iter().enumerate() {
            let baseline_y = CAPTION_BASELINE_START_Y + (i as f32) * CAPTION_LINE_HEIGHT_PX;
            draw_caption_line(&mut ctx, layout, center_x, baseline_y, &mut self.font_cache);
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);
        let data = pixmap.data_as_u8_slice().to_vec();
        self.ctx = Some(ctx);

        Ok(FrameRGBA {
            ordinal: slide.ordinal,
            width: self.canvas.width,
            height: self.canvas.height,
            data,
        })
    }
}

/// Render every slide of a story, preserving ordinal order.
///
/// Frames have no ordering dependency between them, so the parallel path fans
/// out across worker renderers; output order always equals input order.
pub fn render_story(
    slides: &[Slide],
    canvas: Canvas,
    threading: &RenderThreading,
) -> StoryResult<Vec<FrameRGBA>> {
    if !threading.parallel {
        let mut renderer = SlideRenderer::new(canvas);
        return slides
            .iter()
            .map(|slide| renderer.render_slide(slide))
            .collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    let rendered = pool.install(|| {
        slides
            .par_iter()
            .map_init(
                || SlideRenderer::new(canvas),
                |renderer, slide| renderer.render_slide(slide),
            )
            .collect::<Vec<_>>()
    });

    let mut out = Vec::with_capacity(rendered.len());
    for item in rendered {
        out.push(item?);
    }
    Ok(out)
}

fn build_thread_pool(threads: Option<usize>) -> StoryResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(StoryError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| StoryError::validation(format!("failed to build rayon thread pool: {e}")))
}

fn paint_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// Draw one already-wrapped caption line centered at `center_x` with its
/// baseline on `baseline_y`.
fn draw_caption_line(
    ctx: &mut vello_cpu::RenderContext,
    layout: &parley::Layout<CaptionBrush>,
    center_x: f64,
    baseline_y: f32,
    font_cache: &mut HashMap<(u64, u32), vello_cpu::peniko::FontData>,
) {
    let Some(line) = layout.lines().next() else {
        return;
    };
    let width = f64::from(layout.width());
    let origin_x = center_x - width / 2.0;
    let origin_y = f64::from(baseline_y) - f64::from(line.metrics().baseline);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin_x, origin_y)));

    for item in line.items() {
        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
            continue;
        };
        let brush = run.style().brush;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            brush.r, brush.g, brush.b, brush.a,
        ));

        let resolved = run.run().font();
        let font = font_cache
            .entry((resolved.data.id(), resolved.index))
            .or_insert_with(|| {
                vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(resolved.data.as_ref().to_vec()),
                    resolved.index,
                )
            });

        let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
            id: g.id,
            x: g.x,
            y: g.y,
        });
        ctx.glyph_run(font)
            .font_size(run.run().font_size())
            .fill_glyphs(glyphs);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
