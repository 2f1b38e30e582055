use std::borrow::Cow;

/// RGBA8 brush color used by Parley caption layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct CaptionBrush {
    /// Red channel.
    pub(crate) r: u8,
    /// Green channel.
    pub(crate) g: u8,
    /// Blue channel.
    pub(crate) b: u8,
    /// Alpha channel.
    pub(crate) a: u8,
}

/// Width measurement seam used by the word-wrap algorithm.
///
/// Keeping measurement behind a trait keeps the wrap logic portable across
/// rendering backends and testable without a font environment.
pub trait TextMeasurer {
    /// Rendered width of `text` in pixels at the active caption font.
    fn measure_width(&mut self, text: &str) -> f32;
}

/// Stateful helper for building Parley caption layouts against the system
/// font collection.
///
/// The font stack is resolved per layout; unknown families fall through to
/// the generic entries at the end of the stack.
pub(crate) struct CaptionEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<CaptionBrush>,
    font_stack: &'static str,
    size_px: f32,
}

impl CaptionEngine {
    /// Construct a new engine with fresh Parley contexts.
    pub(crate) fn new(font_stack: &'static str, size_px: f32) -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            font_stack,
            size_px,
        }
    }

    /// Shape and lay out one caption line; no width limit is applied, so the
    /// result always contains a single layout line.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        brush: CaptionBrush,
    ) -> parley::Layout<CaptionBrush> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Borrowed(self.font_stack)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<CaptionBrush> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

impl TextMeasurer for CaptionEngine {
    fn measure_width(&mut self, text: &str) -> f32 {
        self.layout_line(text, CaptionBrush::default()).width()
    }
}
