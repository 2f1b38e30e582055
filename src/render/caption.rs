use crate::render::text::TextMeasurer;

/// Fixed caption font stack, matching the live-viewing presentation.
pub const CAPTION_FONT_STACK: &str = "Comic Sans MS, cursive, sans-serif";

/// Caption font size in pixels.
pub const CAPTION_FONT_SIZE_PX: f32 = 28.0;

/// Maximum rendered line width before the wrap commits a line.
pub const CAPTION_MAX_LINE_WIDTH_PX: f32 = 600.0;

/// Vertical advance between committed caption lines.
pub const CAPTION_LINE_HEIGHT_PX: f32 = 36.0;

/// Baseline of the first caption line.
pub const CAPTION_BASELINE_START_Y: f32 = 350.0;

/// Greedy word wrap against the fixed caption width threshold.
///
/// Words accumulate into a line buffer; when adding the next word would push
/// the measured width past [`CAPTION_MAX_LINE_WIDTH_PX`], the buffer is
/// committed and the overflowing word starts the next line. The final
/// (possibly partial) line is always committed. An oversized first word
/// commits the empty buffer first, so any prefix wider than the threshold
/// yields at least two lines.
///
/// The caption never reflows or shrinks to fit vertically; enough lines will
/// overflow the canvas bottom, which is accepted behavior.
pub fn wrap_caption(text: &str, measurer: &mut dyn TextMeasurer) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if measurer.measure_width(&candidate) > CAPTION_MAX_LINE_WIDTH_PX {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        } else {
            line = candidate;
        }
    }
    lines.push(line);
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/render/caption.rs"]
mod tests;
