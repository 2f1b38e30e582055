use crate::story::model::Slide;

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split a narrative string into ordered slides at sentence boundaries.
///
/// A boundary is a run of one or more terminal punctuation characters (`.`,
/// `!`, `?`) followed by whitespace. The split lands after the punctuation
/// run, so punctuation stays attached to the preceding slide and the
/// whitespace run belongs to neither side. Pieces that trim to empty are
/// discarded; the survivors are assigned contiguous ordinals from 0.
///
/// A string with no boundary yields a single slide, and terminal punctuation
/// at the end of the string needs no trailing whitespace. Periods inside
/// abbreviations or decimal numbers are not treated specially: "Dr. Smith"
/// splits after "Dr." by design.
pub fn segment(story: &str) -> Vec<Slide> {
    let mut pieces: Vec<&str> = Vec::new();
    let mut start = 0usize;
    let mut chars = story.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }

        // Consume the rest of the punctuation run so "?!" is one boundary.
        let mut end = i + c.len_utf8();
        while let Some(&(j, d)) = chars.peek() {
            if !is_terminal(d) {
                break;
            }
            end = j + d.len_utf8();
            chars.next();
        }

        // Only a whitespace-followed run is a boundary mid-string.
        let Some(&(_, d)) = chars.peek() else { break };
        if !d.is_whitespace() {
            continue;
        }

        pieces.push(&story[start..end]);
        while let Some(&(_, d)) = chars.peek() {
            if !d.is_whitespace() {
                break;
            }
            chars.next();
        }
        start = chars.peek().map(|&(j, _)| j).unwrap_or(story.len());
    }

    if start < story.len() {
        pieces.push(&story[start..]);
    }

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .enumerate()
        .map(|(i, text)| Slide {
            ordinal: i as u32,
            text: text.to_string(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/story/segment.rs"]
mod tests;
