use super::*;

/// Deterministic fake measurer: every char is 10 px wide.
struct FixedAdvance;

impl TextMeasurer for FixedAdvance {
    fn measure_width(&mut self, text: &str) -> f32 {
        text.chars().count() as f32 * 10.0
    }
}

#[test]
fn short_text_is_a_single_line() {
    let lines = wrap_caption("a tiny cat", &mut FixedAdvance);
    assert_eq!(lines, vec!["a tiny cat"]);
}

#[test]
fn exactly_at_threshold_does_not_wrap() {
    let text = "x".repeat(60); // exactly 600 px
    assert_eq!(wrap_caption(&text, &mut FixedAdvance), vec![text]);
}

#[test]
fn wrap_is_greedy_at_the_threshold() {
    // 10 words of "words" measure 59 chars; the 11th pushes past 600 px.
    let text = vec!["words"; 12].join(" ");
    let lines = wrap_caption(&text, &mut FixedAdvance);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], vec!["words"; 10].join(" "));
    assert_eq!(lines[1], "words words");
}

#[test]
fn oversized_first_word_commits_an_empty_line_first() {
    let giant = "x".repeat(80);
    let lines = wrap_caption(&giant, &mut FixedAdvance);
    assert_eq!(lines, vec![String::new(), giant]);
}

#[test]
fn empty_text_commits_one_empty_line() {
    assert_eq!(wrap_caption("", &mut FixedAdvance), vec![String::new()]);
}

#[test]
fn inner_whitespace_runs_collapse_to_single_separators() {
    let lines = wrap_caption("a   b\t c", &mut FixedAdvance);
    assert_eq!(lines, vec!["a b c"]);
}
