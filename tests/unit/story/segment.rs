use super::*;

use crate::story::model::Story;

fn texts(slides: &[Slide]) -> Vec<&str> {
    slides.iter().map(|s| s.text.as_str()).collect()
}

#[test]
fn single_sentence_without_terminal_is_one_slide() {
    assert_eq!(texts(&segment("Hello world")), vec!["Hello world"]);
}

#[test]
fn splits_after_terminal_runs() {
    assert_eq!(
        texts(&segment("A cat sat. It purred! Why?")),
        vec!["A cat sat.", "It purred!", "Why?"]
    );
}

#[test]
fn consecutive_terminals_are_one_boundary() {
    assert_eq!(texts(&segment("Really?! Yes.")), vec!["Really?!", "Yes."]);
}

#[test]
fn trailing_terminal_without_whitespace_still_ends_a_slide() {
    assert_eq!(texts(&segment("The end.")), vec!["The end."]);
}

#[test]
fn abbreviations_are_not_special_cased() {
    // "Dr. Smith" splitting after "Dr." is accepted current behavior.
    assert_eq!(
        texts(&segment("Dr. Smith waved.")),
        vec!["Dr.", "Smith waved."]
    );
}

#[test]
fn ordinals_are_contiguous_from_zero() {
    let slides = segment("One. Two. Three.");
    let ordinals: Vec<u32> = slides.iter().map(|s| s.ordinal).collect();
    assert_eq!(ordinals, vec![0, 1, 2]);
    Story::new(slides).unwrap();
}

#[test]
fn segmentation_is_deterministic() {
    let s = "A cat sat. It purred! Why?  Extra   spaces. ";
    assert_eq!(segment(s), segment(s));
}

#[test]
fn joined_output_preserves_non_whitespace_content_in_order() {
    let s = " Leading space. Multiple   gaps!  Done. ";
    let joined = segment(s)
        .iter()
        .map(|slide| slide.text.clone())
        .collect::<Vec<_>>()
        .join(" ");
    let flat = |t: &str| t.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    assert_eq!(flat(&joined), flat(s));
}

#[test]
fn whitespace_only_input_yields_no_slides() {
    assert!(segment("").is_empty());
    assert!(segment("   ").is_empty());
}

#[test]
fn terminal_followed_by_end_whitespace_leaves_no_empty_slide() {
    assert_eq!(texts(&segment("Done.   ")), vec!["Done."]);
}
