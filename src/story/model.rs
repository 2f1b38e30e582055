use crate::foundation::error::{StoryError, StoryResult};

/// One ordinal unit of narrative text destined for exactly one rendered frame
/// and one second of video.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Slide {
    /// Position of the slide in the final video, starting at 0.
    pub ordinal: u32,
    /// Trimmed, non-empty slide text.
    pub text: String,
}

/// The ordered slide sequence for one generation session.
///
/// A story is a pure data model produced by [`crate::segment`]. Invariant:
/// slides are contiguous, gapless, and ordinal-sorted starting at 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Story {
    /// Ordinal-sorted slides.
    pub slides: Vec<Slide>,
}

impl Story {
    /// Wrap a slide sequence after checking the ordinal invariant.
    pub fn new(slides: Vec<Slide>) -> StoryResult<Self> {
        let story = Self { slides };
        story.validate()?;
        Ok(story)
    }

    /// Check that ordinals are contiguous from 0 and every text is non-blank.
    pub fn validate(&self) -> StoryResult<()> {
        for (i, slide) in self.slides.iter().enumerate() {
            if slide.ordinal as usize != i {
                return Err(StoryError::validation(format!(
                    "slide ordinals must be contiguous from 0: found {} at position {i}",
                    slide.ordinal
                )));
            }
            if slide.text.trim().is_empty() {
                return Err(StoryError::validation(format!(
                    "slide {} text must be non-empty",
                    slide.ordinal
                )));
            }
        }
        Ok(())
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Return `true` when the story has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/story/model.rs"]
mod tests;
