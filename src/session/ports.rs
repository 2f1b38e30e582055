use crate::foundation::error::StoryResult;

const STORY_PROMPT_PREFIX: &str =
    "Create a funny and educational children's story inspired by this text:";

/// Build the story-generation prompt for a block of extracted text.
pub fn story_prompt(extracted: &str) -> String {
    format!("{STORY_PROMPT_PREFIX}\n\n{extracted}")
}

/// Optical character recognition over an uploaded image.
pub trait TextExtractor {
    /// Extract raw text from encoded image bytes.
    fn extract(&self, image: &[u8]) -> StoryResult<String>;
}

/// Remote narrative generation from a prompt.
pub trait StoryGenerator {
    /// Produce a narrative string for `prompt`.
    fn generate(&self, prompt: &str) -> StoryResult<String>;
}

/// Speech synthesis used only to pace the live slideshow.
///
/// Narration never reaches the exported artifact; the compiled video is
/// silent regardless of what this produces.
pub trait NarrationSynthesizer {
    /// Speak one slide's text, returning when narration completes.
    fn narrate(&self, text: &str) -> StoryResult<()>;
}

#[cfg(test)]
#[path = "../../tests/unit/session/ports.rs"]
mod tests;
