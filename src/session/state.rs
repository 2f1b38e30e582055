use crate::encode::compiler::VideoArtifact;
use crate::story::model::Story;
use crate::story::segment::segment;

/// All products of one generation session.
///
/// A new upload resets everything at once: extracted text, narrative, slides,
/// slide focus, and any previously compiled artifact. Nothing here survives
/// the session.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Raw text extracted from the uploaded image.
    pub extracted_text: Option<String>,
    /// Generated narrative, as returned by the story collaborator.
    pub story_text: Option<String>,
    /// Segmented slides for the current narrative.
    pub story: Story,
    /// Ordinal of the slide currently in focus during live viewing.
    pub focused_slide: usize,
    /// Most recent compiled artifact; superseded by each new compile.
    pub video: Option<VideoArtifact>,
}

impl SessionState {
    /// Clear every field back to the fresh-session state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Install a new narrative, replacing slides, focus, and artifact.
    pub fn set_story(&mut self, text: String) {
        self.story = Story {
            slides: segment(&text),
        };
        self.story_text = Some(text);
        self.focused_slide = 0;
        self.video = None;
    }

    /// Move focus to the next slide, holding at the last.
    pub fn next_slide(&mut self) {
        if self.focused_slide + 1 < self.story.len() {
            self.focused_slide += 1;
        }
    }

    /// Move focus to the previous slide, holding at the first.
    pub fn prev_slide(&mut self) {
        self.focused_slide = self.focused_slide.saturating_sub(1);
    }

    /// Advance focus when a narration completion event arrives.
    pub fn advance_after_narration(&mut self) {
        self.next_slide();
    }

    /// Store a freshly compiled artifact, superseding any prior one.
    pub fn set_video(&mut self, artifact: VideoArtifact) {
        self.video = Some(artifact);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/state.rs"]
mod tests;
