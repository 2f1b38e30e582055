/// Convenience result type used across Storyreel.
pub type StoryResult<T> = Result<T, StoryError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum StoryError {
    /// Invalid caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Compilation was requested with zero slides.
    #[error("compile requested with no slides")]
    InputEmpty,

    /// The encoder sandbox failed to initialize.
    #[error("encoder unavailable: {0}")]
    EncoderUnavailable(String),

    /// The encoder invocation returned a non-success status.
    #[error("encoding failed: {0}")]
    Encoding(String),

    /// A compile was requested while another compile is in flight.
    #[error("a video compile is already in progress")]
    CompileBusy,

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoryError {
    /// Build a [`StoryError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StoryError::EncoderUnavailable`] value.
    pub fn encoder_unavailable(msg: impl Into<String>) -> Self {
        Self::EncoderUnavailable(msg.into())
    }

    /// Build a [`StoryError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
