//! End-to-end export orchestration.

/// Narrative-to-MP4 export pipeline.
pub mod export;
