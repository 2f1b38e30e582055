//! Deterministic CPU slide rendering.
//!
//! Each slide renders to one fixed 640x480 frame: background, the fixed
//! character illustration, and a word-wrapped caption.

/// Word-wrap algorithm and caption layout constants.
pub mod caption;
/// Slide renderer and story-level rendering entry points.
pub mod frame;
/// Fixed background and character illustration geometry.
pub mod scene;
/// Text measurement seam and Parley caption engine.
pub mod text;
