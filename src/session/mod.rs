//! Session state and collaborator seams for the surrounding application.

/// Collaborator traits and prompt construction.
pub mod ports;
/// Per-session state with explicit reset.
pub mod state;
