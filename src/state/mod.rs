//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod form;
pub mod visualize;

// Re-export for convenience
pub use app_state::{AppState, Phase};
pub use form::{FormField, FormInput, FormState};
pub use visualize::VisualizeState;
