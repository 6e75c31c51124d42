//! Domain model types (pure).
//!
//! The search core and the data it hands to the presentation layer.

pub mod error;
pub mod key_action;
pub mod session;
pub mod step;
pub mod tag;

// Re-export for convenience
pub use error::{AppError, InputError, InvalidInputKind, SessionError};
pub use key_action::KeyAction;
pub use session::{SearchSession, SearchStatus, SessionSnapshot};
pub use step::{format_number, BoundMoved, ExaminedRange, StepResult};
pub use tag::{project, CellTag};
