//! Error types for bsviz.
//!
//! Errors are structured with `thiserror` and compose via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from application logic
//!   - [`SessionError`] - The core rejected its input (non-finite numbers)
//!   - [`InputError`] - Raw form text failed validation
//!   - `std::io::Error` - Terminal or stdout failures
//!
//! # Recovery Strategy
//!
//! `InputError` is **non-fatal**: the form shows the message next to the
//! offending field and waits for the user to correct it. `SessionError` is a
//! caller programming error, since validated input never contains NaN or
//! infinities; it is reported and the session simply does not exist.
//! Terminal errors are fatal.

use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The search core rejected its input.
    #[error("Invalid search input: {0}")]
    Session(#[from] SessionError),

    /// User-supplied text could not be validated.
    #[error("{0}")]
    Input(#[from] InputError),

    /// Terminal or output stream failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised when constructing a [`SearchSession`](super::SearchSession).
///
/// Construction either fully succeeds or no session exists; there is no
/// partially-initialised state to clean up.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SessionError {
    /// The array or target contains a value without a total ordering
    /// (NaN) or outside the finite reals.
    #[error("{0}")]
    InvalidInput(InvalidInputKind),
}

/// Which part of the input was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidInputKind {
    /// The search target is not finite.
    #[error("target {value} is not a finite number")]
    Target {
        /// Rejected value.
        value: f64,
    },

    /// An array element is not finite.
    #[error("element {index} ({value}) is not a finite number")]
    Element {
        /// Position in the unsorted input.
        index: usize,
        /// Rejected value.
        value: f64,
    },
}

/// Validation failures for raw text typed into the input form.
///
/// Display strings are shown verbatim beneath the offending field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Element count is not an integer in `1..=max`.
    ///
    /// ```
    /// use bsviz::model::InputError;
    ///
    /// let err = InputError::InvalidCount { max: 20 };
    /// assert_eq!(err.to_string(), "Please enter an integer between 1 and 20");
    /// ```
    #[error("Please enter an integer between 1 and {max}")]
    InvalidCount {
        /// Upper limit currently in force.
        max: usize,
    },

    /// A value field does not hold a finite decimal number.
    #[error("Please enter numbers")]
    NotANumber {
        /// Which element field failed, `None` for the target.
        field: Option<usize>,
    },
}
