//! Per-step output record.
//!
//! A [`StepResult`] carries enough for a presentation layer to render
//! incremental highlighting without re-deriving the algorithm.

use super::session::SearchStatus;
use serde::Serialize;

/// Which bound the comparison moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundMoved {
    /// `array[mid] < target`: `lo` jumped past `mid`.
    Low,
    /// `array[mid] > target`: `hi` dropped below `mid`.
    High,
}

/// Inclusive index span excluded from the search by a single comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ExaminedRange {
    pub start: usize,
    pub end: usize,
}

impl ExaminedRange {
    /// Create a range covering `start..=end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "examined range must not be reversed");
        Self { start, end }
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }
}

/// Outcome of one call to [`SearchSession::step`](super::SearchSession::step).
///
/// `lo`, `hi` and `mid` are the bounds *after* the step, so a view can
/// pre-highlight the region the next step will inspect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepResult {
    pub status: SearchStatus,
    /// Completed steps so far, including this one.
    pub iterations: u32,
    /// False only for no-op steps on a terminal session.
    pub changed: bool,
    pub lo: usize,
    /// Inclusive upper bound, `None` once below index 0.
    pub hi: Option<usize>,
    /// Provisional mid for the next step; `None` when terminal.
    pub mid: Option<usize>,
    /// Indices this step excluded. `None` on `Found` and no-op steps.
    pub examined: Option<ExaminedRange>,
    pub moved: Option<BoundMoved>,
    /// Matching index when `status == Found`.
    pub found_index: Option<usize>,
}

impl StepResult {
    /// Sentence announcing the outcome of a finished search.
    ///
    /// Returns `None` while the search is still active.
    pub fn summary(&self, target: f64) -> Option<String> {
        let target = format_number(target);
        match self.status {
            SearchStatus::Active => None,
            SearchStatus::Found => Some(format!(
                "{target} was found after {} iterations!",
                self.iterations
            )),
            SearchStatus::NotFound => Some(format!(
                "{target} was NOT found! Total iterations: {}.",
                self.iterations
            )),
        }
    }
}

/// Magnitudes at or above this switch to exponent notation.
const EXPONENT_ABOVE: f64 = 1e16;

/// Nonzero magnitudes below this switch to exponent notation.
const EXPONENT_BELOW: f64 = 1e-6;

/// Render a number the way a person typed it: `3` rather than `3.0`.
///
/// Very large and very small magnitudes use exponent notation (`1e300`)
/// so a single value cannot widen every cell of the strip.
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 {
        // Collapses -0 as well.
        "0".to_string()
    } else if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        format!("{value:e}")
    } else {
        value.to_string()
    }
}
