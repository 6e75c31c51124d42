//! Stepwise binary search session (pure core).
//!
//! A [`SearchSession`] owns a sorted copy of the input, the target, and the
//! current search region. Each call to [`SearchSession::step`] performs exactly
//! one comparison and returns a [`StepResult`] describing what changed.
//!
//! # State machine
//!
//! ```text
//! Active ──step──▶ Active | Found | NotFound
//! Found    ──step──▶ Found     (no-op)
//! NotFound ──step──▶ NotFound  (no-op)
//! ```
//!
//! Calling `step()` on a terminal session is a no-op: the returned record has
//! `changed == false` and repeats the terminal status and iteration count.

use super::error::{InvalidInputKind, SessionError};
use super::step::{BoundMoved, ExaminedRange, StepResult};
use serde::Serialize;
use tracing::debug;

// ===== SearchStatus =====

/// Lifecycle status of a search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// Search region is still open; `step()` will compare again.
    Active,
    /// Target located. Terminal.
    Found,
    /// Search region exhausted without a match. Terminal.
    NotFound,
}

impl SearchStatus {
    /// True for `Found` and `NotFound`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, SearchStatus::Active)
    }
}

// ===== Bounds =====

/// Active search region stored as the half-open range `lo..end`.
///
/// The inclusive `hi` bound is `end - 1`; an `end` of zero is the `-1`
/// sentinel and surfaces as `hi() == None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    lo: usize,
    end: usize,
}

impl Bounds {
    fn hi(self) -> Option<usize> {
        self.end.checked_sub(1)
    }

    fn is_exhausted(self) -> bool {
        self.lo >= self.end
    }

    /// `floor((lo + hi) / 2)` without overflow. `None` once `lo > hi`.
    fn mid(self) -> Option<usize> {
        if self.is_exhausted() {
            None
        } else {
            Some(self.lo + (self.end - 1 - self.lo) / 2)
        }
    }
}

// ===== SessionSnapshot =====

/// Read-only view of a session's observable fields.
///
/// This is everything the tag projection needs; see [`crate::model::tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Number of elements in the sorted array.
    pub len: usize,
    /// Inclusive lower bound.
    pub lo: usize,
    /// Inclusive upper bound, `None` for the `-1` sentinel.
    pub hi: Option<usize>,
    /// Index that the next step will compare, if any.
    pub mid: Option<usize>,
    pub status: SearchStatus,
    pub found_index: Option<usize>,
}

impl SessionSnapshot {
    /// Whether `index` still lies inside the inclusive region `[lo, hi]`.
    pub fn in_region(&self, index: usize) -> bool {
        match self.hi {
            Some(hi) => index >= self.lo && index <= hi,
            None => false,
        }
    }
}

// ===== SearchSession =====

/// One binary search over a fixed array and target.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    values: Vec<f64>,
    target: f64,
    bounds: Bounds,
    iterations: u32,
    status: SearchStatus,
    found_index: Option<usize>,
}

impl SearchSession {
    /// Create a session over a sorted copy of `values`.
    ///
    /// Any number of elements is accepted, including none and duplicates of
    /// the target. Size limits belong to whoever collects the input.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidInput`] if the target or any value is
    /// NaN or infinite. No session exists on failure.
    pub fn new(values: impl Into<Vec<f64>>, target: f64) -> Result<Self, SessionError> {
        let mut values = values.into();

        if !target.is_finite() {
            return Err(SessionError::InvalidInput(InvalidInputKind::Target { value: target }));
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(SessionError::InvalidInput(InvalidInputKind::Element {
                index,
                value,
            }));
        }

        values.sort_by(f64::total_cmp);

        debug!(len = values.len(), target, "Created search session");

        Ok(Self {
            bounds: Bounds {
                lo: 0,
                end: values.len(),
            },
            values,
            target,
            iterations: 0,
            status: SearchStatus::Active,
            found_index: None,
        })
    }

    /// Advance the search by one comparison.
    ///
    /// Never indexes outside the array: an exhausted region is reported as
    /// `NotFound` before any comparison happens, and a comparison that
    /// empties the region reports `NotFound` in the same step.
    pub fn step(&mut self) -> StepResult {
        if self.status.is_terminal() {
            debug!(status = ?self.status, "Step on terminal session ignored");
            return self.record(false, None, None);
        }

        self.iterations += 1;

        let Some(mid) = self.bounds.mid() else {
            self.status = SearchStatus::NotFound;
            debug!(iterations = self.iterations, "Search region exhausted");
            return self.record(true, None, None);
        };

        let probe = self.values[mid];
        let (examined, moved) = if probe < self.target {
            let examined = ExaminedRange::new(self.bounds.lo, mid);
            self.bounds.lo = mid + 1;
            (examined, BoundMoved::Low)
        } else if probe > self.target {
            let examined = ExaminedRange::new(mid, self.bounds.end - 1);
            self.bounds.end = mid;
            (examined, BoundMoved::High)
        } else {
            self.status = SearchStatus::Found;
            self.found_index = Some(mid);
            debug!(index = mid, iterations = self.iterations, "Target found");
            return self.record(true, None, None);
        };

        if self.bounds.is_exhausted() {
            self.status = SearchStatus::NotFound;
        }

        debug!(
            iterations = self.iterations,
            mid,
            moved = ?moved,
            lo = self.bounds.lo,
            hi = ?self.bounds.hi(),
            status = ?self.status,
            "Step applied"
        );

        self.record(true, Some(examined), Some(moved))
    }

    fn record(
        &self,
        changed: bool,
        examined: Option<ExaminedRange>,
        moved: Option<BoundMoved>,
    ) -> StepResult {
        StepResult {
            status: self.status,
            iterations: self.iterations,
            changed,
            lo: self.bounds.lo,
            hi: self.bounds.hi(),
            mid: self.mid(),
            examined,
            moved,
            found_index: self.found_index,
        }
    }

    /// Sorted array the session searches.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn lo(&self) -> usize {
        self.bounds.lo
    }

    /// Inclusive upper bound; `None` once it has dropped below index 0.
    pub fn hi(&self) -> Option<usize> {
        self.bounds.hi()
    }

    /// Index the next step will compare. `None` when terminal or exhausted.
    pub fn mid(&self) -> Option<usize> {
        match self.status {
            SearchStatus::Active => self.bounds.mid(),
            SearchStatus::Found | SearchStatus::NotFound => None,
        }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn found_index(&self) -> Option<usize> {
        self.found_index
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            len: self.values.len(),
            lo: self.bounds.lo,
            hi: self.bounds.hi(),
            mid: self.mid(),
            status: self.status,
            found_index: self.found_index,
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
