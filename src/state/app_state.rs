//! Application state and transitions.
//!
//! AppState is the root of all UI state. Transitions are plain methods with
//! no I/O, so the whole presenter flow is testable without a terminal.
//!
//! # State Machine
//!
//! ```text
//! Input ──submit (valid)──▶ Visualize ──reset──▶ Input
//!   ▲  └─submit (invalid)─┘     │
//!   └───────────────────────────┘
//! ```

use super::form::FormState;
use super::visualize::VisualizeState;
use crate::model::{AppError, SearchSession, StepResult};
use tracing::{info, warn};

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Collecting the array and target.
    Input(FormState),
    /// Stepping through a search.
    Visualize(VisualizeState),
}

/// Application state. Pure data, no side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub phase: Phase,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Failure that is not tied to a single form field.
    pub error_message: Option<String>,

    max_elements: usize,
}

impl AppState {
    /// Start on an empty input form.
    pub fn new(max_elements: usize) -> Self {
        Self {
            phase: Phase::Input(FormState::new(max_elements)),
            help_visible: false,
            error_message: None,
            max_elements,
        }
    }

    /// Start directly on the visualizer, skipping the form.
    pub fn with_session(session: SearchSession, max_elements: usize) -> Self {
        Self {
            phase: Phase::Visualize(VisualizeState::new(session)),
            ..Self::new(max_elements)
        }
    }

    pub fn max_elements(&self) -> usize {
        self.max_elements
    }

    pub fn form(&self) -> Option<&FormState> {
        match &self.phase {
            Phase::Input(form) => Some(form),
            Phase::Visualize(_) => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        match &mut self.phase {
            Phase::Input(form) => Some(form),
            Phase::Visualize(_) => None,
        }
    }

    pub fn visualizer(&self) -> Option<&VisualizeState> {
        match &self.phase {
            Phase::Visualize(state) => Some(state),
            Phase::Input(_) => None,
        }
    }

    /// Validate the form and, if it passes, start a search session.
    ///
    /// Returns `true` when the phase changed to `Visualize`. Validation
    /// failures stay on the form; a session construction failure is
    /// surfaced through `error_message`.
    pub fn submit_form(&mut self) -> bool {
        let Phase::Input(form) = &mut self.phase else {
            return false;
        };

        let input = match form.submit() {
            Ok(input) => input,
            Err(err) => {
                info!(error = %err, "Form submission rejected");
                return false;
            }
        };

        match SearchSession::new(input.values, input.target) {
            Ok(session) => {
                info!(
                    len = session.values().len(),
                    target = session.target(),
                    "Search session started"
                );
                self.error_message = None;
                self.phase = Phase::Visualize(VisualizeState::new(session));
                true
            }
            Err(err) => {
                let err = AppError::from(err);
                warn!(error = %err, "Search session rejected validated input");
                self.error_message = Some(err.to_string());
                false
            }
        }
    }

    /// Advance the search by one step. No-op outside the visualizer.
    pub fn step(&mut self) -> Option<StepResult> {
        match &mut self.phase {
            Phase::Visualize(state) => state.step(),
            Phase::Input(_) => None,
        }
    }

    /// Discard the session (or a half-filled form) and start over.
    pub fn reset(&mut self) {
        info!("Reset to input form");
        self.phase = Phase::Input(FormState::new(self.max_elements));
        self.error_message = None;
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchStatus;

    fn fill_form(state: &mut AppState, count: &str, values: &[&str], target: &str) {
        let form = state.form_mut().expect("form phase");
        count.chars().for_each(|c| form.insert_char(c));
        for value in values {
            form.focus_next();
            value.chars().for_each(|c| form.insert_char(c));
        }
        form.focus_next();
        target.chars().for_each(|c| form.insert_char(c));
    }

    #[test]
    fn new_state_starts_on_form() {
        let state = AppState::new(20);
        assert!(state.form().is_some());
        assert!(state.visualizer().is_none());
        assert!(!state.help_visible);
    }

    #[test]
    fn valid_submit_switches_to_visualizer_with_sorted_values() {
        let mut state = AppState::new(20);
        fill_form(&mut state, "5", &["5", "3", "1", "4", "2"], "4");

        assert!(state.submit_form());

        let visualizer = state.visualizer().expect("visualize phase");
        assert_eq!(visualizer.session().values(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(visualizer.session().target(), 4.0);
    }

    #[test]
    fn invalid_submit_stays_on_form() {
        let mut state = AppState::new(20);
        fill_form(&mut state, "2", &["1", "abc"], "1");

        assert!(!state.submit_form());
        assert!(state.form().unwrap().values_error().is_some());
    }

    #[test]
    fn step_on_form_does_nothing() {
        let mut state = AppState::new(20);
        assert_eq!(state.step(), None);
        assert!(state.form().is_some());
    }

    #[test]
    fn stepping_to_completion_finds_target() {
        let session = SearchSession::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], 8.0).unwrap();
        let mut state = AppState::with_session(session, 20);

        let mut last = None;
        while let Some(result) = state.step() {
            last = Some(result);
        }

        let last = last.unwrap();
        assert_eq!(last.status, SearchStatus::Found);
        assert_eq!(last.found_index, Some(7));
        assert_eq!(last.iterations, 4);
    }

    #[test]
    fn reset_returns_to_empty_form() {
        let session = SearchSession::new(vec![1.0], 1.0).unwrap();
        let mut state = AppState::with_session(session, 12);
        state.step();

        state.reset();

        let form = state.form().expect("form phase");
        assert_eq!(form.count_text(), "");
        assert_eq!(form.max_elements(), 12);
    }

    #[test]
    fn toggle_help_flips_visibility() {
        let mut state = AppState::new(20);
        state.toggle_help();
        assert!(state.help_visible);
        state.toggle_help();
        assert!(!state.help_visible);
    }
}
