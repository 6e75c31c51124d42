//! Visualizer state: one search session plus the record of its last step.

use crate::model::{project, CellTag, SearchSession, StepResult};
use tracing::{debug, info};

/// A running (or finished) search being shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizeState {
    session: SearchSession,
    last: Option<StepResult>,
}

impl VisualizeState {
    pub fn new(session: SearchSession) -> Self {
        Self {
            session,
            last: None,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    /// Record of the most recent step, `None` before the first one.
    pub fn last(&self) -> Option<&StepResult> {
        self.last.as_ref()
    }

    /// Whether the step control is enabled.
    pub fn can_step(&self) -> bool {
        !self.session.is_terminal()
    }

    /// Advance the search once.
    ///
    /// Returns `None` without touching the session once it is terminal,
    /// mirroring a disabled step button.
    pub fn step(&mut self) -> Option<StepResult> {
        if !self.can_step() {
            debug!("Step ignored: search already finished");
            return None;
        }

        let result = self.session.step();
        if let Some(summary) = result.summary(self.session.target()) {
            info!(iterations = result.iterations, "{summary}");
        }
        self.last = Some(result);
        Some(result)
    }

    /// Current tag of every cell.
    pub fn tags(&self) -> Vec<CellTag> {
        project(&self.session.snapshot())
    }

    /// Result sentence once the search has finished.
    pub fn summary(&self) -> Option<String> {
        self.last
            .as_ref()
            .and_then(|result| result.summary(self.session.target()))
    }
}
