//! TUI rendering and terminal management (impure shell)

mod array;
pub mod constants;
mod form;
mod help;
mod styles;

pub use array::{cell_rows, describe_step};
pub use form::form_lines;
pub use help::render_help_overlay;
pub use styles::{ColorConfig, TagStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::KeyAction;
use crate::state::{AppState, Phase};
use constants::{HINT_BAR_HEIGHT, TITLE_BAR_HEIGHT};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: TagStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        key_bindings: KeyBindings,
        color: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, app_state, key_bindings, color))
    }

    /// Run the main event loop
    ///
    /// Blocks on terminal events; each key press is one discrete trigger.
    /// Returns when the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(..) => self.draw()?,
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build an app around an existing terminal (any backend).
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        color: ColorConfig,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            styles: TagStyles::with_color_config(color),
        }
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, whatever has focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.help_visible {
            return self.handle_help_key(key);
        }

        match self.app_state.phase {
            Phase::Input(_) => self.handle_form_key(key),
            Phase::Visualize(_) => self.handle_visualizer_key(key),
        }
    }

    /// While help is open only closing it or quitting does anything.
    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, self.key_bindings.get(key)) {
            (KeyCode::Esc, _) | (_, Some(KeyAction::Help)) => {
                self.app_state.help_visible = false;
                false
            }
            (_, Some(KeyAction::Quit)) => true,
            _ => false,
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Enter => {
                self.app_state.submit_form();
                return false;
            }
            // '?' can never be part of a number, so it stays available
            KeyCode::Char('?') => {
                self.app_state.toggle_help();
                return false;
            }
            _ => {}
        }

        let Some(form) = self.app_state.form_mut() else {
            return false;
        };
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                form.insert_char(c)
            }
            _ => {}
        }
        false
    }

    fn handle_visualizer_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        debug!(?action, "Visualizer action");
        match action {
            KeyAction::Step => {
                self.app_state.step();
            }
            KeyAction::Reset => self.app_state.reset(),
            KeyAction::Help => self.app_state.toggle_help(),
            KeyAction::Quit => return true,
        }
        false
    }

    /// Render the current state to the terminal.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| render(frame, state, styles))?;
        Ok(())
    }
}

/// Draw one complete frame.
fn render(frame: &mut Frame, state: &AppState, styles: &TagStyles) {
    let [title, body, hints] = Layout::vertical([
        Constraint::Length(TITLE_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(HINT_BAR_HEIGHT),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::styled(
            " bsviz: binary search, one step at a time",
            styles::SECTION_HEADER,
        )),
        title,
    );

    match &state.phase {
        Phase::Input(form_state) => {
            form::render_form(frame, body, form_state, state.error_message.as_deref(), styles)
        }
        Phase::Visualize(visualizer) => array::render_visualizer(frame, body, visualizer, styles),
    }

    frame.render_widget(Paragraph::new(hint_line(state, styles)), hints);

    if state.help_visible {
        render_help_overlay(frame, styles);
    }
}

/// Key hints for the current phase.
fn hint_line(state: &AppState, styles: &TagStyles) -> Line<'static> {
    let text = match &state.phase {
        Phase::Input(_) => " Tab/↑↓ move · Enter search · ? help · Esc quit",
        Phase::Visualize(visualizer) if visualizer.can_step() => {
            " Space step · r reset · ? help · q quit"
        }
        Phase::Visualize(_) => " Search finished · r reset · q quit",
    };
    Line::from(Span::styled(text, styles.muted()))
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on
/// exit. Logging must be initialized by the caller.
pub fn run_with_state(
    app_state: AppState,
    key_bindings: KeyBindings,
    color: ColorConfig,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, key_bindings, color)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
