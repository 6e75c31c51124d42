//! Cell tag styling configuration.
//!
//! Provides distinct colours for each [`CellTag`], and plain styles when
//! colour is disabled.

use crate::model::CellTag;
use ratatui::style::{Color, Modifier, Style};

/// Bold headings inside panels.
pub const SECTION_HEADER: Style = Style::new().add_modifier(Modifier::BOLD);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag or `no_color` config key
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the resolved flag and environment.
    ///
    /// Colours are disabled by the flag or by `NO_COLOR` with any value.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== TagStyles =====

/// Style for every cell tag plus the shared UI accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagStyles {
    low: Style,
    high: Style,
    mid: Style,
    examined: Style,
    found: Style,
    focus: Style,
    error: Style,
    border: Style,
    shortcut: Style,
    muted: Style,
}

impl TagStyles {
    /// Create styles for the given colour configuration.
    ///
    /// Without colour, only modifiers remain so the strip is still readable.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                low: Style::new().fg(Color::Black).bg(Color::Cyan),
                high: Style::new().fg(Color::Black).bg(Color::Magenta),
                mid: Style::new()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                examined: Style::new().fg(Color::DarkGray),
                found: Style::new()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                focus: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                error: Style::new().fg(Color::Red),
                border: Style::new().fg(Color::Cyan),
                shortcut: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                muted: Style::new().fg(Color::DarkGray),
            }
        } else {
            Self {
                low: Style::new(),
                high: Style::new(),
                mid: Style::new().add_modifier(Modifier::BOLD),
                examined: Style::new().add_modifier(Modifier::DIM),
                found: Style::new().add_modifier(Modifier::BOLD | Modifier::REVERSED),
                focus: Style::new().add_modifier(Modifier::REVERSED),
                error: Style::new().add_modifier(Modifier::BOLD),
                border: Style::new(),
                shortcut: Style::new().add_modifier(Modifier::BOLD),
                muted: Style::new().add_modifier(Modifier::DIM),
            }
        }
    }

    /// Style for a cell carrying `tag`.
    pub fn for_tag(&self, tag: CellTag) -> Style {
        match tag {
            CellTag::None => Style::new(),
            CellTag::Low => self.low,
            CellTag::High => self.high,
            CellTag::Mid => self.mid,
            CellTag::Examined => self.examined,
            CellTag::Found => self.found,
        }
    }

    /// Style for the focused form field.
    pub fn focus(&self) -> Style {
        self.focus
    }

    /// Style for validation messages.
    pub fn error(&self) -> Style {
        self.error
    }

    /// Border of popups.
    pub fn border(&self) -> Style {
        self.border
    }

    /// Dimmed text for hints and secondary information.
    pub fn muted(&self) -> Style {
        self.muted
    }

    /// Key names in the help overlay.
    pub fn shortcut(&self) -> Style {
        self.shortcut
    }
}

impl Default for TagStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
