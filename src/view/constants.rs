//! Layout dimension constants for TUI rendering.

/// Height of the title bar in lines.
pub const TITLE_BAR_HEIGHT: u16 = 1;

/// Height of the key hint bar at the bottom of the screen.
pub const HINT_BAR_HEIGHT: u16 = 1;

/// Lines per row of array cells: value, index, tag caption.
pub const CELL_ROW_HEIGHT: u16 = 3;

/// Blank columns between neighbouring cells.
pub const CELL_GAP: u16 = 1;

/// Narrowest cell, wide enough for the longest tag caption.
pub const MIN_CELL_WIDTH: u16 = 5;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;
