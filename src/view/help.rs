//! Help overlay widget displaying keyboard shortcuts.
//!
//! Toggled by '?', dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::{TagStyles, SECTION_HEADER};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &TagStyles) {
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, frame.area());

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles.shortcut()))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.border()),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        styles.muted().add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Rect with the given percentage of `area`, centered within it.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;

    Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    }
}

fn shortcut(keys: &'static str, description: &'static str, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<16}"), key_style),
        Span::raw(description),
    ])
}

fn build_help_content(key_style: Style) -> Vec<Line<'static>> {
    vec![
        Line::styled("Input form", SECTION_HEADER),
        shortcut("Tab / ↓", "Next field", key_style),
        shortcut("Shift+Tab / ↑", "Previous field", key_style),
        shortcut("Enter", "Validate and start the search", key_style),
        shortcut("Esc", "Quit", key_style),
        Line::default(),
        Line::styled("Visualizer (default keys)", SECTION_HEADER),
        shortcut("Space / Enter", "Take one step", key_style),
        shortcut("n / →", "Take one step", key_style),
        shortcut("r", "Reset to an empty form", key_style),
        shortcut("q / Ctrl+C", "Quit", key_style),
        Line::default(),
        Line::styled("Colours", SECTION_HEADER),
        Line::raw("  lo and hi bound the region still being searched;"),
        Line::raw("  mid is the cell the next step compares;"),
        Line::raw("  examined cells have been ruled out."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn centered_rect_is_centered() {
        let rect = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(rect, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn help_lists_reset_key() {
        let text: String = build_help_content(Style::new())
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Reset to an empty form"));
    }

    #[test]
    fn help_has_no_colour_when_disabled() {
        use crate::view::styles::ColorConfig;
        use ratatui::{backend::TestBackend, Terminal};

        let styles = TagStyles::with_color_config(ColorConfig::new(false));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_help_overlay(frame, &styles))
            .unwrap();

        let buffer = terminal.backend().buffer();
        for cell in buffer.content() {
            assert_eq!(cell.fg, Color::Reset);
        }
    }
}
