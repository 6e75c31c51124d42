//! Input form rendering.

use super::styles::{TagStyles, SECTION_HEADER};
use crate::state::{FormField, FormState};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Text of a field with a cursor marker when focused.
fn field_span(text: &str, focused: bool, styles: &TagStyles) -> Span<'static> {
    if focused {
        Span::styled(format!("[{text}_]"), styles.focus())
    } else {
        Span::styled(format!("[{text}]"), Style::new())
    }
}

/// Build the form lines and the index of the line holding the focused field.
pub fn form_lines(
    form: &FormState,
    error_message: Option<&str>,
    styles: &TagStyles,
) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut focus_line = 0;

    lines.push(Line::from(vec![
        Span::styled(
            format!("Number of elements (1-{}): ", form.max_elements()),
            SECTION_HEADER,
        ),
        field_span(form.count_text(), form.focus() == FormField::Count, styles),
    ]));
    if let Some(err) = form.count_error() {
        lines.push(Line::styled(err.to_string(), styles.error()));
    }

    if !form.element_texts().is_empty() {
        lines.push(Line::default());
        lines.push(Line::styled("Elements:", SECTION_HEADER));
        for (i, text) in form.element_texts().iter().enumerate() {
            let focused = form.focus() == FormField::Element(i);
            if focused {
                focus_line = lines.len();
            }
            lines.push(Line::from(vec![
                Span::styled(format!("  {i:>2}: "), styles.muted()),
                field_span(text, focused, styles),
            ]));
        }
    }

    lines.push(Line::default());
    if form.focus() == FormField::Target {
        focus_line = lines.len();
    }
    lines.push(Line::from(vec![
        Span::styled("Search for: ", SECTION_HEADER),
        field_span(form.target_text(), form.focus() == FormField::Target, styles),
    ]));

    if let Some(err) = form.values_error() {
        lines.push(Line::styled(err.to_string(), styles.error()));
    }
    if let Some(message) = error_message {
        lines.push(Line::styled(message.to_string(), styles.error()));
    }

    (lines, focus_line)
}

/// Render the input form, scrolling so the focused field stays visible.
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    form: &FormState,
    error_message: Option<&str>,
    styles: &TagStyles,
) {
    let block = Block::default()
        .title(" Enter an array to search ")
        .borders(Borders::ALL);
    let visible = block.inner(area).height;

    let (lines, focus_line) = form_lines(form, error_message, styles);
    let scroll = (focus_line as u16).saturating_sub(visible.saturating_sub(1));

    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::styles::ColorConfig;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn styles() -> TagStyles {
        TagStyles::with_color_config(ColorConfig::new(false))
    }

    #[test]
    fn empty_form_shows_count_and_target() {
        let form = FormState::new(20);

        let (lines, focus_line) = form_lines(&form, None, &styles());

        assert_eq!(
            plain(&lines),
            vec![
                "Number of elements (1-20): [_]".to_string(),
                String::new(),
                "Search for: []".to_string(),
            ]
        );
        assert_eq!(focus_line, 0);
    }

    #[test]
    fn element_fields_and_errors_are_listed() {
        let mut form = FormState::new(20);
        form.insert_char('2');
        form.focus_next();
        form.insert_char('x');
        let _ = form.submit();

        let (lines, focus_line) = form_lines(&form, None, &styles());
        let text = plain(&lines);

        assert_eq!(text[3], "   0: [x_]");
        assert_eq!(text[4], "   1: []");
        assert_eq!(text.last().unwrap(), "Please enter numbers");
        assert_eq!(focus_line, 3);
    }

    #[test]
    fn invalid_count_message_follows_count_line() {
        let mut form = FormState::new(5);
        form.insert_char('9');

        let (lines, _) = form_lines(&form, Some("boom"), &styles());
        let text = plain(&lines);

        assert_eq!(text[1], "Please enter an integer between 1 and 5");
        assert_eq!(text.last().unwrap(), "boom");
    }
}
