//! Array strip and step narration for the visualizer screen.

use super::constants::{CELL_GAP, CELL_ROW_HEIGHT, MIN_CELL_WIDTH};
use super::styles::{TagStyles, SECTION_HEADER};
use crate::model::{format_number, BoundMoved, CellTag, SearchStatus, StepResult};
use crate::state::VisualizeState;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Caption printed under a cell. Kept short so cells stay narrow.
fn caption(tag: CellTag) -> &'static str {
    match tag {
        CellTag::None => "",
        CellTag::Low => "lo",
        CellTag::High => "hi",
        CellTag::Mid => "mid",
        CellTag::Examined => "--",
        CellTag::Found => "found",
    }
}

/// Width shared by every cell so columns line up across rows.
fn cell_width(values: &[String]) -> u16 {
    let widest_value = values.iter().map(|v| v.chars().count()).max().unwrap_or(0);
    let widest_index = values.len().saturating_sub(1).to_string().len();
    let widest = u16::try_from(widest_value.max(widest_index)).unwrap_or(u16::MAX);
    widest.max(MIN_CELL_WIDTH)
}

/// How many cells of width `cell` fit side by side in `width` columns.
fn cells_per_row(cell: u16, width: u16) -> usize {
    let per_row = width.saturating_add(CELL_GAP) / cell.saturating_add(CELL_GAP);
    usize::from(per_row.max(1))
}

/// Lay out the cells as rows of three lines (value, index, caption),
/// wrapping to as many rows as `width` requires. Rows are separated by a
/// blank line.
pub fn cell_rows(
    values: &[f64],
    tags: &[CellTag],
    width: u16,
    styles: &TagStyles,
) -> Vec<Line<'static>> {
    let texts: Vec<String> = values.iter().copied().map(format_number).collect();
    let cell = cell_width(&texts);
    let per_row = cells_per_row(cell, width);
    let cell = usize::from(cell);
    let gap = " ".repeat(usize::from(CELL_GAP));

    let mut lines = Vec::new();
    for (row, chunk) in texts.chunks(per_row).enumerate() {
        if row > 0 {
            lines.push(Line::default());
        }

        let offset = row * per_row;
        let mut value_spans = Vec::new();
        let mut index_spans = Vec::new();
        let mut caption_spans = Vec::new();

        for (i, text) in chunk.iter().enumerate() {
            let index = offset + i;
            let tag = tags.get(index).copied().unwrap_or(CellTag::None);
            let style = styles.for_tag(tag);

            if i > 0 {
                value_spans.push(Span::raw(gap.clone()));
                index_spans.push(Span::raw(gap.clone()));
                caption_spans.push(Span::raw(gap.clone()));
            }
            value_spans.push(Span::styled(format!("{text:^cell$}"), style));
            index_spans.push(Span::styled(format!("{index:^cell$}"), styles.muted()));
            caption_spans.push(Span::styled(format!("{:^cell$}", caption(tag)), style));
        }

        lines.push(Line::from(value_spans));
        lines.push(Line::from(index_spans));
        lines.push(Line::from(caption_spans));
    }
    lines
}

/// Number of terminal lines [`cell_rows`] produces, saturating at
/// `u16::MAX`.
pub fn cell_rows_height(values: &[f64], width: u16) -> u16 {
    if values.is_empty() {
        return 0;
    }
    let texts: Vec<String> = values.iter().copied().map(format_number).collect();
    let per_row = cells_per_row(cell_width(&texts), width);
    let rows = values.len().div_ceil(per_row);
    let lines = rows * usize::from(CELL_ROW_HEIGHT) + (rows - 1);
    u16::try_from(lines).unwrap_or(u16::MAX)
}

/// Narrate what a step did in terms of the comparison it made.
pub fn describe_step(result: &StepResult, values: &[f64], target: f64) -> String {
    let n = result.iterations;
    let t = format_number(target);

    if !result.changed {
        return "Search finished; stepping is disabled.".to_string();
    }

    if let Some(index) = result.found_index {
        let v = format_number(values[index]);
        return format!("Step {n}: array[{index}] = {v} equals {t}.");
    }

    let (Some(examined), Some(moved)) = (result.examined, result.moved) else {
        return format!("Step {n}: the search space is empty.");
    };

    let mut text = match moved {
        BoundMoved::Low => {
            let mid = examined.end;
            format!(
                "Step {n}: array[{mid}] = {} < {t}, so lo moves to {}.",
                format_number(values[mid]),
                result.lo
            )
        }
        BoundMoved::High => {
            let mid = examined.start;
            let hi = result.hi.map_or_else(|| "-1".to_string(), |hi| hi.to_string());
            format!(
                "Step {n}: array[{mid}] = {} > {t}, so hi moves to {hi}.",
                format_number(values[mid])
            )
        }
    };

    if result.status == SearchStatus::NotFound {
        text.push_str(" lo > hi: nothing left to search.");
    }
    text
}

/// Render the visualizer screen into `area`.
pub fn render_visualizer(frame: &mut Frame, area: Rect, state: &VisualizeState, styles: &TagStyles) {
    let session = state.session();
    let block = Block::default()
        .title(" Binary Search ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let strip_height = cell_rows_height(session.values(), inner.width);
    let [header, strip, narration, legend] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(strip_height.max(1)),
        Constraint::Min(2),
        Constraint::Length(1),
    ])
    .areas(inner);

    // Header: what we are looking for and the live bounds.
    let hi = session
        .hi()
        .map_or_else(|| "-1".to_string(), |hi| hi.to_string());
    let mid = session
        .mid()
        .map_or_else(|| "-".to_string(), |mid| mid.to_string());
    let header_lines = vec![
        Line::from(vec![
            Span::styled("Target: ", SECTION_HEADER),
            Span::raw(format_number(session.target())),
            Span::styled(format!("   ({} sorted elements)", session.values().len()), styles.muted()),
        ]),
        Line::from(format!(
            "lo: {}   hi: {hi}   mid: {mid}   iterations: {}",
            session.lo(),
            session.iterations()
        )),
    ];
    frame.render_widget(Paragraph::new(header_lines), header);

    if session.values().is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled("(empty array)", styles.muted())),
            strip,
        );
    } else {
        let lines = cell_rows(session.values(), &state.tags(), strip.width, styles);
        frame.render_widget(Paragraph::new(lines), strip);
    }

    let mut narration_lines = Vec::new();
    if let Some(result) = state.last() {
        narration_lines.push(Line::from(describe_step(
            result,
            session.values(),
            session.target(),
        )));
    } else {
        narration_lines.push(Line::styled("Press Space to take the first step.", styles.muted()));
    }
    if let Some(summary) = state.summary() {
        narration_lines.push(Line::styled(summary, SECTION_HEADER));
    }
    frame.render_widget(
        Paragraph::new(narration_lines).wrap(Wrap { trim: true }),
        narration,
    );

    let legend_spans: Vec<Span> = [
        CellTag::Low,
        CellTag::Mid,
        CellTag::High,
        CellTag::Examined,
        CellTag::Found,
    ]
    .into_iter()
    .flat_map(|tag| {
        [
            Span::styled(format!(" {} ", tag.label()), styles.for_tag(tag)),
            Span::raw(" "),
        ]
    })
    .collect();
    frame.render_widget(Paragraph::new(Line::from(legend_spans)), legend);
}
