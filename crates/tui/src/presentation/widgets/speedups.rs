//! Speedups view: the denomination × category count grid and the totals
//! summary panel.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use warchest_core::{Category, Denomination, TotalsSummary, format_minutes};

use crate::presentation::theme::Theme;
use crate::state::{SpeedupsView, View};

const CELL_WIDTH: usize = 10;

pub fn render(frame: &mut Frame, area: Rect, view: &SpeedupsView) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(38)])
        .split(area);

    render_grid(frame, chunks[0], view);
    render_totals(frame, chunks[1], view);
}

fn render_grid(frame: &mut Frame, area: Rect, view: &SpeedupsView) {
    let mut lines = Vec::with_capacity(Denomination::COUNT + 1);

    let mut header = vec![Span::styled(format!("{:<6}", "Item"), Theme::label())];
    for category in Category::all() {
        header.push(Span::styled(
            format!("{:>CELL_WIDTH$}", category.label()),
            Theme::label(),
        ));
    }
    lines.push(Line::from(header));

    for denomination in Denomination::all() {
        let mut spans = vec![Span::styled(
            format!("{:<6}", denomination.label()),
            Theme::label(),
        )];
        for category in Category::all() {
            let text = view.cell_text(category, denomination);
            let cell = if text.is_empty() { "0" } else { text.as_str() };
            spans.push(Span::styled(
                format!("{cell:>CELL_WIDTH$}"),
                Theme::field(View::Speedups, view.is_focused(category, denomination)),
            ));
        }
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Speedup Inventory ")
            .title_style(Theme::title(View::Speedups)),
    );
    frame.render_widget(grid, area);
}

fn render_totals(frame: &mut Frame, area: Rect, view: &SpeedupsView) {
    let summary = TotalsSummary::compute(&view.counts);

    let rows = [
        ("Normal", summary.normal),
        ("Research", summary.research),
        ("Training", summary.training),
        ("Normal + Research", summary.normal_and_research),
        ("Normal + Training", summary.normal_and_training),
        ("Grand Total", summary.grand_total),
    ];

    let mut lines = Vec::with_capacity(rows.len());
    for (label, minutes) in rows {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<20}"), Theme::label()),
            Span::styled(format_minutes(minutes), Theme::value(View::Speedups)),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Totals ")
            .title_style(Theme::title(View::Speedups)),
    );
    frame.render_widget(panel, area);
}
