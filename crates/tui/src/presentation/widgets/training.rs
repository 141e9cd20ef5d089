//! Training view: the tier × type roster grid, the speed-bonus field, and
//! the estimated total.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use warchest_core::{
    Tier, TrainingRoster, TroopType, estimate_training, parse_count, parse_percent,
};

use crate::presentation::theme::Theme;
use crate::state::{TrainingView, View};

const CELL_WIDTH: usize = 11;

pub fn render(frame: &mut Frame, area: Rect, view: &TrainingView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(Tier::COUNT as u16 + 3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    render_roster(frame, chunks[0], view);
    render_speed(frame, chunks[1], view);
    render_estimate(frame, chunks[2], view);
}

fn render_roster(frame: &mut Frame, area: Rect, view: &TrainingView) {
    let mut lines = Vec::with_capacity(Tier::COUNT + 1);

    let mut header = vec![Span::styled(format!("{:<6}", "Tier"), Theme::label())];
    for troop_type in TroopType::all() {
        header.push(Span::styled(
            format!("{:>CELL_WIDTH$}", troop_type.label()),
            Theme::label(),
        ));
    }
    lines.push(Line::from(header));

    for tier in Tier::all() {
        let mut spans = vec![Span::styled(
            format!("{:<6}", tier.label()),
            Theme::label(),
        )];
        for troop_type in TroopType::all() {
            let text = view.cell_text(tier, troop_type);
            let cell = if text.is_empty() { "0" } else { text };
            spans.push(Span::styled(
                format!("{cell:>CELL_WIDTH$}"),
                Theme::field(View::Training, view.is_cell_focused(tier, troop_type)),
            ));
        }
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Troops ")
            .title_style(Theme::title(View::Training)),
    );
    frame.render_widget(grid, area);
}

fn render_speed(frame: &mut Frame, area: Rect, view: &TrainingView) {
    let text = if view.speed_bonus.is_empty() && !view.is_speed_focused() {
        Span::styled("0", Theme::hint())
    } else {
        let shown = if view.speed_bonus.is_empty() {
            " "
        } else {
            view.speed_bonus.as_str()
        };
        Span::styled(shown, Theme::field(View::Training, view.is_speed_focused()))
    };

    let field = Paragraph::new(Line::from(vec![
        Span::styled("Training speed bonus (%): ", Theme::label()),
        text,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Speed ")
            .title_style(Theme::title(View::Training)),
    );
    frame.render_widget(field, area);
}

fn render_estimate(frame: &mut Frame, area: Rect, view: &TrainingView) {
    let mut roster = TrainingRoster::new();
    for tier in Tier::all() {
        for troop_type in TroopType::all() {
            roster.set_count(tier, troop_type, parse_count(view.cell_text(tier, troop_type)));
        }
    }
    let time = estimate_training(&roster, parse_percent(&view.speed_bonus));

    let panel = Paragraph::new(Line::from(vec![
        Span::styled("Total training time: ", Theme::label()),
        Span::styled(time.format(), Theme::value(View::Training)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Estimate ")
            .title_style(Theme::title(View::Training)),
    );
    frame.render_widget(panel, area);
}
