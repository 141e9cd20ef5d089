//! Gem store view: the balance field and the purchase breakdown.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use warchest_core::{format_minutes, parse_count, plan_purchases};

use crate::presentation::theme::Theme;
use crate::state::{GemStoreView, View};

pub fn render(frame: &mut Frame, area: Rect, view: &GemStoreView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_balance(frame, chunks[0], view);
    render_plan(frame, chunks[1], view);
}

fn render_balance(frame: &mut Frame, area: Rect, view: &GemStoreView) {
    let text = if view.balance.is_empty() {
        Span::styled("0", Theme::hint())
    } else {
        Span::styled(view.balance.as_str(), Theme::field(View::GemStore, true))
    };

    let field = Paragraph::new(Line::from(vec![
        Span::styled("Gems available: ", Theme::label()),
        text,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Balance ")
            .title_style(Theme::title(View::GemStore)),
    );
    frame.render_widget(field, area);
}

fn render_plan(frame: &mut Frame, area: Rect, view: &GemStoreView) {
    let gems = parse_count(&view.balance);
    let plan = plan_purchases(gems);

    let mut lines = Vec::new();

    if plan.is_empty() {
        let notice = if gems > 0 {
            "Not enough gems for any speedup."
        } else {
            "Enter your gem balance above."
        };
        lines.push(Line::from(Span::styled(notice, Theme::hint())));
    } else {
        for purchase in &plan.purchases {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} speedup", purchase.option.denomination.label()),
                    Theme::label(),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("x {}", purchase.count),
                    Theme::value(View::GemStore),
                ),
            ]));
        }
    }

    lines.push(Line::default());
    for (label, value) in [
        ("Gems spent", plan.gems_spent.to_string()),
        ("Gems remaining", plan.gems_remaining.to_string()),
        ("Total time", format_minutes(plan.total_minutes)),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<16}"), Theme::label()),
            Span::styled(value, Theme::value(View::GemStore)),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Purchase Plan ")
            .title_style(Theme::title(View::GemStore)),
    );
    frame.render_widget(panel, area);
}
