//! Persistent navigation panel listing the three calculator views.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;
use crate::state::View;

pub fn render(frame: &mut Frame, area: Rect, active: View) {
    let mut lines = Vec::new();

    for view in View::all() {
        let marker = if view == active { "> " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", view.label()),
            Theme::sidebar_entry(view, view == active),
        )));
    }

    lines.push(Line::default());
    for hint in [
        "Tab     next view",
        "S-Tab   prev view",
        "Arrows  move focus",
        "0-9 .   edit field",
        "Bksp    delete",
        "Del     clear field",
        "q/Esc   quit",
    ] {
        lines.push(Line::from(Span::styled(hint, Theme::hint())));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" warchest ")
            .title_style(Theme::title(active)),
    );
    frame.render_widget(panel, area);
}
