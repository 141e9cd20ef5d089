//! Frame layout: persistent sidebar on the left, the active calculator view
//! on the right. Each draw recomputes every derived figure from the raw
//! input state, so the screen always reflects the latest keystroke.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;
use crate::presentation::widgets;
use crate::state::View;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(frame.area());

    widgets::sidebar::render(frame, chunks[0], app.view);

    match app.view {
        View::Speedups => widgets::speedups::render(frame, chunks[1], &app.speedups),
        View::GemStore => widgets::gem_store::render(frame, chunks[1], &app.gem_store),
        View::Training => widgets::training::render(frame, chunks[1], &app.training),
    }
}
