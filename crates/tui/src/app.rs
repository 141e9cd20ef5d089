//! Application state and the synchronous event/render loop.
//!
//! One draw per loop iteration; every derived figure (totals summary,
//! purchase plan, training estimate) is recomputed from the raw input state
//! inside the render pass. The catalogs are a few dozen entries, so the
//! recompute-on-every-keystroke model costs nothing measurable.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::config::TuiConfig;
use crate::input::{KeyAction, map_key};
use crate::presentation::{terminal::Tui, ui};
use crate::state::{GemStoreView, SpeedupsView, TrainingView, View};

/// Top-level application state: the active view plus each view's transient
/// input state.
pub struct App {
    pub view: View,
    pub speedups: SpeedupsView,
    pub gem_store: GemStoreView,
    pub training: TrainingView,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            view: View::Speedups,
            speedups: SpeedupsView::default(),
            gem_store: GemStoreView::default(),
            training: TrainingView::default(),
            should_quit: false,
        }
    }

    /// Applies one decoded key command to the active view.
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::NextView => self.switch_view(self.view.next()),
            KeyAction::PrevView => self.switch_view(self.view.prev()),
            KeyAction::FocusUp => match self.view {
                View::Speedups => self.speedups.focus_up(),
                View::GemStore => {}
                View::Training => self.training.focus_up(),
            },
            KeyAction::FocusDown => match self.view {
                View::Speedups => self.speedups.focus_down(),
                View::GemStore => {}
                View::Training => self.training.focus_down(),
            },
            KeyAction::FocusLeft => match self.view {
                View::Speedups => self.speedups.focus_left(),
                View::GemStore => {}
                View::Training => self.training.focus_left(),
            },
            KeyAction::FocusRight => match self.view {
                View::Speedups => self.speedups.focus_right(),
                View::GemStore => {}
                View::Training => self.training.focus_right(),
            },
            KeyAction::Insert(ch) => match self.view {
                View::Speedups => self.speedups.insert_char(ch),
                View::GemStore => self.gem_store.insert_char(ch),
                View::Training => self.training.insert_char(ch),
            },
            KeyAction::Backspace => match self.view {
                View::Speedups => self.speedups.backspace(),
                View::GemStore => self.gem_store.backspace(),
                View::Training => self.training.backspace(),
            },
            KeyAction::Clear => match self.view {
                View::Speedups => self.speedups.clear(),
                View::GemStore => self.gem_store.clear(),
                View::Training => self.training.clear(),
            },
            KeyAction::None => {}
        }
    }

    /// Switches views, discarding the outgoing view's transient state so
    /// re-entering always starts from a blank screen.
    fn switch_view(&mut self, next: View) {
        match self.view {
            View::Speedups => self.speedups = SpeedupsView::default(),
            View::GemStore => self.gem_store = GemStoreView::default(),
            View::Training => self.training = TrainingView::default(),
        }
        tracing::debug!(from = ?self.view, to = ?next, "switching view");
        self.view = next;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the blocking event loop until the user quits.
///
/// Draw, wait up to the configured tick for a key, apply it, repeat.
/// Release events are ignored so terminals that report both edge kinds do
/// not double-type.
pub fn run(terminal: &mut Tui, config: &TuiConfig) -> Result<()> {
    let mut app = App::new();
    let tick = Duration::from_millis(config.tick_ms);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, &app))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.apply(map_key(key));
                }
            }
        }
    }

    tracing::info!("quit requested, leaving event loop");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use warchest_core::{Category, Denomination};

    #[test]
    fn starts_on_the_speedups_view() {
        let app = App::new();
        assert_eq!(app.view, View::Speedups);
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_action_sets_the_flag() {
        let mut app = App::new();
        app.apply(KeyAction::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn inserts_route_to_the_active_view() {
        let mut app = App::new();
        app.apply(KeyAction::Insert('3'));
        assert_eq!(
            app.speedups.counts.count(Category::Normal, Denomination::M1),
            3
        );

        app.apply(KeyAction::NextView);
        app.apply(KeyAction::Insert('9'));
        assert_eq!(app.gem_store.balance, "9");
    }

    #[test]
    fn switching_views_discards_the_outgoing_state() {
        let mut app = App::new();
        app.apply(KeyAction::NextView); // gem store
        app.apply(KeyAction::Insert('1'));
        app.apply(KeyAction::Insert('5'));
        assert_eq!(app.gem_store.balance, "15");

        app.apply(KeyAction::NextView); // training
        assert!(app.gem_store.balance.is_empty());

        app.apply(KeyAction::Insert('7'));
        app.apply(KeyAction::PrevView); // back to gem store
        assert_eq!(app.view, View::GemStore);
        assert_eq!(
            app.training
                .cell_text(warchest_core::Tier::T1, warchest_core::TroopType::Infantry),
            ""
        );
    }

    #[test]
    fn full_cycle_returns_to_the_starting_view() {
        let mut app = App::new();
        for _ in 0..View::COUNT {
            app.apply(KeyAction::NextView);
        }
        assert_eq!(app.view, View::Speedups);
    }
}
