//! Styling rules for the terminal UI.
//!
//! Each view carries its own accent color: gold for speedups, cyan for the
//! gem store, green for training.

use ratatui::style::{Color, Modifier, Style};

use crate::state::View;

pub struct Theme;

impl Theme {
    /// Accent color identifying a view.
    pub fn accent(view: View) -> Color {
        match view {
            View::Speedups => Color::Yellow,
            View::GemStore => Color::Cyan,
            View::Training => Color::Green,
        }
    }

    /// Title style for a view's panels.
    pub fn title(view: View) -> Style {
        Style::default()
            .fg(Self::accent(view))
            .add_modifier(Modifier::BOLD)
    }

    /// Style for an input field, emphasized when it holds focus.
    pub fn field(view: View, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Self::accent(view))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    /// Style for static labels next to fields and results.
    pub fn label() -> Style {
        Style::default().fg(Color::Gray)
    }

    /// Style for computed result values.
    pub fn value(view: View) -> Style {
        Style::default()
            .fg(Self::accent(view))
            .add_modifier(Modifier::BOLD)
    }

    /// Style for secondary hints (key bindings, placeholders).
    pub fn hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    /// Sidebar entry style; the active view carries its accent.
    pub fn sidebar_entry(view: View, active: bool) -> Style {
        if active {
            Style::default()
                .fg(Self::accent(view))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}
