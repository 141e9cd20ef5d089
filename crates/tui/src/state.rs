//! Per-view transient state for the three calculator screens.
//!
//! Each view owns its own input buffers and field focus. State is created
//! fresh when a view is entered and replaced wholesale when the user
//! navigates away, so nothing leaks between screens or sessions. Keystroke
//! filtering happens here: a character is applied only if the resulting
//! buffer would still satisfy the field's filter.

use warchest_core::{
    Category, Denomination, SpeedupState, Tier, TroopType, is_count_input, is_percent_input,
    parse_count,
};

/// One of the three calculator screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Speedups,
    GemStore,
    Training,
}

impl View {
    pub const COUNT: usize = 3;

    pub const fn all() -> [View; Self::COUNT] {
        [View::Speedups, View::GemStore, View::Training]
    }

    pub const fn next(self) -> View {
        match self {
            View::Speedups => View::GemStore,
            View::GemStore => View::Training,
            View::Training => View::Speedups,
        }
    }

    pub const fn prev(self) -> View {
        match self {
            View::Speedups => View::Training,
            View::GemStore => View::Speedups,
            View::Training => View::GemStore,
        }
    }

    /// Sidebar label.
    pub const fn label(self) -> &'static str {
        match self {
            View::Speedups => "Speedups",
            View::GemStore => "Gem Store",
            View::Training => "Training",
        }
    }
}

// ============================================================================
// Speedups view
// ============================================================================

/// The speedups screen: a denomination × category grid of count fields.
///
/// The sparse [`SpeedupState`] maps are authoritative; the text shown in a
/// cell is derived from its count (empty for zero). Edits re-enter through
/// the count filter, so the maps only ever hold digit-string values.
#[derive(Clone, Debug, Default)]
pub struct SpeedupsView {
    pub counts: SpeedupState,
    row: usize,
    col: usize,
}

impl SpeedupsView {
    /// The focused (category, denomination) cell.
    pub fn focus(&self) -> (Category, Denomination) {
        (Category::all()[self.col], Denomination::all()[self.row])
    }

    pub fn is_focused(&self, category: Category, denomination: Denomination) -> bool {
        self.focus() == (category, denomination)
    }

    pub fn focus_up(&mut self) {
        self.row = wrap_dec(self.row, Denomination::COUNT);
    }

    pub fn focus_down(&mut self) {
        self.row = wrap_inc(self.row, Denomination::COUNT);
    }

    pub fn focus_left(&mut self) {
        self.col = wrap_dec(self.col, Category::COUNT);
    }

    pub fn focus_right(&mut self) {
        self.col = wrap_inc(self.col, Category::COUNT);
    }

    /// Display text for a cell: the count, or empty when the key is absent.
    pub fn cell_text(&self, category: Category, denomination: Denomination) -> String {
        match self.counts.count(category, denomination) {
            0 => String::new(),
            count => count.to_string(),
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        let (category, denomination) = self.focus();
        let mut buffer = self.cell_text(category, denomination);
        buffer.push(ch);
        if !is_count_input(&buffer) {
            return;
        }
        // Re-parse the whole buffer; a count too large for u64 rejects the
        // keystroke rather than silently clamping.
        if let Ok(count) = buffer.parse::<u64>() {
            self.counts.set_count(category, denomination, count);
        }
    }

    pub fn backspace(&mut self) {
        let (category, denomination) = self.focus();
        let mut buffer = self.cell_text(category, denomination);
        buffer.pop();
        self.counts
            .set_count(category, denomination, parse_count(&buffer));
    }

    pub fn clear(&mut self) {
        let (category, denomination) = self.focus();
        self.counts.set_count(category, denomination, 0);
    }
}

// ============================================================================
// Gem store view
// ============================================================================

/// The gem store screen: a single digit-filtered balance field.
#[derive(Clone, Debug, Default)]
pub struct GemStoreView {
    pub balance: String,
}

impl GemStoreView {
    pub fn insert_char(&mut self, ch: char) {
        let mut buffer = self.balance.clone();
        buffer.push(ch);
        if is_count_input(&buffer) {
            self.balance = buffer;
        }
    }

    pub fn backspace(&mut self) {
        self.balance.pop();
    }

    pub fn clear(&mut self) {
        self.balance.clear();
    }
}

// ============================================================================
// Training view
// ============================================================================

/// Field focus on the training screen: one of the 4×4 grid cells or the
/// speed-bonus field below them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrainingFocus {
    Cell { tier: usize, troop: usize },
    Speed,
}

/// The training screen: raw count strings per (tier, type) cell plus the
/// decimal speed-bonus field. Strings are parsed leniently on every read.
#[derive(Clone, Debug)]
pub struct TrainingView {
    pub counts: [[String; TroopType::COUNT]; Tier::COUNT],
    pub speed_bonus: String,
    pub focus: TrainingFocus,
}

impl Default for TrainingView {
    fn default() -> Self {
        Self {
            counts: Default::default(),
            speed_bonus: String::new(),
            focus: TrainingFocus::Cell { tier: 0, troop: 0 },
        }
    }
}

impl TrainingView {
    pub fn cell_text(&self, tier: Tier, troop_type: TroopType) -> &str {
        &self.counts[tier_index(tier)][troop_index(troop_type)]
    }

    pub fn is_cell_focused(&self, tier: Tier, troop_type: TroopType) -> bool {
        self.focus
            == TrainingFocus::Cell {
                tier: tier_index(tier),
                troop: troop_index(troop_type),
            }
    }

    pub fn is_speed_focused(&self) -> bool {
        self.focus == TrainingFocus::Speed
    }

    /// Vertical focus movement treats the speed field as a fifth row.
    pub fn focus_up(&mut self) {
        self.focus = match self.focus {
            TrainingFocus::Cell { tier: 0, .. } => TrainingFocus::Speed,
            TrainingFocus::Cell { tier, troop } => TrainingFocus::Cell {
                tier: tier - 1,
                troop,
            },
            TrainingFocus::Speed => TrainingFocus::Cell {
                tier: Tier::COUNT - 1,
                troop: 0,
            },
        };
    }

    pub fn focus_down(&mut self) {
        self.focus = match self.focus {
            TrainingFocus::Cell { tier, troop } if tier + 1 < Tier::COUNT => {
                TrainingFocus::Cell {
                    tier: tier + 1,
                    troop,
                }
            }
            TrainingFocus::Cell { .. } => TrainingFocus::Speed,
            TrainingFocus::Speed => TrainingFocus::Cell { tier: 0, troop: 0 },
        };
    }

    pub fn focus_left(&mut self) {
        if let TrainingFocus::Cell { tier, troop } = self.focus {
            self.focus = TrainingFocus::Cell {
                tier,
                troop: wrap_dec(troop, TroopType::COUNT),
            };
        }
    }

    pub fn focus_right(&mut self) {
        if let TrainingFocus::Cell { tier, troop } = self.focus {
            self.focus = TrainingFocus::Cell {
                tier,
                troop: wrap_inc(troop, TroopType::COUNT),
            };
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        match self.focus {
            TrainingFocus::Cell { tier, troop } => {
                let field = &mut self.counts[tier][troop];
                let mut buffer = field.clone();
                buffer.push(ch);
                if is_count_input(&buffer) {
                    *field = buffer;
                }
            }
            TrainingFocus::Speed => {
                let mut buffer = self.speed_bonus.clone();
                buffer.push(ch);
                if is_percent_input(&buffer) {
                    self.speed_bonus = buffer;
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            TrainingFocus::Cell { tier, troop } => {
                self.counts[tier][troop].pop();
            }
            TrainingFocus::Speed => {
                self.speed_bonus.pop();
            }
        }
    }

    pub fn clear(&mut self) {
        match self.focus {
            TrainingFocus::Cell { tier, troop } => self.counts[tier][troop].clear(),
            TrainingFocus::Speed => self.speed_bonus.clear(),
        }
    }
}

const fn tier_index(tier: Tier) -> usize {
    match tier {
        Tier::T1 => 0,
        Tier::T2 => 1,
        Tier::T3 => 2,
        Tier::T4 => 3,
    }
}

const fn troop_index(troop_type: TroopType) -> usize {
    match troop_type {
        TroopType::Infantry => 0,
        TroopType::Cavalry => 1,
        TroopType::Artillery => 2,
        TroopType::Siege => 3,
    }
}

const fn wrap_inc(index: usize, len: usize) -> usize {
    (index + 1) % len
}

const fn wrap_dec(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}
