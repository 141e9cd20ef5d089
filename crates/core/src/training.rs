//! Troop training time estimation.
//!
//! Base time is a pure function of tier (15/30/60/120 seconds per unit,
//! identical for all four troop types within a tier). The speed bonus
//! divides the base total: `base / (1 + bonus/100)`. The divisor is guarded
//! explicitly — a bonus at or below −100% cannot occur through the filtered
//! input field, but the formula stays total and reports an unbounded
//! duration instead of dividing by zero.

use crate::catalog::{Tier, TroopType};
use crate::format::format_seconds;

/// Troop counts for the 4×4 tier/type grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrainingRoster {
    counts: [[u64; TroopType::COUNT]; Tier::COUNT],
}

impl TrainingRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, tier: Tier, troop_type: TroopType) -> u64 {
        self.counts[Self::row(tier)][Self::col(troop_type)]
    }

    pub fn set_count(&mut self, tier: Tier, troop_type: TroopType, count: u64) {
        self.counts[Self::row(tier)][Self::col(troop_type)] = count;
    }

    const fn row(tier: Tier) -> usize {
        match tier {
            Tier::T1 => 0,
            Tier::T2 => 1,
            Tier::T3 => 2,
            Tier::T4 => 3,
        }
    }

    const fn col(troop_type: TroopType) -> usize {
        match troop_type {
            TroopType::Infantry => 0,
            TroopType::Cavalry => 1,
            TroopType::Artillery => 2,
            TroopType::Siege => 3,
        }
    }
}

/// Sums the roster into unmodified training seconds, saturating.
pub fn base_training_seconds(roster: &TrainingRoster) -> u64 {
    let mut total = 0u64;
    for tier in Tier::all() {
        let base = tier.base_seconds();
        for troop_type in TroopType::all() {
            total = total.saturating_add(roster.count(tier, troop_type).saturating_mul(base));
        }
    }
    total
}

/// Estimated training duration after the speed bonus is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrainingTime {
    /// Effective seconds, possibly fractional from the bonus division.
    Seconds(f64),
    /// The bonus drove the divisor to zero or below; no finite duration
    /// exists.
    Unbounded,
}

impl TrainingTime {
    /// Renders through the seconds formatter; `Unbounded` is the `"∞"`
    /// indicator.
    pub fn format(&self) -> String {
        match self {
            TrainingTime::Seconds(seconds) => format_seconds(*seconds),
            TrainingTime::Unbounded => format_seconds(f64::INFINITY),
        }
    }
}

/// Applies `speed_bonus_percent` to the roster's base total.
///
/// Effective time is `base / (1 + bonus/100)`; a bonus of 100 halves the
/// duration. Bonuses at or below −100 yield [`TrainingTime::Unbounded`].
pub fn estimate_training(roster: &TrainingRoster, speed_bonus_percent: f64) -> TrainingTime {
    if speed_bonus_percent <= -100.0 {
        return TrainingTime::Unbounded;
    }
    let base = base_training_seconds(roster) as f64;
    TrainingTime::Seconds(base / (1.0 + speed_bonus_percent / 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roster_trains_instantly() {
        let roster = TrainingRoster::new();
        assert_eq!(base_training_seconds(&roster), 0);
        assert_eq!(estimate_training(&roster, 0.0), TrainingTime::Seconds(0.0));
        assert_eq!(estimate_training(&roster, 0.0).format(), "0s");
    }

    #[test]
    fn single_t1_unit_takes_fifteen_seconds() {
        let mut roster = TrainingRoster::new();
        roster.set_count(Tier::T1, TroopType::Infantry, 1);
        let time = estimate_training(&roster, 0.0);
        assert_eq!(time, TrainingTime::Seconds(15.0));
        assert_eq!(time.format(), "15s");
    }

    #[test]
    fn base_time_depends_on_tier_not_type() {
        let mut by_infantry = TrainingRoster::new();
        by_infantry.set_count(Tier::T3, TroopType::Infantry, 7);
        let mut by_siege = TrainingRoster::new();
        by_siege.set_count(Tier::T3, TroopType::Siege, 7);
        assert_eq!(
            base_training_seconds(&by_infantry),
            base_training_seconds(&by_siege)
        );
    }

    #[test]
    fn hundred_percent_bonus_halves_the_time() {
        // 10 t4 units: 1200 base seconds; 100% bonus gives 600s = 10m.
        let mut roster = TrainingRoster::new();
        roster.set_count(Tier::T4, TroopType::Cavalry, 6);
        roster.set_count(Tier::T4, TroopType::Siege, 4);
        assert_eq!(base_training_seconds(&roster), 1200);
        let time = estimate_training(&roster, 100.0);
        assert_eq!(time, TrainingTime::Seconds(600.0));
        assert_eq!(time.format(), "10m");
    }

    #[test]
    fn mixed_roster_sums_per_tier_bases() {
        let mut roster = TrainingRoster::new();
        roster.set_count(Tier::T1, TroopType::Infantry, 2); // 30
        roster.set_count(Tier::T2, TroopType::Cavalry, 2); // 60
        roster.set_count(Tier::T3, TroopType::Artillery, 2); // 120
        roster.set_count(Tier::T4, TroopType::Siege, 2); // 240
        assert_eq!(base_training_seconds(&roster), 450);
    }

    #[test]
    fn bonus_at_or_below_minus_hundred_is_unbounded() {
        let mut roster = TrainingRoster::new();
        roster.set_count(Tier::T1, TroopType::Infantry, 1);
        assert_eq!(estimate_training(&roster, -100.0), TrainingTime::Unbounded);
        assert_eq!(estimate_training(&roster, -250.0), TrainingTime::Unbounded);
        assert_eq!(estimate_training(&roster, -100.0).format(), "∞");
    }

    #[test]
    fn fractional_bonus_divides_exactly() {
        let mut roster = TrainingRoster::new();
        roster.set_count(Tier::T2, TroopType::Infantry, 10); // 300 base
        match estimate_training(&roster, 50.0) {
            TrainingTime::Seconds(seconds) => assert_eq!(seconds, 200.0),
            TrainingTime::Unbounded => panic!("finite bonus must stay finite"),
        }
    }
}
