//! Speedup aggregation across the three independent categories.
//!
//! Counts live in sparse per-category maps: a denomination missing from the
//! map is a zero count, and writing a zero removes the key instead of
//! storing it. Aggregation walks the fixed catalog so the result never
//! depends on what happens to be present in the map.

use std::collections::BTreeMap;

use crate::catalog::{Category, Denomination};

/// Sums a count mapping into total minutes.
///
/// Absent denominations contribute zero; arithmetic saturates rather than
/// wrapping. An empty mapping yields 0.
pub fn total_minutes(counts: &BTreeMap<Denomination, u64>) -> u64 {
    Denomination::all().iter().fold(0u64, |total, denomination| {
        let count = counts.get(denomination).copied().unwrap_or(0);
        total.saturating_add(count.saturating_mul(denomination.minutes()))
    })
}

/// Transient per-session speedup counts, one sparse map per category.
///
/// Created when the speedups view is entered and discarded when the user
/// navigates away; nothing is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpeedupState {
    counts: [BTreeMap<Denomination, u64>; Category::COUNT],
}

impl SpeedupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count for one cell; absent means zero.
    pub fn count(&self, category: Category, denomination: Denomination) -> u64 {
        self.counts[Self::slot(category)]
            .get(&denomination)
            .copied()
            .unwrap_or(0)
    }

    /// Sets one cell. A zero count removes the key, keeping the map sparse.
    pub fn set_count(&mut self, category: Category, denomination: Denomination, count: u64) {
        let map = &mut self.counts[Self::slot(category)];
        if count == 0 {
            map.remove(&denomination);
        } else {
            map.insert(denomination, count);
        }
    }

    /// The sparse count mapping for one category.
    pub fn category_counts(&self, category: Category) -> &BTreeMap<Denomination, u64> {
        &self.counts[Self::slot(category)]
    }

    const fn slot(category: Category) -> usize {
        match category {
            Category::Normal => 0,
            Category::Research => 1,
            Category::Training => 2,
        }
    }
}

/// The six derived totals shown in the summary panel.
///
/// Three per-category sums plus the two pairings the game actually uses
/// (research and training speedups each stack with normal ones, never with
/// each other) and the grand total. All values are minutes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TotalsSummary {
    pub normal: u64,
    pub research: u64,
    pub training: u64,
    pub normal_and_research: u64,
    pub normal_and_training: u64,
    pub grand_total: u64,
}

impl TotalsSummary {
    /// Recomputes every total from the current counts.
    pub fn compute(state: &SpeedupState) -> Self {
        let normal = total_minutes(state.category_counts(Category::Normal));
        let research = total_minutes(state.category_counts(Category::Research));
        let training = total_minutes(state.category_counts(Category::Training));

        Self {
            normal,
            research,
            training,
            normal_and_research: normal.saturating_add(research),
            normal_and_training: normal.saturating_add(training),
            grand_total: normal.saturating_add(research).saturating_add(training),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mapping_totals_zero() {
        assert_eq!(total_minutes(&BTreeMap::new()), 0);
        let summary = TotalsSummary::compute(&SpeedupState::new());
        assert_eq!(summary, TotalsSummary::default());
    }

    #[test]
    fn totals_weight_counts_by_denomination_minutes() {
        let mut counts = BTreeMap::new();
        counts.insert(Denomination::M5, 3); // 15
        counts.insert(Denomination::H24, 2); // 2880
        counts.insert(Denomination::D7, 1); // 10080
        assert_eq!(total_minutes(&counts), 15 + 2880 + 10_080);
    }

    #[test]
    fn zero_count_removes_the_key() {
        let mut state = SpeedupState::new();
        state.set_count(Category::Normal, Denomination::M30, 4);
        assert_eq!(state.count(Category::Normal, Denomination::M30), 4);
        assert_eq!(state.category_counts(Category::Normal).len(), 1);

        state.set_count(Category::Normal, Denomination::M30, 0);
        assert_eq!(state.count(Category::Normal, Denomination::M30), 0);
        assert!(state.category_counts(Category::Normal).is_empty());
    }

    #[test]
    fn categories_do_not_interact() {
        let mut state = SpeedupState::new();
        state.set_count(Category::Normal, Denomination::M60, 1);
        state.set_count(Category::Research, Denomination::M60, 2);
        state.set_count(Category::Training, Denomination::M60, 3);

        let summary = TotalsSummary::compute(&state);
        assert_eq!(summary.normal, 60);
        assert_eq!(summary.research, 120);
        assert_eq!(summary.training, 180);
    }

    #[test]
    fn composites_are_plain_sums_of_category_totals() {
        let mut state = SpeedupState::new();
        state.set_count(Category::Normal, Denomination::H3, 2);
        state.set_count(Category::Research, Denomination::M15, 5);
        state.set_count(Category::Training, Denomination::D3, 1);

        let summary = TotalsSummary::compute(&state);
        assert_eq!(
            summary.normal_and_research,
            summary.normal + summary.research
        );
        assert_eq!(
            summary.normal_and_training,
            summary.normal + summary.training
        );
        assert_eq!(
            summary.grand_total,
            summary.normal + summary.research + summary.training
        );
    }

    #[test]
    fn aggregation_saturates_instead_of_wrapping() {
        let mut counts = BTreeMap::new();
        counts.insert(Denomination::D30, u64::MAX);
        assert_eq!(total_minutes(&counts), u64::MAX);
    }
}
