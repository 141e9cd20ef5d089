//! Gem-to-speedup purchase allocation.
//!
//! A fixed-priority greedy walk over [`GEM_STORE`]: saturate the 24h offer,
//! then feed whatever is left to the 15h offer. This is deterministic but
//! deliberately not a knapsack optimum — with 3100 gems it buys two 24h
//! items and strands 100 gems, where spending 1500 + 1000 would have
//! stranded 600 but bought less total time per gem up front. The in-game
//! store resolves purchases the same way, so the sequential behavior is the
//! correct one to reproduce.

use crate::catalog::{GEM_STORE, PurchaseOption};

/// One line of the purchase result: an offer and how many were bought.
///
/// Only appears in a plan with `count > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Purchase {
    pub option: PurchaseOption,
    pub count: u64,
}

impl Purchase {
    /// Minutes granted by this line.
    pub const fn minutes(&self) -> u64 {
        self.count * self.option.minutes()
    }

    /// Gems spent on this line.
    pub const fn cost(&self) -> u64 {
        self.count * self.option.gem_cost
    }
}

/// Outcome of allocating a gem balance across the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PurchasePlan {
    /// Purchased lines in store priority order; offers that could not be
    /// afforded are absent rather than listed with a zero count.
    pub purchases: Vec<Purchase>,
    pub total_minutes: u64,
    pub gems_spent: u64,
    pub gems_remaining: u64,
}

impl PurchasePlan {
    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty()
    }
}

/// Allocates `gems` across the store offers in priority order.
///
/// For each offer in turn: if the remaining balance covers the cost, buy
/// `floor(remaining / cost)` units and deduct them before considering the
/// next offer. A balance below every offer's cost yields an empty plan with
/// the full balance remaining.
pub fn plan_purchases(gems: u64) -> PurchasePlan {
    let mut remaining = gems;
    let mut purchases = Vec::new();
    let mut total_minutes = 0u64;

    for option in GEM_STORE {
        if remaining < option.gem_cost {
            continue;
        }
        let count = remaining / option.gem_cost;
        remaining -= count * option.gem_cost;
        total_minutes = total_minutes.saturating_add(count.saturating_mul(option.minutes()));
        purchases.push(Purchase { option, count });
    }

    PurchasePlan {
        purchases,
        total_minutes,
        gems_spent: gems - remaining,
        gems_remaining: remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Denomination;

    fn denominations(plan: &PurchasePlan) -> Vec<(Denomination, u64)> {
        plan.purchases
            .iter()
            .map(|p| (p.option.denomination, p.count))
            .collect()
    }

    #[test]
    fn zero_balance_buys_nothing() {
        let plan = plan_purchases(0);
        assert!(plan.is_empty());
        assert_eq!(plan.total_minutes, 0);
        assert_eq!(plan.gems_spent, 0);
        assert_eq!(plan.gems_remaining, 0);
    }

    #[test]
    fn balance_below_every_offer_is_kept_whole() {
        let plan = plan_purchases(999);
        assert!(plan.is_empty());
        assert_eq!(plan.gems_spent, 0);
        assert_eq!(plan.gems_remaining, 999);
    }

    #[test]
    fn exactly_one_24h_item() {
        let plan = plan_purchases(1500);
        assert_eq!(denominations(&plan), vec![(Denomination::H24, 1)]);
        assert_eq!(plan.total_minutes, 1440);
        assert_eq!(plan.gems_spent, 1500);
        assert_eq!(plan.gems_remaining, 0);
    }

    #[test]
    fn leftover_after_24h_feeds_the_15h_offer() {
        // 2600: one 24h (1500), then 1100 remaining covers one 15h (1000).
        let plan = plan_purchases(2600);
        assert_eq!(
            denominations(&plan),
            vec![(Denomination::H24, 1), (Denomination::H15, 1)]
        );
        assert_eq!(plan.total_minutes, 1440 + 900);
        assert_eq!(plan.gems_spent, 2500);
        assert_eq!(plan.gems_remaining, 100);
    }

    #[test]
    fn greedy_priority_can_strand_gems() {
        // 3100: two 24h items leave 100, never reaching the 15h tier.
        // Pins the sequential store behavior against a "smarter" split.
        let plan = plan_purchases(3100);
        assert_eq!(denominations(&plan), vec![(Denomination::H24, 2)]);
        assert_eq!(plan.total_minutes, 2880);
        assert_eq!(plan.gems_spent, 3000);
        assert_eq!(plan.gems_remaining, 100);
    }

    #[test]
    fn balance_between_offers_reaches_the_cheaper_one() {
        let plan = plan_purchases(1000);
        assert_eq!(denominations(&plan), vec![(Denomination::H15, 1)]);
        assert_eq!(plan.total_minutes, 900);
        assert_eq!(plan.gems_remaining, 0);
    }

    #[test]
    fn spent_and_remaining_partition_the_balance() {
        for gems in [0, 999, 1000, 1499, 1500, 2600, 3100, 10_000] {
            let plan = plan_purchases(gems);
            assert_eq!(plan.gems_spent + plan.gems_remaining, gems);
        }
    }
}
