//! Fixed game catalogs: speedup denominations, gem-store offers, and troop
//! training data.
//!
//! Everything in this module is static configuration — ordered, read-only
//! record lists defined once and iterated by the calculators and the UI.
//! Nothing here is mutated at runtime.

// ============================================================================
// Speedup denominations
// ============================================================================

/// A speedup item denomination.
///
/// The lowercase strum identifier (`m1` .. `d30`) is the stable id; the
/// display label from [`Denomination::label`] (`1m` .. `30d`) is what the UI
/// shows. Variants are declared ascending by duration, which is also the
/// order [`Denomination::all`] yields.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Denomination {
    M1,
    M3,
    M5,
    M10,
    M15,
    M30,
    M60,
    H3,
    H8,
    H15,
    H24,
    D3,
    D7,
    D30,
}

impl Denomination {
    /// Number of denominations in the catalog.
    pub const COUNT: usize = 14;

    /// Returns the full catalog, ascending by duration.
    pub const fn all() -> [Denomination; Self::COUNT] {
        [
            Denomination::M1,
            Denomination::M3,
            Denomination::M5,
            Denomination::M10,
            Denomination::M15,
            Denomination::M30,
            Denomination::M60,
            Denomination::H3,
            Denomination::H8,
            Denomination::H15,
            Denomination::H24,
            Denomination::D3,
            Denomination::D7,
            Denomination::D30,
        ]
    }

    /// Minutes granted by one item of this denomination.
    #[inline]
    pub const fn minutes(self) -> u64 {
        match self {
            Denomination::M1 => 1,
            Denomination::M3 => 3,
            Denomination::M5 => 5,
            Denomination::M10 => 10,
            Denomination::M15 => 15,
            Denomination::M30 => 30,
            Denomination::M60 => 60,
            Denomination::H3 => 3 * 60,
            Denomination::H8 => 8 * 60,
            Denomination::H15 => 15 * 60,
            Denomination::H24 => 24 * 60,
            Denomination::D3 => 3 * 24 * 60,
            Denomination::D7 => 7 * 24 * 60,
            Denomination::D30 => 30 * 24 * 60,
        }
    }

    /// Display label, duration first (`"1m"`, `"24h"`, `"30d"`).
    pub const fn label(self) -> &'static str {
        match self {
            Denomination::M1 => "1m",
            Denomination::M3 => "3m",
            Denomination::M5 => "5m",
            Denomination::M10 => "10m",
            Denomination::M15 => "15m",
            Denomination::M30 => "30m",
            Denomination::M60 => "60m",
            Denomination::H3 => "3h",
            Denomination::H8 => "8h",
            Denomination::H15 => "15h",
            Denomination::H24 => "24h",
            Denomination::D3 => "3d",
            Denomination::D7 => "7d",
            Denomination::D30 => "30d",
        }
    }
}

/// One of the three independent speedup buckets.
///
/// Categories never interact: each owns its own counts and total, and the
/// combined figures are plain sums of the per-category totals.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    Normal,
    Research,
    Training,
}

impl Category {
    /// Number of speedup categories.
    pub const COUNT: usize = 3;

    /// Returns all categories in display order.
    pub const fn all() -> [Category; Self::COUNT] {
        [Category::Normal, Category::Research, Category::Training]
    }

    /// Display label for panel headers and the totals summary.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Normal => "Normal",
            Category::Research => "Research",
            Category::Training => "Training",
        }
    }
}

// ============================================================================
// Gem store
// ============================================================================

/// A gem-store offer: one speedup denomination at a fixed gem price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PurchaseOption {
    pub denomination: Denomination,
    pub gem_cost: u64,
}

impl PurchaseOption {
    /// Minutes granted per purchased unit.
    #[inline]
    pub const fn minutes(&self) -> u64 {
        self.denomination.minutes()
    }
}

/// The gem-store catalog in allocation priority order.
///
/// The allocator saturates each offer before moving to the next, so the 24h
/// offer always consumes the balance first and only the leftover reaches the
/// 15h offer.
pub const GEM_STORE: [PurchaseOption; 2] = [
    PurchaseOption {
        denomination: Denomination::H24,
        gem_cost: 1500,
    },
    PurchaseOption {
        denomination: Denomination::H15,
        gem_cost: 1000,
    },
];

// ============================================================================
// Troop training
// ============================================================================

/// Troop quality tier. Each tier has a fixed per-unit base training time,
/// identical for every troop type within the tier.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tier {
    T1,
    T2,
    T3,
    T4,
}

impl Tier {
    /// Number of troop tiers.
    pub const COUNT: usize = 4;

    /// Returns all tiers in ascending order.
    pub const fn all() -> [Tier; Self::COUNT] {
        [Tier::T1, Tier::T2, Tier::T3, Tier::T4]
    }

    /// Seconds to train one unit of this tier before any speed bonus.
    #[inline]
    pub const fn base_seconds(self) -> u64 {
        match self {
            Tier::T1 => 15,
            Tier::T2 => 30,
            Tier::T3 => 60,
            Tier::T4 => 120,
        }
    }

    /// Display label (`"T1"` .. `"T4"`).
    pub const fn label(self) -> &'static str {
        match self {
            Tier::T1 => "T1",
            Tier::T2 => "T2",
            Tier::T3 => "T3",
            Tier::T4 => "T4",
        }
    }
}

/// Troop class. Training time does not depend on the class, only on the
/// tier, but counts are entered per class.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TroopType {
    Infantry,
    Cavalry,
    Artillery,
    Siege,
}

impl TroopType {
    /// Number of troop types.
    pub const COUNT: usize = 4;

    /// Returns all troop types in display order.
    pub const fn all() -> [TroopType; Self::COUNT] {
        [
            TroopType::Infantry,
            TroopType::Cavalry,
            TroopType::Artillery,
            TroopType::Siege,
        ]
    }

    /// Display label for column headers.
    pub const fn label(self) -> &'static str {
        match self {
            TroopType::Infantry => "Infantry",
            TroopType::Cavalry => "Cavalry",
            TroopType::Artillery => "Artillery",
            TroopType::Siege => "Siege",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denominations_are_ascending_by_duration() {
        let catalog = Denomination::all();
        for pair in catalog.windows(2) {
            assert!(pair[0].minutes() < pair[1].minutes());
        }
    }

    #[test]
    fn denomination_minute_values_match_catalog() {
        assert_eq!(Denomination::M1.minutes(), 1);
        assert_eq!(Denomination::M60.minutes(), 60);
        assert_eq!(Denomination::H8.minutes(), 480);
        assert_eq!(Denomination::H15.minutes(), 900);
        assert_eq!(Denomination::H24.minutes(), 1440);
        assert_eq!(Denomination::D7.minutes(), 10_080);
        assert_eq!(Denomination::D30.minutes(), 43_200);
    }

    #[test]
    fn denomination_ids_are_lowercase() {
        assert_eq!(Denomination::M1.to_string(), "m1");
        assert_eq!(Denomination::H24.to_string(), "h24");
        assert_eq!(Denomination::D30.to_string(), "d30");
        assert_eq!("h24".parse::<Denomination>().unwrap(), Denomination::H24);
    }

    #[test]
    fn denomination_labels_put_duration_first() {
        assert_eq!(Denomination::M1.label(), "1m");
        assert_eq!(Denomination::H24.label(), "24h");
        assert_eq!(Denomination::D30.label(), "30d");
    }

    #[test]
    fn gem_store_prioritizes_the_24h_offer() {
        assert_eq!(GEM_STORE[0].denomination, Denomination::H24);
        assert_eq!(GEM_STORE[0].gem_cost, 1500);
        assert_eq!(GEM_STORE[0].minutes(), 1440);
        assert_eq!(GEM_STORE[1].denomination, Denomination::H15);
        assert_eq!(GEM_STORE[1].gem_cost, 1000);
        assert_eq!(GEM_STORE[1].minutes(), 900);
    }

    #[test]
    fn tier_base_times_double_per_tier_after_t1() {
        assert_eq!(Tier::T1.base_seconds(), 15);
        assert_eq!(Tier::T2.base_seconds(), 30);
        assert_eq!(Tier::T3.base_seconds(), 60);
        assert_eq!(Tier::T4.base_seconds(), 120);
    }

    #[test]
    fn catalog_sizes_are_fixed() {
        assert_eq!(Denomination::all().len(), Denomination::COUNT);
        assert_eq!(Category::all().len(), Category::COUNT);
        assert_eq!(Tier::all().len(), Tier::COUNT);
        assert_eq!(TroopType::all().len(), TroopType::COUNT);
    }
}
