//! Pure calculators for a mobile strategy game's resource bookkeeping.
//!
//! Three independent calculators share one duration formatter:
//!
//! - [`speedups`] — sums speedup-item counts across three categories and
//!   derives the combined totals.
//! - [`gems`] — allocates a gem balance across the gem-store offers with a
//!   fixed-priority greedy walk.
//! - [`training`] — estimates troop training time from per-tier base times
//!   and a percentage speed bonus.
//!
//! Every function here is total: absent, empty, or unparseable input is
//! coerced to zero ([`parse`]) and the single non-finite case (a speed bonus
//! at or below −100%) is carried as [`training::TrainingTime::Unbounded`]
//! rather than raised. Nothing performs I/O or holds state beyond the caller's
//! own mappings.

pub mod catalog;
pub mod format;
pub mod gems;
pub mod parse;
pub mod speedups;
pub mod training;

pub use catalog::{Category, Denomination, GEM_STORE, PurchaseOption, Tier, TroopType};
pub use format::{format_minutes, format_seconds};
pub use gems::{Purchase, PurchasePlan, plan_purchases};
pub use parse::{is_count_input, is_percent_input, parse_count, parse_percent};
pub use speedups::{SpeedupState, TotalsSummary, total_minutes};
pub use training::{TrainingRoster, TrainingTime, base_training_seconds, estimate_training};
