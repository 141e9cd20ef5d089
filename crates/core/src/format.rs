//! Human-readable duration breakdown.
//!
//! Two granularities share the same shape: non-zero components in descending
//! order, space-separated, zero components omitted. The minutes variant
//! bottoms out at `"0m"`, the seconds variant at `"0s"`, and a non-finite
//! seconds input (the training estimator's unbounded sentinel) renders as
//! `"∞"` instead of leaking a float formatting artifact.

const MINUTES_PER_DAY: u64 = 24 * 60;
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;
const SECONDS_PER_HOUR: u64 = 60 * 60;

/// Formats a minute count as `Xd Xh Xm`, omitting zero components.
///
/// Zero minutes yields `"0m"`. Exact day boundaries collapse to the day
/// component alone (`1440 ⇒ "1d"`, `1500 ⇒ "1d 1h"`).
pub fn format_minutes(total_minutes: u64) -> String {
    if total_minutes == 0 {
        return "0m".to_string();
    }

    let days = total_minutes / MINUTES_PER_DAY;
    let rest = total_minutes % MINUTES_PER_DAY;
    let hours = rest / 60;
    let minutes = rest % 60;

    let mut parts = Vec::with_capacity(3);
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    parts.join(" ")
}

/// Formats a (possibly fractional) second count as `Xd Xh Xm Xs`.
///
/// Fractional input is truncated to whole seconds before breakdown. Seconds
/// are always shown when every larger component is zero, so a zero or
/// near-zero duration reads `"0s"`. Non-finite input renders as `"∞"`.
pub fn format_seconds(total_seconds: f64) -> String {
    if !total_seconds.is_finite() {
        return "∞".to_string();
    }
    if total_seconds <= 0.0 {
        return "0s".to_string();
    }

    let mut rest = total_seconds as u64;
    let days = rest / SECONDS_PER_DAY;
    rest %= SECONDS_PER_DAY;
    let hours = rest / SECONDS_PER_HOUR;
    rest %= SECONDS_PER_HOUR;
    let minutes = rest / 60;
    let seconds = rest % 60;

    let mut parts = Vec::with_capacity(4);
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{seconds}s"));
    }
    parts.join(" ")
}
