//! Lenient numeric parsing and keystroke filtering for the input fields.
//!
//! Parsing never fails: empty or malformed text coerces to zero so every
//! calculator input is defined. The filter functions gate what a text field
//! may contain in the first place, so in practice the parsers only ever see
//! digit strings (or digits with one decimal point for the speed bonus).

/// Parses a troop/item count leniently. Empty or unparseable input is zero.
pub fn parse_count(raw: &str) -> u64 {
    raw.parse().unwrap_or(0)
}

/// Parses a percentage leniently. Empty, unparseable, or non-finite input
/// is zero.
pub fn parse_percent(raw: &str) -> f64 {
    raw.parse().ok().filter(|v: &f64| v.is_finite()).unwrap_or(0.0)
}

/// True if `buffer` is a valid count-field content: zero or more ASCII
/// digits, nothing else. The empty buffer is valid (it reads as zero).
pub fn is_count_input(buffer: &str) -> bool {
    buffer.chars().all(|ch| ch.is_ascii_digit())
}

/// True if `buffer` is a valid percent-field content: ASCII digits with at
/// most one decimal point. Empty, `"5."`, and `".5"` are all accepted;
/// they parse leniently downstream.
pub fn is_percent_input(buffer: &str) -> bool {
    let mut seen_point = false;
    buffer.chars().all(|ch| {
        if ch == '.' {
            !std::mem::replace(&mut seen_point, true)
        } else {
            ch.is_ascii_digit()
        }
    })
}
