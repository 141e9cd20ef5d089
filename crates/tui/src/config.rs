//! Terminal UI configuration.
//!
//! Presentation knobs only; the calculators themselves take no
//! configuration of any kind.

use std::env;
use std::path::PathBuf;

/// Terminal UI configuration read from the environment.
///
/// Environment variables:
/// - `WARCHEST_TICK_MS` - event poll timeout in milliseconds (default: 200)
/// - `WARCHEST_LOG_DIR` - log directory override (default: platform cache dir)
#[derive(Clone, Debug)]
pub struct TuiConfig {
    /// How long the event loop waits for a key before redrawing anyway.
    pub tick_ms: u64,
    /// Overrides the platform cache directory for the diagnostic log.
    pub log_dir: Option<PathBuf>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 200,
            log_dir: None,
        }
    }
}

impl TuiConfig {
    /// Construct configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(tick_ms) = read_env::<u64>("WARCHEST_TICK_MS") {
            config.tick_ms = tick_ms.max(10);
        }
        if let Some(log_dir) = read_env::<PathBuf>("WARCHEST_LOG_DIR") {
            config.log_dir = Some(log_dir);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
