//! Terminal calculator suite entry point.
mod app;
mod config;
mod input;
mod presentation;
mod state;

use anyhow::Result;
use config::TuiConfig;
use presentation::terminal::TerminalSession;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = TuiConfig::from_env();

    setup_logging(&config)?;

    // The session restores the terminal on drop, panics included.
    let mut session = TerminalSession::new()?;
    app::run(session.terminal_mut(), &config)
}

/// Setup logging to a file; stdout and stderr stay clean while the TUI owns
/// the terminal.
fn setup_logging(config: &TuiConfig) -> Result<()> {
    let log_dir = config
        .log_dir
        .clone()
        .unwrap_or_else(default_log_directory);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "warchest.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep the file writer alive for the whole process.
    std::mem::forget(guard);

    tracing::info!("logging initialized: {}/warchest.log", log_dir.display());

    Ok(())
}

/// Get the platform-specific log directory.
fn default_log_directory() -> std::path::PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut path = std::path::PathBuf::from(home);
            path.push("Library");
            path.push("Caches");
            path.push("warchest");
            path.push("logs");
            return path;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
            let mut path = std::path::PathBuf::from(xdg_cache);
            path.push("warchest");
            path.push("logs");
            return path;
        } else if let Some(home) = std::env::var_os("HOME") {
            let mut path = std::path::PathBuf::from(home);
            path.push(".cache");
            path.push("warchest");
            path.push("logs");
            return path;
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local_appdata) = std::env::var_os("LOCALAPPDATA") {
            let mut path = std::path::PathBuf::from(local_appdata);
            path.push("warchest");
            path.push("logs");
            return path;
        }
    }

    // Fallback
    std::path::PathBuf::from("/tmp/warchest/logs")
}
