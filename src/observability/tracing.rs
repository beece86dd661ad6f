//! `tracing` subscriber setup.
//!
//! While the TUI owns the terminal, log lines must not reach stderr. They go
//! to the configured log file instead, or are dropped.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{FitError, Result};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "CANDIDATE_FIT_LOG";

static TUI_ACTIVE: AtomicBool = AtomicBool::new(false);

pub fn set_tui_active(active: bool) {
    TUI_ACTIVE.store(active, Ordering::SeqCst);
}

pub fn is_tui_active() -> bool {
    TUI_ACTIVE.load(Ordering::SeqCst)
}

/// Level for `-v` repetitions on top of the configured level. `-v` only
/// ever makes logging more verbose.
pub fn level_for_verbosity(configured: &str, verbosity: u8) -> String {
    let requested = match verbosity {
        0 => return configured.to_string(),
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    match configured.trim().parse::<LevelFilter>() {
        Ok(level) => level.max(requested).to_string().to_lowercase(),
        // Per-target directives stay, with the default level raised
        Err(_) => format!("{configured},{}", requested.to_string().to_lowercase()),
    }
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level))
}

/// Subscriber for the window before the config, and with it the log
/// settings, has been read. Warnings go to stderr.
pub fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter("warn"))
        .with_writer(std::io::stderr)
        .finish()
}

/// Install the global subscriber. `interactive` routes output away from the
/// terminal. Calling twice is harmless; the second call is ignored.
pub fn init_tracing(config: &LoggingConfig, verbosity: u8, interactive: bool) -> Result<()> {
    let level = level_for_verbosity(&config.level, verbosity);
    let filter = build_filter(&level);
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match (&config.file, interactive) {
        (Some(path), _) => {
            let file = open_log_file(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (None, true) => builder.with_writer(std::io::sink).try_init(),
        (None, false) => builder.with_writer(std::io::stderr).try_init(),
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FitError::from_io_error(e, Some(path.to_path_buf())))
}
