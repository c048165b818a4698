//! Tracing subscriber setup.
//!
//! The interactive wizard owns the terminal, so its logs go to a file in the
//! config directory. Non-interactive commands log to stderr.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::constants::LOG_FILE_NAME;

/// `RUST_LOG` wins; otherwise `default` (or `debug` when verbose).
fn env_filter(verbose: bool, default: &str) -> EnvFilter {
    let filter = if verbose { "debug" } else { default };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into())
}

/// Logs to `{config_dir}/vanpick.log`. Returns the log file path.
pub fn init_file_logging(verbose: bool) -> Result<PathBuf> {
    let log_dir = Config::config_dir()?;
    fs::create_dir_all(&log_dir).context(format!(
        "Failed to create log directory: {}",
        log_dir.display()
    ))?;

    let log_path = log_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context(format!("Failed to open log file: {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(verbose, "info"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(log_path)
}

/// Logs warnings (or everything at debug when verbose) to stderr.
pub fn init_stderr_logging(verbose: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(verbose, "warn"))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
