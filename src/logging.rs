//! Tracing setup.
//!
//! The terminal UI owns stdout, so in TUI mode events go to a log file under the data
//! directory. CLI commands log to stderr. `RUST_LOG` overrides the configured level.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Stderr,
}

/// `<data_dir>/sampledeck/sampledeck.log`
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("sampledeck").join("sampledeck.log"))
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init(level: &str, target: LogTarget) -> Result<()> {
    let filter = env_filter(level);

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .without_time()
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))
                .context("Failed to install stderr logger")?;
        }
        LogTarget::File => {
            let Some(path) = log_file_path() else {
                // No data directory on this platform: run without a log file
                return Ok(());
            };
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context("Failed to create log directory")?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))
                .context("Failed to install file logger")?;
        }
    }

    Ok(())
}
