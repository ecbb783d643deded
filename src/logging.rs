//! Log output for the TUI
//!
//! The terminal is owned by the alternate screen while the app runs, so log
//! records are appended to a file instead of stderr.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable overriding the log file location
pub const LOG_FILE_ENV: &str = "INVOICE_LOG_FILE";

const LOG_FILE_NAME: &str = "invoice-tui.log";

/// Log file in the platform data dir
fn default_log_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "invoice", "invoice-tui")
        .map(|dirs| dirs.data_dir().join(LOG_FILE_NAME))
}

fn log_path_with(env_value: Option<PathBuf>, default: Option<PathBuf>) -> Option<PathBuf> {
    env_value
        .filter(|p| !p.as_os_str().is_empty())
        .or(default)
}

/// Open `path` for appending, creating its folder if needed
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))
}

/// Install the global subscriber. Without a writable log file nothing is recorded.
pub fn init() {
    let path = log_path_with(
        std::env::var_os(LOG_FILE_ENV).map(PathBuf::from),
        default_log_path(),
    );
    let file = match path.as_deref().map(open_log_file) {
        Some(Ok(file)) => Some(file),
        Some(Err(err)) => {
            // Still on the normal screen here
            eprintln!("Logging disabled: {err:#}");
            None
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "invoice_tui=info".into()))
        .with(file.map(|file| {
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
        }))
        .init();
}
