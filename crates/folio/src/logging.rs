//! File logging. The terminal belongs to the UI, so logs go to a file in
//! the platform data directory.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::{WrapErr, eyre};
use tracing_subscriber::EnvFilter;

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "folio.log";

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level. Returns the log file path.
pub fn init(level: &str) -> color_eyre::Result<PathBuf> {
    let dir = folio_config::data_dir().ok_or_else(|| eyre!("no data directory for logs"))?;
    fs::create_dir_all(&dir).wrap_err_with(|| format!("creating {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("opening {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| eyre!("installing log subscriber: {e}"))?;

    Ok(path)
}
