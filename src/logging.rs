//! Process-wide tracing setup.

use std::fs;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::achievements::default_data_dir;

/// Environment variable controlling the log filter (e.g. `debug`).
pub const LOG_ENV: &str = "GARDEN_LOG";

const LOG_FILE: &str = "garden.log";

/// Install the global tracing subscriber.
///
/// Interactive runs log to `garden.log` under the data directory so the
/// alternate screen stays clean; everything else logs to stderr. Filter
/// defaults to `info` unless `GARDEN_LOG` says otherwise.
pub fn init(interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    if interactive {
        if let Some(dir) = default_data_dir() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            let path = dir.join(LOG_FILE);
            let file = fs::File::options()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
            return Ok(());
        }
        // No data directory: fall through to stderr
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
