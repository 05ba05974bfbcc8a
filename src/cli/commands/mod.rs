//! CLI command handlers for `ncnstats`.
//!
//! Each command is implemented in its own submodule. Handlers return
//! `Err` with a ready-to-print message; `main` prints it and exits non-zero.

pub mod config;
pub mod export;
pub mod import;
pub mod report;
pub mod stats;

use logger::{error, info};
use ncn_stats::config::Config;
use ncn_stats::core::DatasetStore;

/// Build the session store: the configured data file if any, otherwise the
/// built-in dataset.
///
/// # Errors
/// Returns the localized import notice when the data file is rejected, so no
/// command runs on a dataset the operator did not ask for.
pub fn open_store(config: &Config) -> Result<DatasetStore, String> {
    let mut store = DatasetStore::new();
    if let Some(path) = config.data_file() {
        store.import_file(&path).map_err(|e| {
            error!("Startup import of {} failed: {e}", path.display());
            format!("✗ {}: {e}", e.notice(config.locale()))
        })?;
        info!("Using dataset from {}", path.display());
    }
    Ok(store)
}
