//! Import command handler

use super::stats::print_overview;
use logger::error;
use ncn_stats::config::Config;
use ncn_stats::core::{stats, DatasetStore};
use std::fs;
use std::path::Path;

/// Validate and import `file`, then show the resulting overview.
///
/// With `save`, the file is recorded as `paths.data_file` so later runs
/// start from it. Only that key is written; overrides given for this run
/// stay out of the config file.
///
/// # Errors
/// Returns the localized notice plus the cause when the file is rejected, or
/// a message when the config cannot be saved.
pub fn run(
    store: &mut DatasetStore,
    file: &Path,
    save: bool,
    config: &Config,
) -> Result<(), String> {
    let labels = config.locale().labels();

    let dataset = store.import_file(file).map_err(|e| {
        error!("Import of {} failed: {e}", file.display());
        format!("✗ {}: {e}", e.notice(config.locale()))
    })?;
    println!("✓ {} ({} records)", labels.import_success, dataset.len());

    if save {
        let absolute = fs::canonicalize(file).unwrap_or_else(|_| file.to_path_buf());
        let mut stored = Config::load();
        stored.paths.data_file = absolute.to_string_lossy().to_string();
        stored
            .save()
            .map_err(|e| format!("✗ Failed to save config: {e}"))?;
        println!("✓ Set data_file = {}", stored.paths.data_file);
    }

    print_overview(&stats::derive(store.dataset()), labels);
    Ok(())
}
