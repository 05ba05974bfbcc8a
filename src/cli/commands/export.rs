//! Export command handler

use chrono::Utc;
use logger::{error, info};
use ncn_stats::config::Config;
use ncn_stats::core::DatasetStore;
use std::path::{Path, PathBuf};

/// Write the current dataset as pretty-printed JSON.
///
/// Without `output`, the file goes to `<exports_dir>/ncn_stats_<today>.json`
/// (UTC date).
///
/// # Errors
/// Returns a message when the file or its directory cannot be written.
pub fn run(store: &DatasetStore, output: Option<&Path>, config: &Config) -> Result<(), String> {
    let written: PathBuf = match output {
        Some(path) => {
            store.export_to(path).map_err(|e| fail(&e))?;
            path.to_path_buf()
        }
        None => {
            let dir = PathBuf::from(&config.paths.exports_dir);
            store
                .export_to_dir(&dir, Utc::now().date_naive())
                .map_err(|e| fail(&e))?
        }
    };

    info!("Dataset exported to: {}", written.display());
    println!(
        "✓ Exported {} records to: {}",
        store.dataset().len(),
        written.display()
    );
    Ok(())
}

fn fail(err: &dyn std::error::Error) -> String {
    error!("Export failed: {err}");
    format!("✗ Export failed: {err}")
}
