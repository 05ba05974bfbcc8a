//! Report command handler
//!
//! Renders the overview report, a single year's report, or both for every
//! year, in Markdown or print-ready HTML.

use chrono::Utc;
use logger::{error, info};
use ncn_stats::config::Config;
use ncn_stats::core::report::{reporter_for, ReportContext, ReportFormat, ReportScope};
use ncn_stats::core::{stats, Dataset};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// What the operator asked to render
#[derive(Debug, Clone, Copy)]
pub enum Selection<'a> {
    /// Overview report only
    Overview,
    /// One year by id
    Year(&'a str),
    /// Overview plus every year
    All,
}

/// Run the report command.
///
/// # Errors
/// Returns a message when the format is unknown, the year does not exist, or
/// a report file cannot be written.
pub fn run(
    dataset: &Dataset,
    selection: Selection<'_>,
    format_str: &str,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let format =
        ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    let ranked = stats::derive(dataset);
    let ctx = ReportContext::new(
        &config.report.institution,
        &ranked,
        config.locale(),
        Utc::now().date_naive(),
    );

    let scopes = match selection {
        Selection::Overview => vec![ReportScope::Overview],
        Selection::Year(id) => {
            ctx.year(id).map_err(|e| format!("✗ {e}"))?;
            vec![ReportScope::Year(id.to_string())]
        }
        Selection::All => std::iter::once(ReportScope::Overview)
            .chain(ranked.iter().map(|s| ReportScope::Year(s.id().to_string())))
            .collect(),
    };

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    let single_output = output.filter(|_| scopes.len() == 1);
    if single_output.is_none() {
        fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;
    }

    let reporter = reporter_for(format);
    for scope in &scopes {
        let path = single_output.map_or_else(
            || output_path(&reports_dir, scope, format),
            Path::to_path_buf,
        );
        reporter.generate(&ctx, scope, &path).map_err(|e| {
            error!("Report generation failed for {}: {e}", path.display());
            format!("✗ Failed to generate {format} report: {e}")
        })?;
        println!("✓ Report generated: {}", path.display());
    }

    info!("{} {format} report(s) generated", scopes.len());
    Ok(())
}

/// `<reports_dir>/<scope stem>.<ext>`
fn output_path(reports_dir: &Path, scope: &ReportScope, format: ReportFormat) -> PathBuf {
    reports_dir.join(format!("{}.{}", scope.file_stem(), format.extension()))
}
