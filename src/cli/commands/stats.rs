//! Stats command handler
//!
//! Prints the dashboard summary cards followed by the ranked per-year table,
//! or the detail view of a single year.

use logger::{error, info, verbose};
use ncn_stats::config::Config;
use ncn_stats::core::format::{format_count, format_percent, format_ratio};
use ncn_stats::core::locale::Labels;
use ncn_stats::core::stats::{self, ComputedYearStats, Overview};
use ncn_stats::core::stats_export::{CsvExporter, StatsExporter};
use ncn_stats::core::Dataset;
use std::path::Path;

/// Run the stats command.
///
/// # Errors
/// Returns a message when the requested year does not exist or an output
/// cannot be produced.
pub fn run(
    dataset: &Dataset,
    year: Option<&str>,
    csv: Option<&Path>,
    json: bool,
    config: &Config,
) -> Result<(), String> {
    let ranked = stats::derive(dataset);
    let labels = config.locale().labels();

    let selected = year
        .map(|id| {
            stats::find_by_id(&ranked, id)
                .ok_or_else(|| format!("✗ No academic year with id '{id}'"))
        })
        .transpose()?;

    if json {
        let text = match selected {
            Some(one) => serde_json::to_string_pretty(one),
            None => serde_json::to_string_pretty(&ranked),
        }
        .map_err(|e| format!("✗ Failed to serialize statistics: {e}"))?;
        println!("{text}");
    } else if let Some(one) = selected {
        print_year(one, labels);
    } else {
        print_overview(&ranked, labels);
    }

    if let Some(path) = csv {
        CsvExporter
            .export(&config.report.institution, &ranked, path)
            .map_err(|e| {
                error!("CSV export to {} failed: {e}", path.display());
                format!("✗ Failed to write {}: {e}", path.display())
            })?;
        info!("Statistics exported to: {}", path.display());
        if !json {
            println!("✓ Statistics exported to: {}", path.display());
        }
    }

    Ok(())
}

/// Summary cards plus the ranked table
pub fn print_overview(ranked: &[ComputedYearStats], labels: &Labels) {
    let overview = Overview::from_stats(ranked);

    println!("\n=== {} ===", labels.dashboard_title);
    if overview.is_empty() {
        println!("{}", labels.no_data);
        return;
    }
    println!("{} ({})\n", labels.dashboard_subtitle, overview.year);
    println!("{:<24} {}", labels.total_students, format_count(overview.students));
    println!("{:<24} {}", labels.faculty_body, format_count(overview.faculty));
    println!(
        "{:<24} {} ({} {})",
        labels.phd_holders,
        format_count(overview.phd_count),
        format_percent(overview.phd_percentage),
        labels.share
    );
    println!(
        "{:<24} {}",
        labels.students_per_phd,
        format_ratio(overview.student_to_phd_ratio)
    );

    println!(
        "\n{:<12} {:>9} {:>8} {:>8} {:>8} {:>6} {:>8}",
        labels.academic_year,
        labels.students,
        labels.male,
        labels.female,
        labels.teachers,
        labels.phd,
        labels.phd_share
    );
    for s in ranked {
        let r = &s.record;
        println!(
            "{:<12} {:>9} {:>8} {:>8} {:>8} {:>6} {:>8}",
            r.year,
            format_count(r.students.total),
            format_count(r.students.male),
            format_count(r.students.female),
            format_count(r.faculty.total),
            format_count(r.phd_count),
            format_percent(s.phd_percentage)
        );
        verbose!(
            "{}: {} students per faculty member, {} per PhD holder",
            r.id,
            format_ratio(s.student_to_faculty_ratio),
            format_ratio(s.student_to_phd_ratio)
        );
    }
}

/// Detail view of one academic year
pub fn print_year(year: &ComputedYearStats, labels: &Labels) {
    let r = &year.record;
    println!("\n=== {} {} ===\n", labels.year_report_title, r.year);
    println!(
        "{:<24} {} ({} {}, {} {})",
        labels.students,
        format_count(r.students.total),
        format_count(r.students.male),
        labels.male,
        format_count(r.students.female),
        labels.female
    );
    println!(
        "{:<24} {} ({} {}, {} {})",
        labels.faculty_members,
        format_count(r.faculty.total),
        format_count(r.faculty.male),
        labels.male,
        format_count(r.faculty.female),
        labels.female
    );
    println!("{:<24} {}", labels.phd, format_count(r.phd_count));
    println!("{:<24} {}", labels.phd_share, format_percent(year.phd_percentage));
    println!(
        "{:<24} {}",
        labels.student_per_faculty,
        format_ratio(year.student_to_faculty_ratio)
    );
    println!(
        "{:<24} {}",
        labels.student_per_doctor,
        format_ratio(year.student_to_phd_ratio)
    );
}
