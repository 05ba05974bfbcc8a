//! Print-friendly report generation
//!
//! Reports come in two scopes: the overview (summary cards plus per-year
//! trend and gender tables) and a single academic year. Both are rendered
//! from embedded templates in Markdown or self-contained HTML.

pub mod formats;

use crate::core::error::ReportError;
use crate::core::format::{format_count, format_percent, format_ratio};
use crate::core::locale::{Labels, Locale};
use crate::core::stats::{self, ComputedYearStats, Overview};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub use formats::{reporter_for, HtmlReporter, MarkdownReporter, ReportFormat};

/// What a report covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportScope {
    /// All years: summary cards and trend tables
    Overview,
    /// One academic year, selected by record id
    Year(String),
}

impl ReportScope {
    /// File name stem for this scope, e.g. `ncn_stats_2024-2025`
    #[must_use]
    pub fn file_stem(&self) -> String {
        match self {
            Self::Overview => "ncn_stats_overview".to_string(),
            Self::Year(id) => {
                let safe: String = id
                    .chars()
                    .map(|c| {
                        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                            c
                        } else {
                            '_'
                        }
                    })
                    .collect();
                format!("ncn_stats_{safe}")
            }
        }
    }
}

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Institution name printed in headers and footers
    pub institution: &'a str,
    /// Ranked statistics (latest year first)
    pub stats: &'a [ComputedYearStats],
    /// Language of the report
    pub locale: Locale,
    /// Date printed in the footer
    pub printed_on: NaiveDate,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        institution: &'a str,
        stats: &'a [ComputedYearStats],
        locale: Locale,
        printed_on: NaiveDate,
    ) -> Self {
        Self {
            institution,
            stats,
            locale,
            printed_on,
        }
    }

    /// Labels for the report locale
    #[must_use]
    pub const fn labels(&self) -> &'static Labels {
        self.locale.labels()
    }

    /// Summary cards for the overview
    #[must_use]
    pub fn overview(&self) -> Overview {
        Overview::from_stats(self.stats)
    }

    /// Look up a year by id
    ///
    /// # Errors
    /// Returns [`ReportError::UnknownYear`] if no year has that id
    pub fn year(&self, id: &str) -> Result<&'a ComputedYearStats, ReportError> {
        stats::find_by_id(self.stats, id).ok_or_else(|| ReportError::UnknownYear(id.to_string()))
    }

    /// Years oldest first
    pub fn chronological(&self) -> impl Iterator<Item = &'a ComputedYearStats> {
        stats::chronological(self.stats)
    }

    /// Footer date in ISO form
    #[must_use]
    pub fn print_date(&self) -> String {
        self.printed_on.format("%Y-%m-%d").to_string()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Format this generator produces
    fn format(&self) -> ReportFormat;

    /// Render report content as a string
    ///
    /// # Errors
    /// Returns an error if the scope names an unknown year
    fn render(&self, ctx: &ReportContext, scope: &ReportScope) -> Result<String, ReportError>;

    /// Render and write a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn generate(
        &self,
        ctx: &ReportContext,
        scope: &ReportScope,
        output_path: &Path,
    ) -> Result<(), ReportError> {
        let content = self.render(ctx, scope)?;
        fs::write(output_path, content).map_err(|source| ReportError::Write {
            path: output_path.to_path_buf(),
            source,
        })?;
        logger::info!("Report written to {}", output_path.display());
        Ok(())
    }
}

/// Template placeholder values taken from the locale labels
pub(crate) fn label_values(labels: &Labels) -> Vec<(&'static str, &'static str)> {
    vec![
        ("dashboard_title", labels.dashboard_title),
        ("dashboard_subtitle", labels.dashboard_subtitle),
        ("total_students", labels.total_students),
        ("faculty_body", labels.faculty_body),
        ("phd_holders", labels.phd_holders),
        ("students_per_phd", labels.students_per_phd),
        ("share", labels.share),
        ("growth_heading", labels.growth_heading),
        ("gender_heading", labels.gender_heading),
        ("academic_year", labels.academic_year),
        ("students", labels.students),
        ("teachers", labels.teachers),
        ("male", labels.male),
        ("female", labels.female),
        ("total", labels.total),
        ("year_report_title", labels.year_report_title),
        ("issuing_unit", labels.issuing_unit),
        ("faculty_members", labels.faculty_members),
        ("phd", labels.phd),
        ("phd_share", labels.phd_share),
        ("student_per_faculty", labels.student_per_faculty),
        ("student_per_doctor", labels.student_per_doctor),
        ("student_distribution", labels.student_distribution),
        ("printed_on", labels.printed_on),
        ("system_name", labels.system_name),
    ]
}

/// Placeholder values shared by every report scope
pub(crate) fn common_values(ctx: &ReportContext) -> Vec<(&'static str, String)> {
    vec![
        ("institution", ctx.institution.to_string()),
        ("print_date", ctx.print_date()),
        ("lang", ctx.locale.tag().to_string()),
        ("dir", ctx.locale.direction().to_string()),
    ]
}

/// Summary card values for the overview scope
pub(crate) fn overview_values(ctx: &ReportContext) -> Vec<(&'static str, String)> {
    let overview = ctx.overview();
    let latest_year = if overview.is_empty() {
        ctx.labels().no_data.to_string()
    } else {
        overview.year.clone()
    };
    vec![
        ("latest_year", latest_year),
        ("latest_students", format_count(overview.students)),
        ("latest_faculty", format_count(overview.faculty)),
        ("latest_phd", format_count(overview.phd_count)),
        ("latest_phd_percentage", format_percent(overview.phd_percentage)),
        (
            "latest_students_per_phd",
            format_ratio(overview.student_to_phd_ratio),
        ),
    ]
}

/// Detail values for a single-year scope
pub(crate) fn year_values(year: &ComputedYearStats) -> Vec<(&'static str, String)> {
    let r = &year.record;
    vec![
        ("year", r.year.clone()),
        ("students_total", format_count(r.students.total)),
        ("students_male", format_count(r.students.male)),
        ("students_female", format_count(r.students.female)),
        ("faculty_total", format_count(r.faculty.total)),
        ("phd_count", format_count(r.phd_count)),
        ("phd_percentage", format_percent(year.phd_percentage)),
        ("student_to_faculty", format_ratio(year.student_to_faculty_ratio)),
        ("student_to_phd", format_ratio(year.student_to_phd_ratio)),
        ("male_share", format_percent(r.students.male_share())),
        ("female_share", format_percent(r.students.female_share())),
    ]
}

/// Placeholder values for one render, keyed by name
pub(crate) type Values = HashMap<&'static str, String>;

/// Add `items` to `values`, passing each value through `escape`
pub(crate) fn insert_escaped<V: AsRef<str>>(
    values: &mut Values,
    items: impl IntoIterator<Item = (&'static str, V)>,
    escape: fn(&str) -> String,
) {
    values.extend(items.into_iter().map(|(key, value)| (key, escape(value.as_ref()))));
}

/// Replace each `{{key}}` in `template` with its value in one pass.
///
/// Inserted text is never scanned again, so braces inside data stay literal.
/// Unknown keys are left as written.
pub(crate) fn fill(template: &str, values: &Values) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match values.get(key) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}
