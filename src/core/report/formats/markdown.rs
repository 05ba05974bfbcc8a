//! Markdown report generator
//!
//! Renders the same content as the HTML reports as plain Markdown tables,
//! which read well in GitHub, GitLab, and VS Code.

use crate::core::error::ReportError;
use crate::core::format::format_count;
use crate::core::report::{
    common_values, fill, insert_escaped, label_values, overview_values, year_values,
    ReportContext, ReportFormat, ReportGenerator, ReportScope, Values,
};
use std::fmt::Write;

const OVERVIEW_TEMPLATE: &str = include_str!("../templates/overview.md");
const YEAR_TEMPLATE: &str = include_str!("../templates/year.md");

/// Escape characters that would break a table cell
fn md_escape(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render_overview(ctx: &ReportContext) -> String {
        let mut values = Values::new();
        insert_escaped(&mut values, label_values(ctx.labels()), md_escape);
        insert_escaped(&mut values, overview_values(ctx), md_escape);
        insert_escaped(&mut values, common_values(ctx), md_escape);
        values.insert("growth_rows", Self::growth_table(ctx));
        values.insert("gender_rows", Self::gender_table(ctx));
        fill(OVERVIEW_TEMPLATE, &values)
    }

    fn render_year(ctx: &ReportContext, id: &str) -> Result<String, ReportError> {
        let year = ctx.year(id)?;
        let mut values = Values::new();
        insert_escaped(&mut values, label_values(ctx.labels()), md_escape);
        insert_escaped(&mut values, year_values(year), md_escape);
        insert_escaped(&mut values, common_values(ctx), md_escape);
        Ok(fill(YEAR_TEMPLATE, &values))
    }

    fn growth_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        for s in ctx.chronological() {
            let _ = writeln!(
                table,
                "| {} | {} | {} |",
                md_escape(s.year()),
                format_count(s.record.students.total),
                format_count(s.record.faculty.total)
            );
        }
        table
    }

    fn gender_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        for s in ctx.chronological() {
            let students = &s.record.students;
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} |",
                md_escape(s.year()),
                format_count(students.male),
                format_count(students.female),
                format_count(students.total)
            );
        }
        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }

    fn render(&self, ctx: &ReportContext, scope: &ReportScope) -> Result<String, ReportError> {
        match scope {
            ReportScope::Overview => Ok(Self::render_overview(ctx)),
            ReportScope::Year(id) => Self::render_year(ctx, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::Locale;
    use crate::core::models::Dataset;
    use crate::core::stats::derive;
    use chrono::NaiveDate;

    #[test]
    fn overview_tables_list_every_year() {
        let stats = derive(&Dataset::builtin());
        let date = NaiveDate::from_ymd_opt(2025, 6, 30).expect("date");
        let ctx = ReportContext::new("NCN", &stats, Locale::En, date);
        let md = MarkdownReporter::new()
            .render(&ctx, &ReportScope::Overview)
            .expect("render");

        assert!(md.starts_with("# Main Dashboard"));
        assert!(md.contains("| 2021-2022 | 869 | 65 |"));
        assert!(md.contains("| 2024-2025 | 577 | 1,346 | 1,923 |"));
        assert!(md.contains("| 1,923 | 87 | 54 (Share: 62.1%) | 35.6 |"));
        assert!(!md.contains("{{"));
    }

    #[test]
    fn year_report_lists_ratios() {
        let stats = derive(&Dataset::builtin());
        let date = NaiveDate::from_ymd_opt(2025, 6, 30).expect("date");
        let ctx = ReportContext::new("NCN", &stats, Locale::En, date);
        let md = MarkdownReporter::new()
            .render(&ctx, &ReportScope::Year("2024-2025".to_string()))
            .expect("render");

        assert!(md.starts_with("# Academic Year Report 2024-2025"));
        assert!(md.contains("| 87 | 54 | 62.1% |"));
        assert!(md.contains("| 22.1 | 35.6 | 30.0% | 70.0% |"));
        assert!(md.contains("Printed on: 2025-06-30"));
    }

    #[test]
    fn institution_placeholder_text_stays_literal() {
        let stats = derive(&Dataset::builtin());
        let date = NaiveDate::from_ymd_opt(2025, 6, 30).expect("date");
        let ctx = ReportContext::new("{{gender_rows}}", &stats, Locale::En, date);
        let md = MarkdownReporter::new()
            .render(&ctx, &ReportScope::Overview)
            .expect("render");

        assert!(md.contains("**{{gender_rows}}**"));
        assert_eq!(md.matches("| 2021-2022 | 288 |").count(), 1);
    }

    #[test]
    fn escapes_pipes() {
        assert_eq!(md_escape("a|b"), "a\\|b");
    }
}
