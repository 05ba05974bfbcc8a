//! HTML report generator
//!
//! Generates self-contained HTML with an embedded stylesheet that keeps
//! cards and tables intact when printed.

use crate::core::error::ReportError;
use crate::core::format::format_count;
use crate::core::report::{
    common_values, fill, insert_escaped, label_values, overview_values, year_values,
    ReportContext, ReportFormat, ReportGenerator, ReportScope, Values,
};
use std::fmt::Write;

const OVERVIEW_TEMPLATE: &str = include_str!("../templates/overview.html");
const YEAR_TEMPLATE: &str = include_str!("../templates/year.html");
const STYLE: &str = include_str!("../templates/style.css");

/// Escape a string for safe HTML insertion
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render_overview(ctx: &ReportContext) -> String {
        let mut values = Values::new();
        insert_escaped(&mut values, label_values(ctx.labels()), html_escape);
        insert_escaped(&mut values, overview_values(ctx), html_escape);
        insert_escaped(&mut values, common_values(ctx), html_escape);
        values.insert("growth_rows", Self::growth_rows(ctx));
        values.insert("gender_rows", Self::gender_rows(ctx));
        values.insert("style", STYLE.to_string());
        fill(OVERVIEW_TEMPLATE, &values)
    }

    fn render_year(ctx: &ReportContext, id: &str) -> Result<String, ReportError> {
        let year = ctx.year(id)?;
        let mut values = Values::new();
        insert_escaped(&mut values, label_values(ctx.labels()), html_escape);
        insert_escaped(&mut values, year_values(year), html_escape);
        insert_escaped(&mut values, common_values(ctx), html_escape);
        values.insert("style", STYLE.to_string());
        Ok(fill(YEAR_TEMPLATE, &values))
    }

    /// Students and faculty per year, oldest first
    fn growth_rows(ctx: &ReportContext) -> String {
        let mut html = String::new();
        for s in ctx.chronological() {
            let _ = writeln!(
                html,
                "    <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                html_escape(s.year()),
                format_count(s.record.students.total),
                format_count(s.record.faculty.total)
            );
        }
        html
    }

    /// Student gender split per year, oldest first
    fn gender_rows(ctx: &ReportContext) -> String {
        let mut html = String::new();
        for s in ctx.chronological() {
            let students = &s.record.students;
            let _ = writeln!(
                html,
                "    <tr><td>{}</td><td class=\"male\">{}</td><td class=\"female\">{}</td><td>{}</td></tr>",
                html_escape(s.year()),
                format_count(students.male),
                format_count(students.female),
                format_count(students.total)
            );
        }
        html
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }

    fn render(&self, ctx: &ReportContext, scope: &ReportScope) -> Result<String, ReportError> {
        match scope {
            ReportScope::Overview => Ok(Self::render_overview(ctx)),
            ReportScope::Year(id) => Self::render_year(ctx, id),
        }
    }
}
