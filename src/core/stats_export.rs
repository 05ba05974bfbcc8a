//! Export computed statistics to CSV

use super::format::format_ratio;
use super::stats::{ComputedYearStats, Overview};
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Trait for writing computed statistics in different formats
pub trait StatsExporter {
    /// Export ranked statistics for an institution
    ///
    /// # Errors
    /// Returns an error if export fails
    fn export(
        &self,
        institution: &str,
        stats: &[ComputedYearStats],
        output_path: &Path,
    ) -> Result<(), Box<dyn Error>>;
}

/// CSV exporter: a summary block followed by one row per academic year.
/// Every ratio is written with one decimal place.
pub struct CsvExporter;

impl StatsExporter for CsvExporter {
    fn export(
        &self,
        institution: &str,
        stats: &[ComputedYearStats],
        output_path: &Path,
    ) -> Result<(), Box<dyn Error>> {
        let mut file = BufWriter::new(File::create(output_path)?);
        write_stats_csv(&mut file, institution, stats)?;
        file.flush()?;
        Ok(())
    }
}

/// Write the CSV body to any writer
///
/// # Errors
/// Returns an error if writing fails
pub fn write_stats_csv<W: Write>(
    out: &mut W,
    institution: &str,
    stats: &[ComputedYearStats],
) -> std::io::Result<()> {
    let overview = Overview::from_stats(stats);

    // Summary block, one item per row
    writeln!(out, "Institution,{}", csv_field(institution))?;
    writeln!(out, "Academic Years,{}", overview.year_count)?;
    writeln!(out, "Latest Year,{}", csv_field(&overview.year))?;
    writeln!(out, "Total Students,{}", overview.students)?;
    writeln!(out, "Faculty,{}", overview.faculty)?;
    writeln!(
        out,
        "PhD Holders,{},{}",
        overview.phd_count,
        format_ratio(overview.phd_percentage)
    )?;
    writeln!(
        out,
        "Students per PhD,{}",
        format_ratio(overview.student_to_phd_ratio)
    )?;

    writeln!(out, "Years")?;
    writeln!(
        out,
        "ID,Year,Students Male,Students Female,Students Total,Faculty Male,Faculty Female,Faculty Total,PhD Count,PhD Percentage,Students per PhD,Students per Faculty"
    )?;

    logger::debug!("Writing {} year rows to CSV", stats.len());
    for s in stats {
        let r = &s.record;
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            csv_field(&r.id),
            csv_field(&r.year),
            r.students.male,
            r.students.female,
            r.students.total,
            r.faculty.male,
            r.faculty.female,
            r.faculty.total,
            r.phd_count,
            format_ratio(s.phd_percentage),
            format_ratio(s.student_to_phd_ratio),
            format_ratio(s.student_to_faculty_ratio)
        )?;
    }

    Ok(())
}

/// Quote a field when it contains a comma, quote, or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Dataset;
    use crate::core::stats::derive;

    fn render(stats: &[ComputedYearStats]) -> String {
        let mut buf = Vec::new();
        write_stats_csv(&mut buf, "Northern College of Nursing", stats).expect("write csv");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn writes_summary_and_rows_in_rank_order() {
        let csv = render(&derive(&Dataset::builtin()));
        assert!(csv.starts_with("Institution,Northern College of Nursing\n"));
        assert!(csv.contains("Latest Year,2024-2025\n"));
        assert!(csv.contains("PhD Holders,54,62.1\n"));

        let rows: Vec<_> = csv
            .lines()
            .skip_while(|l| !l.starts_with("ID,Year"))
            .skip(1)
            .collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], "2024-2025,2024-2025,577,1346,1923,34,53,87,54,62.1,35.6,22.1");
        assert!(rows[3].starts_with("2021-2022,"));
    }

    #[test]
    fn empty_stats_write_zero_summary() {
        let csv = render(&[]);
        assert!(csv.contains("Academic Years,0\n"));
        assert!(csv.contains("Total Students,0\n"));
        assert!(csv.trim_end().ends_with("Students per Faculty"));
    }

    #[test]
    fn quotes_fields_with_commas() {
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("plain"), "plain");
    }

    #[test]
    fn exporter_writes_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("stats.csv");
        CsvExporter
            .export("NCN", &derive(&Dataset::builtin()), &path)
            .expect("export");
        let contents = std::fs::read_to_string(&path).expect("read");
        assert!(contents.contains("Institution,NCN"));
    }
}
