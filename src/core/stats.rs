//! Derived statistics: per-year ratios, ranking, and the dashboard summary.

use crate::core::models::{AcademicYearRecord, Dataset};
use serde::Serialize;

/// A record plus its derived ratios. Recomputed on every derivation and
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedYearStats {
    /// The source record
    #[serde(flatten)]
    pub record: AcademicYearRecord,
    /// `phd_count / faculty.total * 100`, 0 when there is no faculty
    pub phd_percentage: f64,
    /// `students.total / phd_count`, 0 when there are no PhD holders
    pub student_to_phd_ratio: f64,
    /// `students.total / faculty.total`, 0 when there is no faculty
    pub student_to_faculty_ratio: f64,
}

impl ComputedYearStats {
    /// Compute the derived ratios for one record
    #[must_use]
    pub fn from_record(record: AcademicYearRecord) -> Self {
        let phd_percentage = guarded_ratio(record.phd_count, record.faculty.total) * 100.0;
        let student_to_phd_ratio = guarded_ratio(record.students.total, record.phd_count);
        let student_to_faculty_ratio = guarded_ratio(record.students.total, record.faculty.total);
        Self {
            record,
            phd_percentage,
            student_to_phd_ratio,
            student_to_faculty_ratio,
        }
    }

    /// Record id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// Academic year label
    #[must_use]
    pub fn year(&self) -> &str {
        &self.record.year
    }
}

/// `numerator / denominator`, or 0 when the denominator is 0
fn guarded_ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator > 0 {
        f64::from(numerator) / f64::from(denominator)
    } else {
        0.0
    }
}

/// Compute every record's ratios and rank the result by `year`, descending.
///
/// Years compare as plain strings, which matches chronology only for
/// fixed-width labels such as `2024-2025`. Records sharing a `year` keep
/// their dataset order, though callers should not rely on it.
#[must_use]
pub fn derive(dataset: &Dataset) -> Vec<ComputedYearStats> {
    let mut stats: Vec<_> = dataset
        .iter()
        .cloned()
        .map(ComputedYearStats::from_record)
        .collect();
    stats.sort_by(|a, b| b.record.year.cmp(&a.record.year));
    logger::debug!("Derived statistics for {} academic years", stats.len());
    stats
}

/// The highest-ranked year, which every summary figure is taken from
#[must_use]
pub fn latest(ordered: &[ComputedYearStats]) -> Option<&ComputedYearStats> {
    ordered.first()
}

/// Linear lookup by record id
#[must_use]
pub fn find_by_id<'a>(ordered: &'a [ComputedYearStats], id: &str) -> Option<&'a ComputedYearStats> {
    ordered.iter().find(|s| s.record.id == id)
}

/// Oldest-first view of a ranked sequence, the order trend charts plot in
pub fn chronological(ordered: &[ComputedYearStats]) -> impl Iterator<Item = &ComputedYearStats> {
    ordered.iter().rev()
}

/// The dashboard's summary cards, all sourced from the latest year
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    /// Year label of the latest record (empty when there is none)
    pub year: String,
    /// Number of academic years in the dataset
    pub year_count: usize,
    /// Total students in the latest year
    pub students: u32,
    /// Total faculty in the latest year
    pub faculty: u32,
    /// PhD holders in the latest year
    pub phd_count: u32,
    /// PhD share of faculty in the latest year
    pub phd_percentage: f64,
    /// Students per PhD holder in the latest year
    pub student_to_phd_ratio: f64,
}

impl Overview {
    /// Build the summary from a ranked sequence
    #[must_use]
    pub fn from_stats(ordered: &[ComputedYearStats]) -> Self {
        latest(ordered).map_or_else(Self::default, |top| Self {
            year: top.record.year.clone(),
            year_count: ordered.len(),
            students: top.record.students.total,
            faculty: top.record.faculty.total,
            phd_count: top.record.phd_count,
            phd_percentage: top.phd_percentage,
            student_to_phd_ratio: top.student_to_phd_ratio,
        })
    }

    /// Whether there was any year to summarize
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.year_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::GenderBreakdown;

    fn record(id: &str, year: &str, students: u32, faculty: u32, phd: u32) -> AcademicYearRecord {
        AcademicYearRecord::new(
            id,
            year,
            GenderBreakdown::new(0, students, students),
            GenderBreakdown::new(0, faculty, faculty),
            phd,
        )
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn computes_ratios() {
        let s = ComputedYearStats::from_record(record("x", "2030-2031", 2, 1, 1));
        assert!(close(s.phd_percentage, 100.0));
        assert!(close(s.student_to_phd_ratio, 2.0));
        assert!(close(s.student_to_faculty_ratio, 2.0));
    }

    #[test]
    fn zero_faculty_yields_zero_ratios() {
        let s = ComputedYearStats::from_record(record("x", "y", 50, 0, 3));
        assert!(close(s.phd_percentage, 0.0));
        assert!(close(s.student_to_faculty_ratio, 0.0));
        assert!(s.student_to_phd_ratio.is_finite());
    }

    #[test]
    fn zero_phd_yields_zero_student_to_phd() {
        let s = ComputedYearStats::from_record(record("x", "y", 50, 5, 0));
        assert!(close(s.student_to_phd_ratio, 0.0));
        assert!(close(s.phd_percentage, 0.0));
    }

    #[test]
    fn sorts_descending_by_year_string() {
        let data = Dataset::new(vec![
            record("a", "2021-2022", 1, 1, 1),
            record("c", "2023-2024", 1, 1, 1),
            record("b", "2022-2023", 1, 1, 1),
        ]);
        let ids: Vec<_> = derive(&data).iter().map(|s| s.id().to_string()).collect();
        assert_eq!(ids, ["c", "b", "a"]);
    }

    #[test]
    fn sort_is_lexicographic_not_numeric() {
        let data = Dataset::new(vec![record("nine", "9", 1, 1, 1), record("ten", "10", 1, 1, 1)]);
        let stats = derive(&data);
        assert_eq!(stats[0].id(), "nine");
    }

    #[test]
    fn equal_years_keep_dataset_order() {
        let data = Dataset::new(vec![
            record("first", "2024-2025", 1, 1, 1),
            record("second", "2024-2025", 1, 1, 1),
        ]);
        let stats = derive(&data);
        assert_eq!(stats[0].id(), "first");
        assert_eq!(stats[1].id(), "second");
    }

    #[test]
    fn latest_and_lookup() {
        let stats = derive(&Dataset::builtin());
        assert_eq!(latest(&stats).map(ComputedYearStats::year), Some("2024-2025"));
        assert_eq!(
            find_by_id(&stats, "2022-2023").map(|s| s.record.students.total),
            Some(907)
        );
        assert!(find_by_id(&stats, "overview").is_none());
        assert!(latest(&[]).is_none());
    }

    #[test]
    fn chronological_is_oldest_first() {
        let stats = derive(&Dataset::builtin());
        let years: Vec<_> = chronological(&stats).map(ComputedYearStats::year).collect();
        assert_eq!(years, ["2021-2022", "2022-2023", "2023-2024", "2024-2025"]);
    }

    #[test]
    fn overview_uses_latest_year() {
        let stats = derive(&Dataset::builtin());
        let overview = Overview::from_stats(&stats);
        assert_eq!(overview.year, "2024-2025");
        assert_eq!(overview.year_count, 4);
        assert_eq!(overview.students, 1923);
        assert_eq!(overview.faculty, 87);
        assert_eq!(overview.phd_count, 54);
        assert!(close(overview.phd_percentage, 54.0 / 87.0 * 100.0));
        assert!(close(overview.student_to_phd_ratio, 1923.0 / 54.0));
    }

    #[test]
    fn overview_of_nothing_is_zeroed() {
        let overview = Overview::from_stats(&[]);
        assert!(overview.is_empty());
        assert_eq!(overview.students, 0);
        assert!(overview.year.is_empty());
    }

    #[test]
    fn json_flattens_record_and_adds_ratios() {
        let s = ComputedYearStats::from_record(record("x", "2030-2031", 2, 1, 1));
        let json = serde_json::to_value(&s).expect("serialize");
        assert_eq!(json["id"], "x");
        assert_eq!(json["phdCount"], 1);
        assert_eq!(json["phdPercentage"], 100.0);
        assert_eq!(json["studentToFacultyRatio"], 2.0);
    }
}
