//! Dataset model and the embedded default data

use super::{AcademicYearRecord, GenderBreakdown};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered collection of academic year records.
///
/// Ids are expected to be unique but this is not enforced; see
/// [`Dataset::duplicate_ids`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<AcademicYearRecord>,
}

impl Dataset {
    /// Wrap an ordered list of records
    #[must_use]
    pub const fn new(records: Vec<AcademicYearRecord>) -> Self {
        Self { records }
    }

    /// The built-in dataset used until an import replaces it.
    ///
    /// The 2024-2025 and 2023-2024 gender splits are estimates (about 30/70)
    /// derived from the reported totals.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            AcademicYearRecord::new(
                "2024-2025",
                "2024-2025",
                GenderBreakdown::new(577, 1346, 1923),
                GenderBreakdown::new(34, 53, 87),
                54,
            ),
            AcademicYearRecord::new(
                "2023-2024",
                "2023-2024",
                GenderBreakdown::new(459, 1070, 1529),
                GenderBreakdown::new(29, 47, 76),
                35,
            ),
            AcademicYearRecord::new(
                "2022-2023",
                "2022-2023",
                GenderBreakdown::new(286, 621, 907),
                GenderBreakdown::new(23, 42, 65),
                33,
            ),
            AcademicYearRecord::new(
                "2021-2022",
                "2021-2022",
                GenderBreakdown::new(288, 581, 869),
                GenderBreakdown::new(23, 42, 65),
                33,
            ),
        ])
    }

    /// Records in stored order
    #[must_use]
    pub fn records(&self) -> &[AcademicYearRecord] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in stored order
    pub fn iter(&self) -> std::slice::Iter<'_, AcademicYearRecord> {
        self.records.iter()
    }

    /// First record with the given id
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&AcademicYearRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Ids that occur more than once, in first-repeat order
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.records
            .iter()
            .map(|r| r.id.as_str())
            .filter(|id| !seen.insert(*id) && reported.insert(*id))
            .collect()
    }

    /// Ids of records whose totals differ from `male + female`
    #[must_use]
    pub fn inconsistent_totals(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| !r.has_consistent_totals())
            .map(|r| r.id.as_str())
            .collect()
    }

    /// Consume the dataset and return its records
    #[must_use]
    pub fn into_records(self) -> Vec<AcademicYearRecord> {
        self.records
    }
}

impl From<Vec<AcademicYearRecord>> for Dataset {
    fn from(records: Vec<AcademicYearRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a AcademicYearRecord;
    type IntoIter = std::slice::Iter<'a, AcademicYearRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_four_distinct_years() {
        let data = Dataset::builtin();
        assert_eq!(data.len(), 4);
        assert!(data.duplicate_ids().is_empty());
        let years: HashSet<_> = data.iter().map(|r| r.year.as_str()).collect();
        assert_eq!(years.len(), 4);
        assert!(years.contains("2021-2022"));
        assert!(years.contains("2024-2025"));
    }

    #[test]
    fn builtin_values_are_kept_as_given() {
        let data = Dataset::builtin();
        let latest = data.find("2024-2025").expect("2024-2025 present");
        assert_eq!(latest.students.total, 1923);
        assert_eq!(latest.faculty.total, 87);
        assert_eq!(latest.phd_count, 54);
    }

    #[test]
    fn reports_duplicates_once() {
        let mut records = Dataset::builtin().into_records();
        records.push(records[0].clone());
        records.push(records[0].clone());
        let data = Dataset::from(records);
        assert_eq!(data.duplicate_ids(), vec!["2024-2025"]);
    }

    #[test]
    fn reports_inconsistent_totals() {
        let data = Dataset::new(vec![AcademicYearRecord::new(
            "a",
            "2020-2021",
            GenderBreakdown::new(1, 1, 3),
            GenderBreakdown::from_split(1, 1),
            0,
        )]);
        assert_eq!(data.inconsistent_totals(), vec!["a"]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let json = serde_json::to_string(&Dataset::default()).expect("serialize");
        assert_eq!(json, "[]");
    }
}
