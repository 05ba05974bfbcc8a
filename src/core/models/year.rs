//! Academic year record model

use super::GenderBreakdown;
use serde::{Deserialize, Serialize};

/// One academic year's snapshot of headcounts and PhD holders.
///
/// Field order here is the JSON field order of exported snapshots:
/// `id, year, students, faculty, phdCount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicYearRecord {
    /// Unique key used for lookup and selection
    pub id: String,

    /// Human-readable label, typically `YYYY-YYYY`; also the sort key
    pub year: String,

    /// Student population
    pub students: GenderBreakdown,

    /// Faculty population
    pub faculty: GenderBreakdown,

    /// Faculty members holding a doctorate (expected `<= faculty.total`, not enforced)
    #[serde(rename = "phdCount")]
    pub phd_count: u32,
}

impl AcademicYearRecord {
    /// Create a new record
    ///
    /// # Arguments
    /// * `id` - Unique record key
    /// * `year` - Academic year label
    /// * `students` - Student headcounts
    /// * `faculty` - Faculty headcounts
    /// * `phd_count` - Number of faculty with a PhD
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        year: impl Into<String>,
        students: GenderBreakdown,
        faculty: GenderBreakdown,
        phd_count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            year: year.into(),
            students,
            faculty,
            phd_count,
        }
    }

    /// Whether both breakdowns satisfy `male + female == total`
    #[must_use]
    pub const fn has_consistent_totals(&self) -> bool {
        self.students.is_consistent() && self.faculty.is_consistent()
    }

    /// Whether the PhD count fits inside the faculty total
    #[must_use]
    pub const fn phd_within_faculty(&self) -> bool {
        self.phd_count <= self.faculty.total
    }
}
