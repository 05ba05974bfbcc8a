//! Gender breakdown model

use serde::{Deserialize, Serialize};

/// Male/female/total headcount triple used for students and faculty.
///
/// `total` is stored as given. Source data may carry estimated splits where
/// `male + female != total`; see [`GenderBreakdown::is_consistent`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenderBreakdown {
    /// Male headcount
    pub male: u32,
    /// Female headcount
    pub female: u32,
    /// Total headcount
    pub total: u32,
}

impl GenderBreakdown {
    /// Create a breakdown with an explicit total
    #[must_use]
    pub const fn new(male: u32, female: u32, total: u32) -> Self {
        Self {
            male,
            female,
            total,
        }
    }

    /// Create a breakdown whose total is `male + female`
    #[must_use]
    pub const fn from_split(male: u32, female: u32) -> Self {
        Self::new(male, female, male.saturating_add(female))
    }

    /// Whether `male + female == total`
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.male as u64 + self.female as u64 == self.total as u64
    }

    /// Share of `total` that is male, in percent (0 when `total` is 0)
    #[must_use]
    pub fn male_share(&self) -> f64 {
        share(self.male, self.total)
    }

    /// Share of `total` that is female, in percent (0 when `total` is 0)
    #[must_use]
    pub fn female_share(&self) -> f64 {
        share(self.female, self.total)
    }
}

fn share(part: u32, total: u32) -> f64 {
    if total > 0 {
        f64::from(part) / f64::from(total) * 100.0
    } else {
        0.0
    }
}
