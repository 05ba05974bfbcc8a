//! Data models for `ncnstats`

pub mod dataset;
pub mod gender;
pub mod year;

pub use dataset::Dataset;
pub use gender::GenderBreakdown;
pub use year::AcademicYearRecord;
