//! Core domain: dataset model, store, derived statistics and reports

pub mod error;
pub mod format;
pub mod locale;
pub mod models;
pub mod report;
pub mod stats;
pub mod stats_export;
pub mod store;

pub use error::{ExportError, ImportError, ReportError, ShapeError};
pub use locale::Locale;
pub use models::{AcademicYearRecord, Dataset, GenderBreakdown};
pub use stats::{ComputedYearStats, Overview};
pub use store::DatasetStore;
