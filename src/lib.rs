//! Shared library for `ncnstats`
//!
//! Holds the academic-year dataset, derives per-year ratios and rankings,
//! and renders print-friendly reports. The CLI in `src/cli` is a thin
//! layer over this crate.

pub mod config;
pub mod core;

/// Returns the current version of the `ncn-stats` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
