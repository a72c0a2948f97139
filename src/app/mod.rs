//! User-facing output.
//!
//! This module renders usage, invalid-domain messages, lookup diagnostics and
//! the final report for the main application.

pub mod report;

// Re-export public API
pub use report::{write_diagnostics, write_invalid_domain, write_report, write_usage};
