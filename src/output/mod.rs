//! User-facing output.
//!
//! This module handles all terminal output including:
//! - Formatted status messages
//! - Error and warning display
//! - Quiet and verbose modes

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use crate::io::ReadStatistics;
use crate::validation::ValidationSummary;

/// Display a validation summary to the user.
pub fn display_validation_summary(formatter: &OutputFormatter, summary: &ValidationSummary) {
    formatter.info(&format!(
        "Validated {} file(s): {} pages, {}",
        summary.results.len(),
        summary.total_pages,
        summary.format_total_size()
    ));
}

/// Display read statistics to the user.
pub fn display_read_statistics(formatter: &OutputFormatter, stats: &ReadStatistics) {
    if stats.failure_count > 0 {
        formatter.warning(&format!(
            "Warning: {} file(s) failed to read",
            stats.failure_count
        ));
    }

    formatter.debug(&format!(
        "Read {} file(s) in {:.2}s: {}",
        stats.success_count,
        stats.total_time.as_secs_f64(),
        stats.format_total_size()
    ));
}
