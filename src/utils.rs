//! Utilities for path collection and size formatting.

use std::path::PathBuf;

use crate::error::{PdfOpsError, Result};

/// Expand multiple glob patterns into filesystem paths.
///
/// Accepts anything iterable with items that convert to `&str`, e.g.:
/// `&[&str]`, `Vec<String>`, or `Vec<&str>`.
///
/// Returns a flattened list of resolved paths. A pattern with no
/// metacharacters that matches nothing still yields itself verbatim, so
/// plain filenames for missing files surface later as file-not-found
/// errors rather than silently vanishing.
pub fn collect_paths_for_patterns<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolved_paths = Vec::new();

    for pattern in patterns.into_iter() {
        let paths = collect_paths_for_pattern(pattern)?;
        resolved_paths.extend(paths);
    }

    Ok(resolved_paths)
}

/// Expand a single glob pattern into filesystem paths.
///
/// Pattern examples:
/// - `"**/*.pdf"`
/// - `"./docs/*.pdf"`
fn collect_paths_for_pattern<P: AsRef<str>>(pattern: P) -> Result<Vec<PathBuf>> {
    let pattern = pattern.as_ref();
    let mut resolved_paths = Vec::new();

    let paths = glob::glob(pattern).map_err(|err| PdfOpsError::Other {
        message: err.to_string(),
    })?;

    for entry in paths {
        let path = entry.map_err(|err| PdfOpsError::Other {
            message: err.to_string(),
        })?;
        resolved_paths.push(path);
    }

    if resolved_paths.is_empty() && !pattern.contains(['*', '?', '[']) {
        resolved_paths.push(PathBuf::from(pattern));
    }

    Ok(resolved_paths)
}

/// Convert a byte count to kilobytes, rounded to two decimal places.
pub fn kilobytes(bytes: u64) -> f64 {
    (bytes as f64 / 1024.0 * 100.0).round() / 100.0
}

/// Format a byte count as a human-readable kilobyte string, e.g. `"195.31 KB"`.
pub fn format_kilobytes(bytes: u64) -> String {
    format!("{:.2} KB", kilobytes(bytes))
}
