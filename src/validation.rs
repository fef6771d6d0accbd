//! Input validation.
//!
//! This module checks source files before any operation runs. It performs:
//! - File existence and accessibility checks
//! - Document format validation
//! - Page count verification
//! - Output path validation
//!
//! Validating up front keeps failures cheap: a bad input is reported before
//! any document assembly starts.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::OverwriteMode;
use crate::document::{load_document, page_count};
use crate::error::{PdfOpsError, Result};

/// Result of validating a single source file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Path to the validated file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: u32,

    /// Size of the file in bytes.
    pub file_size: u64,
}

/// Summary of validation results for multiple files.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    /// Individual validation results for each file.
    pub results: Vec<ValidationResult>,

    /// Total number of pages across all files.
    pub total_pages: u32,

    /// Total file size in bytes.
    pub total_size: u64,
}

impl ValidationSummary {
    /// Create a summary from validation results.
    pub fn from_results(results: Vec<ValidationResult>) -> Self {
        let total_pages = results.iter().map(|r| r.page_count).sum();
        let total_size = results.iter().map(|r| r.file_size).sum();

        Self {
            results,
            total_pages,
            total_size,
        }
    }

    /// Format the total file size as a human-readable kilobyte string.
    pub fn format_total_size(&self) -> String {
        crate::utils::format_kilobytes(self.total_size)
    }
}

/// Validator for source files and output paths.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    _private: (),
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a single source file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist
    /// - The path is not a regular file
    /// - The file is empty
    /// - The bytes do not parse as a PDF
    /// - The document has no pages
    pub async fn validate_file(&self, path: &Path) -> Result<ValidationResult> {
        if !path.exists() {
            return Err(PdfOpsError::file_not_found(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(PdfOpsError::not_a_file(path.to_path_buf()));
        }

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| PdfOpsError::FailedToReadSource {
                path: path.to_path_buf(),
                source: e,
            })?;

        if metadata.len() == 0 {
            return Err(PdfOpsError::corrupted(
                path.display().to_string(),
                "File is empty",
            ));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| PdfOpsError::FailedToReadSource {
                path: path.to_path_buf(),
                source: e,
            })?;

        let doc = load_document(&bytes, &path.display().to_string())?;

        let pages = page_count(&doc);
        if pages == 0 {
            return Err(PdfOpsError::corrupted(
                path.display().to_string(),
                "Document has no pages",
            ));
        }

        Ok(ValidationResult {
            path: path.to_path_buf(),
            page_count: pages,
            file_size: metadata.len(),
        })
    }

    /// Validate multiple source files.
    ///
    /// Fails fast on the first invalid file; a batch operation with a bad
    /// input should never start assembling output.
    pub async fn validate_files(&self, paths: &[PathBuf]) -> Result<ValidationSummary> {
        if paths.is_empty() {
            return Err(PdfOpsError::EmptyInput);
        }

        let mut results = Vec::with_capacity(paths.len());
        for path in paths {
            results.push(self.validate_file(path).await?);
        }

        Ok(ValidationSummary::from_results(results))
    }

    /// Validate the output path against the overwrite mode.
    ///
    /// Prompt-mode conflicts are left for the caller to resolve
    /// interactively; only no-clobber turns an existing file into an error
    /// here.
    pub async fn validate_output(&self, path: &Path, mode: OverwriteMode) -> Result<()> {
        if path.exists() && mode == OverwriteMode::NoClobber {
            return Err(PdfOpsError::output_exists(path.to_path_buf()));
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            return Err(PdfOpsError::invalid_config(format!(
                "Output directory does not exist: {}",
                parent.display()
            )));
        }

        Ok(())
    }
}
