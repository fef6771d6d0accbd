//! Output file writing.
//!
//! This module provides safe output writing with:
//! - Atomic writes (write to temp file, then rename)
//! - Overwrite pre-flight checks
//! - Write statistics
//!
//! # Examples
//!
//! ```no_run
//! use pdfops::io::writer::ArtifactWriter;
//! use std::path::Path;
//!
//! # async fn example(bytes: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = ArtifactWriter::new();
//! writer.save(&bytes, Path::new("output.pdf")).await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfOpsError, Result};

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

impl WriteStatistics {
    /// Format file size as a human-readable kilobyte string.
    pub fn format_file_size(&self) -> String {
        crate::utils::format_kilobytes(self.file_size)
    }
}

/// Output writer with atomic write behavior.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    atomic: bool,
}

impl ArtifactWriter {
    /// Create a writer that writes atomically (temp file plus rename).
    pub fn new() -> Self {
        Self { atomic: true }
    }

    /// Create a writer that writes directly to the target path.
    pub fn non_atomic() -> Self {
        Self { atomic: false }
    }

    /// Save output bytes to a file.
    pub async fn save(&self, bytes: &[u8], path: &Path) -> Result<()> {
        let _stats = self.save_with_stats(bytes, path).await?;
        Ok(())
    }

    /// Save output bytes and return statistics about the operation.
    ///
    /// With atomic writes the bytes land in a sibling temp file first and
    /// are renamed into place, so a failed write never leaves a truncated
    /// file at the target path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output directory does not exist
    /// - Permissions are insufficient
    /// - The write itself fails
    pub async fn save_with_stats(&self, bytes: &[u8], path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();

        let write_path = if self.atomic {
            path.with_extension("tmp")
        } else {
            path.to_path_buf()
        };

        tokio::fs::write(&write_path, bytes)
            .await
            .map_err(|e| PdfOpsError::FailedToWrite {
                path: write_path.clone(),
                source: e,
            })?;

        if self.atomic {
            tokio::fs::rename(&write_path, path)
                .await
                .map_err(|e| PdfOpsError::FailedToWrite {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }

        let write_time = start.elapsed();

        Ok(WriteStatistics {
            write_time,
            file_size: bytes.len() as u64,
            output_path: path.to_path_buf(),
        })
    }

    /// Check if a file can be written to the given path.
    ///
    /// Performs pre-flight checks without actually writing.
    pub async fn can_write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            if !parent.exists() {
                return Err(PdfOpsError::invalid_config(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }

            let metadata = tokio::fs::metadata(parent).await.map_err(|e| {
                PdfOpsError::FailedToCreateOutput {
                    path: parent.to_path_buf(),
                    source: e,
                }
            })?;

            if metadata.permissions().readonly() {
                return Err(PdfOpsError::invalid_config(format!(
                    "Output directory is not writable: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }

    /// Check if the output file already exists.
    pub async fn exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }
}

impl Default for ArtifactWriter {
    fn default() -> Self {
        Self::new()
    }
}
