//! Source file reading.
//!
//! This module provides efficient source loading with support for:
//! - Sequential and parallel reads
//! - Order-preserving results
//! - Aggregate read statistics
//!
//! Readers return raw bytes wrapped in [`SourceFile`]; parsing happens
//! inside the operations.
//!
//! # Examples
//!
//! ```no_run
//! use pdfops::io::reader::SourceReader;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = SourceReader::new();
//! let paths = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let (results, stats) = reader.read_all(&paths, 4).await;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::document::SourceFile;
use crate::error::{PdfOpsError, Result};

/// Result of reading a single source file.
pub type ReadResult = Result<SourceFile>;

/// Statistics for a batch read operation.
#[derive(Debug, Clone)]
pub struct ReadStatistics {
    /// Number of files successfully read.
    pub success_count: usize,

    /// Number of files that failed to read.
    pub failure_count: usize,

    /// Total time taken for the batch.
    pub total_time: Duration,

    /// Total size of successfully read files in bytes.
    pub total_size: u64,
}

impl ReadStatistics {
    fn from_results(results: &[ReadResult], total_time: Duration) -> Self {
        let mut success_count = 0;
        let mut failure_count = 0;
        let mut total_size = 0;

        for result in results {
            match result {
                Ok(source) => {
                    success_count += 1;
                    total_size += source.size();
                }
                Err(_) => {
                    failure_count += 1;
                }
            }
        }

        Self {
            success_count,
            failure_count,
            total_time,
            total_size,
        }
    }

    /// Format total size as a human-readable kilobyte string.
    pub fn format_total_size(&self) -> String {
        crate::utils::format_kilobytes(self.total_size)
    }
}

/// Source reader with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct SourceReader {
    _private: (),
}

impl SourceReader {
    /// Create a new source reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a single source file into memory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path does not exist
    /// - The path is not a regular file
    /// - The file cannot be read
    pub async fn read(&self, path: &Path) -> ReadResult {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|_| PdfOpsError::file_not_found(path.to_path_buf()))?;

        if !metadata.is_file() {
            return Err(PdfOpsError::not_a_file(path.to_path_buf()));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| PdfOpsError::FailedToReadSource {
                path: path.to_path_buf(),
                source: e,
            })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(SourceFile::new(name, bytes))
    }

    /// Read multiple source files sequentially, in the order given.
    pub async fn read_sequential(&self, paths: &[PathBuf]) -> Vec<ReadResult> {
        let mut results = Vec::with_capacity(paths.len());

        for path in paths {
            results.push(self.read(path).await);
        }

        results
    }

    /// Read multiple source files concurrently.
    ///
    /// Reads complete out of order internally; results are re-sorted so the
    /// output vector matches the input path order exactly.
    pub async fn read_parallel(&self, paths: &[PathBuf], workers: usize) -> Vec<ReadResult> {
        use futures::stream::{self, StreamExt};

        let workers = workers.max(1);

        let tasks = paths.iter().enumerate().map(|(idx, path)| {
            let path = path.clone();
            let reader = self.clone();
            async move { (idx, reader.read(&path).await) }
        });

        let mut indexed: Vec<(usize, ReadResult)> = stream::iter(tasks)
            .buffer_unordered(workers)
            .collect::<Vec<_>>()
            .await;

        indexed.sort_by_key(|(idx, _)| *idx);

        indexed.into_iter().map(|(_, result)| result).collect()
    }

    /// Read all source files with automatic parallelization.
    ///
    /// Small batches read sequentially to avoid task overhead; larger ones
    /// fan out across `max_workers` concurrent reads.
    pub async fn read_all(
        &self,
        paths: &[PathBuf],
        max_workers: usize,
    ) -> (Vec<ReadResult>, ReadStatistics) {
        let start = Instant::now();

        let results = if paths.len() <= 3 {
            self.read_sequential(paths).await
        } else {
            self.read_parallel(paths, max_workers).await
        };

        let total_time = start.elapsed();
        let stats = ReadStatistics::from_results(&results, total_time);

        (results, stats)
    }
}
