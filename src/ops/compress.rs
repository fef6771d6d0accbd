//! Document compression.
//!
//! Re-encodes a document with compressed streams and pruned unreferenced
//! objects, and reports the size change. Compression is best-effort: the
//! output is whatever the re-encoding yields, even when it is not smaller
//! than the input.

use serde::Serialize;

use crate::document::{SourceFile, load_document, save_document};
use crate::error::Result;
use crate::utils::kilobytes;

/// Result of a compress operation: output bytes plus before/after sizes.
#[derive(Debug)]
pub struct CompressOutcome {
    /// Re-encoded document bytes.
    pub bytes: Vec<u8>,

    /// Size of the input in bytes.
    pub original_size: u64,

    /// Size of the output in bytes.
    pub compressed_size: u64,
}

impl CompressOutcome {
    /// Input size in kilobytes, rounded to two decimal places.
    pub fn original_kb(&self) -> f64 {
        kilobytes(self.original_size)
    }

    /// Output size in kilobytes, rounded to two decimal places.
    pub fn compressed_kb(&self) -> f64 {
        kilobytes(self.compressed_size)
    }

    /// Build a serializable size report for this outcome.
    pub fn report(&self) -> SizeReport {
        SizeReport {
            original_bytes: self.original_size,
            compressed_bytes: self.compressed_size,
            original_kb: self.original_kb(),
            compressed_kb: self.compressed_kb(),
        }
    }
}

/// Size report emitted after a compress operation.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SizeReport {
    /// Input size in bytes.
    pub original_bytes: u64,

    /// Output size in bytes.
    pub compressed_bytes: u64,

    /// Input size in kilobytes (two decimal places).
    pub original_kb: f64,

    /// Output size in kilobytes (two decimal places).
    pub compressed_kb: f64,
}

/// Compress a source document and report the resulting sizes.
///
/// # Errors
///
/// Returns [`crate::PdfOpsError::FailedToLoadDocument`] if the source does
/// not parse, or [`crate::PdfOpsError::FailedToSerialize`] if re-encoding
/// fails.
pub fn compress_document(source: &SourceFile) -> Result<CompressOutcome> {
    let mut doc = load_document(&source.bytes, &source.name)?;

    doc.compress();
    doc.prune_objects();

    let bytes = save_document(doc)?;
    let compressed_size = bytes.len() as u64;

    Ok(CompressOutcome {
        bytes,
        original_size: source.size(),
        compressed_size,
    })
}
