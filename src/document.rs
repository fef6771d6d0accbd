//! Document loading and serialization helpers.
//!
//! Every operation goes through the same narrow boundary with the document
//! library: load bytes into a [`lopdf::Document`], manipulate pages, and
//! serialize back to bytes. Handles are created per operation and never
//! retained across calls.

use lopdf::Document;

use crate::error::{PdfOpsError, Result};

/// A source document: raw bytes plus a display name.
///
/// Immutable once read. The name is used only for error messages and
/// reporting; the bytes are the unit of input to every operation.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Display name (usually the filename).
    pub name: String,

    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl SourceFile {
    /// Create a source file from a name and raw bytes.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Size of the source in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Load raw bytes into a document handle.
///
/// # Errors
///
/// Returns [`PdfOpsError::FailedToLoadDocument`] if the bytes cannot be
/// parsed as a PDF. The `name` is carried into the error for reporting.
pub fn load_document(bytes: &[u8], name: &str) -> Result<Document> {
    Document::load_mem(bytes).map_err(|e| PdfOpsError::failed_to_load(name, e.to_string()))
}

/// Serialize a document handle to bytes.
///
/// Consumes the handle: per the operation contract a handle is saved exactly
/// once and then discarded.
pub fn save_document(mut doc: Document) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| PdfOpsError::FailedToSerialize {
            reason: e.to_string(),
        })?;
    Ok(buffer)
}

/// Number of pages in a document.
pub fn page_count(doc: &Document) -> u32 {
    doc.get_pages().len() as u32
}
