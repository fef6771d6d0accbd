//! pdfops - Merge, split and compress PDF documents.
//!
//! This library provides three self-contained document transformations,
//! each taking source bytes plus parameters and producing output bytes:
//!
//! - Merging multiple documents into one
//! - Extracting an inclusive page range into a new document
//! - Re-encoding a document for size, with a before/after report
//!
//! # Examples
//!
//! ## Basic Merge
//!
//! ```no_run
//! use pdfops::document::SourceFile;
//! use pdfops::ops::merge_documents;
//!
//! # fn example() -> pdfops::Result<()> {
//! let sources = vec![
//!     SourceFile::new("a.pdf", std::fs::read("a.pdf")?),
//!     SourceFile::new("b.pdf", std::fs::read("b.pdf")?),
//! ];
//! let merged = merge_documents(&sources)?;
//! std::fs::write("merged.pdf", merged)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Page Extraction
//!
//! ```no_run
//! use pdfops::config::PageRange;
//! use pdfops::document::SourceFile;
//! use pdfops::ops::extract_range;
//!
//! # fn example() -> pdfops::Result<()> {
//! let source = SourceFile::new("report.pdf", std::fs::read("report.pdf")?);
//! let excerpt = extract_range(&source, &PageRange::new(4, 7)?)?;
//! std::fs::write("excerpt.pdf", excerpt)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod io;
pub mod ops;
pub mod output;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use error::{PdfOpsError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
