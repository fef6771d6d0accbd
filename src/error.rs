//! Error types for pdfops.
//!
//! Every fallible operation in the crate returns [`PdfOpsError`]. Errors are
//! scoped to a single operation: a failed merge, split or compress never
//! affects anything beyond the invocation that triggered it.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfops operations.
pub type Result<T> = std::result::Result<T, PdfOpsError>;

/// Main error type for pdfops operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfOpsError {
    /// Input file was not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Input path exists but is not a regular file.
    #[error("Not a file: {path}")]
    NotAFile {
        /// Path that is not a file.
        path: PathBuf,
    },

    /// Input file could not be read from disk.
    #[error("Cannot read file: {path}\n  Reason: {source}")]
    FailedToReadSource {
        /// Path to the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The supplied bytes could not be parsed as a PDF document.
    #[error("Failed to load PDF: {name}\n  Reason: {reason}")]
    FailedToLoadDocument {
        /// Display name of the source (filename or label).
        name: String,
        /// Reason reported by the document library.
        reason: String,
    },

    /// The document parsed but its structure is unusable (e.g. no pages).
    #[error("Corrupted or invalid PDF: {name}\n  Details: {details}")]
    CorruptedDocument {
        /// Display name of the source.
        name: String,
        /// Details about the corruption.
        details: String,
    },

    /// No source documents were supplied for an operation.
    #[error("No input documents specified")]
    EmptyInput,

    /// A requested page range does not fit the document.
    #[error(
        "Invalid page range {from}-{to}: document has {page_count} page(s). \
         Pages are 1-indexed and `from` must not exceed `to`"
    )]
    InvalidPageRange {
        /// Requested start page (1-indexed, inclusive).
        from: u32,
        /// Requested end page (1-indexed, inclusive).
        to: u32,
        /// Total pages in the document.
        page_count: u32,
    },

    /// Serializing the assembled document failed.
    #[error("Failed to serialize document: {reason}")]
    FailedToSerialize {
        /// Reason reported by the document library.
        reason: String,
    },

    /// Assembling the output document failed (page tree manipulation).
    #[error("Operation failed: {reason}")]
    OperationFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Output file already exists and overwrite is not allowed.
    #[error(
        "Output file already exists: {path}\n  \
         Use --force to overwrite or choose a different output path"
    )]
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// Failed to create the output file.
    #[error("Failed to create output file: {path}\n  Reason: {source}")]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write the output file.
    #[error("Failed to write to output file: {path}\n  Reason: {source}")]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Invalid CLI arguments or configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// User declined an overwrite prompt.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<lopdf::Error> for PdfOpsError {
    fn from(err: lopdf::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl From<anyhow::Error> for PdfOpsError {
    fn from(err: anyhow::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl PdfOpsError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create a FailedToLoadDocument error.
    pub fn failed_to_load(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FailedToLoadDocument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a CorruptedDocument error.
    pub fn corrupted(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::CorruptedDocument {
            name: name.into(),
            details: details.into(),
        }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: PathBuf) -> Self {
        Self::OutputExists { path }
    }

    /// Create an OperationFailed error.
    pub fn operation_failed(reason: impl Into<String>) -> Self {
        Self::OperationFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } => 2,
            Self::NotAFile { .. } => 2,
            Self::FailedToReadSource { .. } => 2,
            Self::FailedToLoadDocument { .. } => 3,
            Self::CorruptedDocument { .. } => 3,
            Self::EmptyInput => 1,
            Self::InvalidPageRange { .. } => 1,
            Self::FailedToSerialize { .. } => 6,
            Self::OperationFailed { .. } => 6,
            Self::OutputExists { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::InvalidConfig { .. } => 1,
            Self::Cancelled => 130, // Standard exit code for SIGINT
            Self::Io { .. } => 5,
            Self::Other { .. } => 1,
        }
    }
}
