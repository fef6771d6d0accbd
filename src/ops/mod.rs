//! The three document transformations: merge, split and compress.
//!
//! Each operation is a pure transformation from source bytes (plus
//! parameters) to output bytes. Operations share no state; every call
//! allocates its own document handles and discards them before returning.

pub mod compress;
pub mod merge;
pub mod split;

pub use compress::{CompressOutcome, SizeReport, compress_document};
pub use merge::merge_documents;
pub use split::extract_range;
