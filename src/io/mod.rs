//! File input/output operations.
//!
//! Reading source bytes from disk and writing operation output back out.
//! Document parsing is deliberately not done here; readers produce raw
//! bytes and the operations own the parse step.

pub mod reader;
pub mod writer;

pub use reader::{ReadStatistics, SourceReader};
pub use writer::{ArtifactWriter, WriteStatistics};
