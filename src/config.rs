//! Configuration module for pdfops.
//!
//! This module transforms CLI arguments into validated, normalized
//! configurations for the three operations. It handles:
//! - Page range construction and bounds validation
//! - Resolution of conflicting options
//! - Application of defaults

use anyhow::{Context, bail};
use std::path::PathBuf;

use crate::error::{PdfOpsError, Result};

/// A closed, 1-indexed page range `[from, to]`.
///
/// Both endpoints are inclusive. `from == to` selects a single page;
/// `from = 1, to = page_count` selects the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    from: u32,
    to: u32,
}

impl PageRange {
    /// Create a page range from 1-indexed endpoints.
    ///
    /// Rejects zero endpoints up front; ordering and document bounds are
    /// checked later by [`PageRange::validate_for`], once the page count of
    /// the target document is known.
    pub fn new(from: u32, to: u32) -> Result<Self> {
        if from == 0 || to == 0 {
            return Err(PdfOpsError::invalid_config(
                "Page numbers must be positive (1-indexed)",
            ));
        }
        Ok(Self { from, to })
    }

    /// Parse a page range string like `"4-7"` or a single page like `"4"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfops::config::PageRange;
    ///
    /// let range = PageRange::parse("4-7").unwrap();
    /// assert_eq!(range.from(), 4);
    /// assert_eq!(range.to(), 7);
    ///
    /// let single = PageRange::parse("3").unwrap();
    /// assert_eq!(single.len(), 1);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let parsed: anyhow::Result<(u32, u32)> = (|| {
            if let Some((start, end)) = s.split_once('-') {
                let from: u32 = start
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid page number: {start}"))?;
                let to: u32 = end
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid page number: {end}"))?;
                Ok((from, to))
            } else if s.is_empty() {
                bail!("Page range cannot be empty");
            } else {
                let page: u32 = s
                    .parse()
                    .with_context(|| format!("Invalid page number: {s}"))?;
                Ok((page, page))
            }
        })();

        let (from, to) = parsed.map_err(|e| PdfOpsError::invalid_config(e.to_string()))?;
        Self::new(from, to)
    }

    /// Start page (1-indexed, inclusive).
    pub fn from(&self) -> u32 {
        self.from
    }

    /// End page (1-indexed, inclusive).
    pub fn to(&self) -> u32 {
        self.to
    }

    /// Number of pages selected by this range.
    ///
    /// Meaningful only for ranges that pass [`PageRange::validate_for`].
    pub fn len(&self) -> u32 {
        self.to.saturating_sub(self.from) + 1
    }

    /// Whether the range selects no pages. Always false for a constructed
    /// range; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.to < self.from
    }

    /// Validate this range against a document's page count.
    ///
    /// Fails if `from > page_count`, `to > page_count`, or `from > to`.
    /// Performed immediately before extraction, never earlier: the bound is a
    /// property of the document, not of the range.
    pub fn validate_for(&self, page_count: u32) -> Result<()> {
        if self.from > page_count || self.to > page_count || self.from > self.to {
            return Err(PdfOpsError::InvalidPageRange {
                from: self.from,
                to: self.to,
                page_count,
            });
        }
        Ok(())
    }

    /// Iterate the selected 1-indexed page numbers in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        self.from..=self.to
    }
}

/// Output file overwrite behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Prompt the user before overwriting (default).
    #[default]
    Prompt,
    /// Always overwrite without prompting.
    Force,
    /// Never overwrite, error if file exists.
    NoClobber,
}

/// Options shared by every operation: output handling and verbosity.
#[derive(Debug, Clone)]
pub struct CommonOptions {
    /// Output file path.
    pub output: PathBuf,

    /// File overwrite behavior.
    pub overwrite_mode: OverwriteMode,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Verbose output mode.
    pub verbose: bool,
}

impl CommonOptions {
    fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            return Err(PdfOpsError::invalid_config(
                "Cannot use both --verbose and --quiet",
            ));
        }
        Ok(())
    }
}

/// Configuration for a merge operation.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Input PDF file paths (in merge order).
    pub inputs: Vec<PathBuf>,

    /// Shared output/verbosity options.
    pub common: CommonOptions,

    /// Maximum number of concurrent file reads (None = auto-detect).
    pub jobs: Option<usize>,
}

impl MergeConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no inputs are given, the output path collides
    /// with an input, jobs is zero, or verbosity flags conflict.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(PdfOpsError::EmptyInput);
        }

        if let Some(jobs) = self.jobs
            && jobs == 0
        {
            return Err(PdfOpsError::invalid_config(
                "Number of jobs must be at least 1",
            ));
        }

        for input in &self.inputs {
            if input == &self.common.output {
                return Err(PdfOpsError::invalid_config(format!(
                    "Output file cannot be the same as an input file: {}",
                    self.common.output.display()
                )));
            }
        }

        self.common.validate()
    }

    /// Get the effective number of concurrent reads.
    pub fn effective_jobs(&self) -> usize {
        self.jobs.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }
}

/// Configuration for a split (page-range extraction) operation.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Input PDF file path.
    pub input: PathBuf,

    /// Page range to extract (1-indexed, inclusive).
    pub range: PageRange,

    /// Shared output/verbosity options.
    pub common: CommonOptions,
}

impl SplitConfig {
    /// Validate the configuration.
    ///
    /// Range-vs-document bounds are deliberately not checked here; that
    /// happens in the extractor once the document is loaded.
    pub fn validate(&self) -> Result<()> {
        if self.input == self.common.output {
            return Err(PdfOpsError::invalid_config(format!(
                "Output file cannot be the same as the input file: {}",
                self.common.output.display()
            )));
        }
        self.common.validate()
    }
}

/// Configuration for a compress (size-reduction) operation.
#[derive(Debug, Clone)]
pub struct CompressConfig {
    /// Input PDF file path.
    pub input: PathBuf,

    /// Emit the size report as JSON on stdout.
    pub json: bool,

    /// Shared output/verbosity options.
    pub common: CommonOptions,
}

impl CompressConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.input == self.common.output {
            return Err(PdfOpsError::invalid_config(format!(
                "Output file cannot be the same as the input file: {}",
                self.common.output.display()
            )));
        }
        self.common.validate()
    }
}
