//! CLI argument parsing for pdfops.
//!
//! This module defines the command-line interface structure using `clap`.
//! It handles argument parsing, validation, and help text generation.
//!
//! # Examples
//!
//! ```no_run
//! use pdfops::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{
    CommonOptions, CompressConfig, MergeConfig, OverwriteMode, PageRange, SplitConfig,
};
use crate::error::{PdfOpsError, Result};
use crate::utils::collect_paths_for_patterns;

/// Merge, split and compress PDF documents.
///
/// pdfops applies a single transformation per invocation: concatenate
/// several documents, extract a page range from one, or re-encode one for
/// size. Every operation reads its inputs, produces a new file and leaves
/// the sources untouched.
#[derive(Parser, Debug)]
#[command(name = "pdfops")]
#[command(version)]
#[command(about = "Merge, split and compress PDF documents", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Suppress all non-error output
    ///
    /// Only errors and warnings will be printed.
    /// Useful for scripts and automation.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output - show detailed information about each step
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Force overwrite of existing output file without confirmation
    ///
    /// By default, pdfops will prompt before overwriting an existing file.
    /// Use this flag to skip the confirmation prompt.
    #[arg(short, long, global = true)]
    pub force: bool,

    /// Never overwrite existing output file
    ///
    /// If the output file already exists, exit with an error
    /// instead of prompting or overwriting.
    #[arg(long, global = true, conflicts_with = "force")]
    pub no_clobber: bool,

    /// The transformation to apply.
    #[command(subcommand)]
    pub command: Command,
}

/// The available operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge multiple PDF files into a single document
    ///
    /// Files are merged in the order provided. Glob patterns are expanded,
    /// e.g. `pdfops merge chapter*.pdf -o book.pdf`.
    Merge {
        /// Input PDF files to merge (in order)
        #[arg(required = true, value_name = "FILE")]
        inputs: Vec<String>,

        /// Output PDF file path
        #[arg(short, long, value_name = "FILE", default_value = "merged.pdf")]
        output: PathBuf,

        /// Number of parallel jobs for reading inputs
        ///
        /// Default is the number of CPU cores. Use 1 for sequential reads.
        #[arg(short, long, value_name = "N")]
        jobs: Option<usize>,
    },

    /// Extract a page range from a PDF into a new document
    ///
    /// Pages are 1-indexed and both endpoints are inclusive, e.g.
    /// `pdfops split report.pdf --from 4 --to 7 -o excerpt.pdf`.
    Split {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// First page to extract (1-indexed, inclusive)
        #[arg(long, value_name = "N", default_value_t = 1)]
        from: u32,

        /// Last page to extract (1-indexed, inclusive)
        #[arg(long, value_name = "N", default_value_t = 1)]
        to: u32,

        /// Output PDF file path
        #[arg(short, long, value_name = "FILE", default_value = "split.pdf")]
        output: PathBuf,
    },

    /// Re-encode a PDF to reduce its file size
    ///
    /// Compresses content streams and prunes unreferenced objects, then
    /// reports the before/after sizes.
    Compress {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file path
        #[arg(short, long, value_name = "FILE", default_value = "compressed.pdf")]
        output: PathBuf,

        /// Print the size report as JSON on stdout
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn common_options(&self, output: PathBuf) -> CommonOptions {
        let overwrite_mode = if self.force {
            OverwriteMode::Force
        } else if self.no_clobber {
            OverwriteMode::NoClobber
        } else {
            OverwriteMode::Prompt
        };

        CommonOptions {
            output,
            overwrite_mode,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }

    /// Build a validated [`MergeConfig`] from the merge subcommand.
    ///
    /// Expands glob patterns in the input arguments; expansion order follows
    /// argument order, so `a.pdf b*.pdf` keeps `a.pdf` first.
    ///
    /// # Errors
    ///
    /// Returns an error if the subcommand is not `merge`, a pattern is
    /// malformed, or the resulting configuration fails validation.
    pub fn to_merge_config(&self) -> Result<MergeConfig> {
        let Command::Merge {
            inputs,
            output,
            jobs,
        } = &self.command
        else {
            return Err(PdfOpsError::invalid_config("Not a merge invocation"));
        };

        let paths = collect_paths_for_patterns(inputs)?;
        if paths.is_empty() {
            return Err(PdfOpsError::EmptyInput);
        }

        let config = MergeConfig {
            inputs: paths,
            common: self.common_options(output.clone()),
            jobs: *jobs,
        };
        config.validate()?;

        Ok(config)
    }

    /// Build a validated [`SplitConfig`] from the split subcommand.
    pub fn to_split_config(&self) -> Result<SplitConfig> {
        let Command::Split {
            input,
            from,
            to,
            output,
        } = &self.command
        else {
            return Err(PdfOpsError::invalid_config("Not a split invocation"));
        };

        let config = SplitConfig {
            input: input.clone(),
            range: PageRange::new(*from, *to)?,
            common: self.common_options(output.clone()),
        };
        config.validate()?;

        Ok(config)
    }

    /// Build a validated [`CompressConfig`] from the compress subcommand.
    pub fn to_compress_config(&self) -> Result<CompressConfig> {
        let Command::Compress {
            input,
            output,
            json,
        } = &self.command
        else {
            return Err(PdfOpsError::invalid_config("Not a compress invocation"));
        };

        let config = CompressConfig {
            input: input.clone(),
            json: *json,
            common: self.common_options(output.clone()),
        };
        config.validate()?;

        Ok(config)
    }
}
