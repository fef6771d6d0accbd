//! pdfops - Merge, split and compress PDF documents.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use pdfops::cli::{Cli, Command};
use pdfops::config::{CompressConfig, MergeConfig, OverwriteMode, SplitConfig};
use pdfops::document::SourceFile;
use pdfops::error::PdfOpsError;
use pdfops::io::{ArtifactWriter, SourceReader};
use pdfops::ops::{compress_document, extract_range, merge_documents};
use pdfops::output::{OutputFormatter, display_read_statistics, display_validation_summary};
use pdfops::validation::Validator;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), PdfOpsError> {
    match &cli.command {
        Command::Merge { .. } => {
            let config = cli.to_merge_config()?;
            run_merge(config).await
        }
        Command::Split { .. } => {
            let config = cli.to_split_config()?;
            run_split(config).await
        }
        Command::Compress { .. } => {
            let config = cli.to_compress_config()?;
            run_compress(config).await
        }
    }
}

async fn run_merge(config: MergeConfig) -> Result<(), PdfOpsError> {
    let formatter = OutputFormatter::new(config.common.quiet, config.common.verbose);

    formatter.info("Validating input files...");
    let validator = Validator::new();
    let summary = validator.validate_files(&config.inputs).await?;
    display_validation_summary(&formatter, &summary);

    validator
        .validate_output(&config.common.output, config.common.overwrite_mode)
        .await?;
    handle_output_overwrite(&config.common.output, config.common.overwrite_mode, &formatter)?;

    let reader = SourceReader::new();
    let (results, stats) = reader
        .read_all(&config.inputs, config.effective_jobs())
        .await;
    display_read_statistics(&formatter, &stats);

    // Any read failure aborts before merging starts
    let sources: Vec<SourceFile> = results.into_iter().collect::<Result<_, _>>()?;

    formatter.info("Merging documents...");
    let merged = merge_documents(&sources)?;

    let writer = ArtifactWriter::new();
    let write_stats = writer.save_with_stats(&merged, &config.common.output).await?;

    formatter.success(&format!(
        "Merged {} file(s) into {} ({})",
        sources.len(),
        config.common.output.display(),
        write_stats.format_file_size()
    ));

    if formatter.is_verbose() {
        formatter.detail("Input files", &sources.len().to_string());
        formatter.detail("Total pages", &summary.total_pages.to_string());
        formatter.detail("Input size", &summary.format_total_size());
        formatter.detail("Output size", &write_stats.format_file_size());
        formatter.detail(
            "Write time",
            &format!("{:.2}s", write_stats.write_time.as_secs_f64()),
        );
    }

    Ok(())
}

async fn run_split(config: SplitConfig) -> Result<(), PdfOpsError> {
    let formatter = OutputFormatter::new(config.common.quiet, config.common.verbose);

    let validator = Validator::new();
    let validation = validator.validate_file(&config.input).await?;
    formatter.debug(&format!(
        "Validated {}: {} pages",
        config.input.display(),
        validation.page_count
    ));

    validator
        .validate_output(&config.common.output, config.common.overwrite_mode)
        .await?;
    handle_output_overwrite(&config.common.output, config.common.overwrite_mode, &formatter)?;

    let reader = SourceReader::new();
    let source = reader.read(&config.input).await?;

    formatter.info(&format!(
        "Extracting pages {}-{}...",
        config.range.from(),
        config.range.to()
    ));
    let excerpt = extract_range(&source, &config.range)?;

    let writer = ArtifactWriter::new();
    let write_stats = writer.save_with_stats(&excerpt, &config.common.output).await?;

    formatter.success(&format!(
        "Extracted {} page(s) into {} ({})",
        config.range.len(),
        config.common.output.display(),
        write_stats.format_file_size()
    ));

    Ok(())
}

async fn run_compress(config: CompressConfig) -> Result<(), PdfOpsError> {
    let formatter = OutputFormatter::new(config.common.quiet, config.common.verbose);

    let validator = Validator::new();
    validator.validate_file(&config.input).await?;

    validator
        .validate_output(&config.common.output, config.common.overwrite_mode)
        .await?;
    handle_output_overwrite(&config.common.output, config.common.overwrite_mode, &formatter)?;

    let reader = SourceReader::new();
    let source = reader.read(&config.input).await?;

    formatter.info("Compressing document...");
    let outcome = compress_document(&source)?;

    let writer = ArtifactWriter::new();
    writer.save(&outcome.bytes, &config.common.output).await?;

    if config.json {
        let report = serde_json::to_string_pretty(&outcome.report())
            .map_err(|e| PdfOpsError::other(format!("Failed to encode report: {e}")))?;
        println!("{report}");
    } else {
        formatter.success(&format!(
            "Compressed {} -> {}",
            config.input.display(),
            config.common.output.display()
        ));
        formatter.info(&format!("Original size: {:.2} KB", outcome.original_kb()));
        formatter.info(&format!(
            "Compressed size: {:.2} KB",
            outcome.compressed_kb()
        ));
    }

    Ok(())
}

/// Handle output file overwrite scenarios.
fn handle_output_overwrite(
    output: &PathBuf,
    mode: OverwriteMode,
    formatter: &OutputFormatter,
) -> Result<(), PdfOpsError> {
    if !output.exists() {
        return Ok(());
    }

    match mode {
        OverwriteMode::Force => Ok(()),
        OverwriteMode::NoClobber => Err(PdfOpsError::output_exists(output.clone())),
        OverwriteMode::Prompt => {
            // In quiet mode there is no prompt to answer, treat as no-clobber
            if formatter.is_quiet() {
                return Err(PdfOpsError::output_exists(output.clone()));
            }

            formatter.warning(&format!("Output file already exists: {}", output.display()));

            use std::io::{self, Write};
            print!("Overwrite? [y/N]: ");
            io::stdout().flush().ok();

            let mut response = String::new();
            io::stdin()
                .read_line(&mut response)
                .map_err(|err| PdfOpsError::other(format!("Failed to read input: {err}")))?;

            let response = response.trim().to_lowercase();
            if response == "y" || response == "yes" {
                Ok(())
            } else {
                Err(PdfOpsError::Cancelled)
            }
        }
    }
}
