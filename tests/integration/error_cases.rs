//! Integration tests for failure behavior.

use pdfops::config::{OverwriteMode, PageRange};
use pdfops::document::SourceFile;
use pdfops::error::PdfOpsError;
use pdfops::io::SourceReader;
use pdfops::ops::{compress_document, extract_range, merge_documents};
use pdfops::validation::Validator;
use std::path::Path;
use tempfile::TempDir;

use crate::common::write_pdf;

#[tokio::test]
async fn test_merge_aborts_on_corrupt_source() {
    let dir = TempDir::new().unwrap();
    let good = write_pdf(&dir, "good.pdf", 2, "Good");
    let bad = dir.path().join("bad.pdf");
    std::fs::write(&bad, b"definitely not a pdf").unwrap();

    let reader = SourceReader::new();
    let sources = vec![
        reader.read(&good).await.unwrap(),
        reader.read(&bad).await.unwrap(),
    ];

    let result = merge_documents(&sources);
    assert!(matches!(
        result.unwrap_err(),
        PdfOpsError::FailedToLoadDocument { .. }
    ));
}

#[test]
fn test_merge_no_sources() {
    let result = merge_documents(&[]);
    assert!(matches!(result.unwrap_err(), PdfOpsError::EmptyInput));
}

#[test]
fn test_split_corrupt_source() {
    let source = SourceFile::new("bad.pdf", b"garbage".to_vec());
    let result = extract_range(&source, &PageRange::new(1, 1).unwrap());
    assert!(result.is_err());
}

#[test]
fn test_compress_corrupt_source() {
    let source = SourceFile::new("bad.pdf", b"garbage".to_vec());
    let result = compress_document(&source);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_validator_rejects_missing_input() {
    let validator = Validator::new();
    let result = validator
        .validate_file(Path::new("/no/such/file.pdf"))
        .await;
    assert!(matches!(
        result.unwrap_err(),
        PdfOpsError::FileNotFound { .. }
    ));
}

#[tokio::test]
async fn test_validator_rejects_existing_output_no_clobber() {
    let dir = TempDir::new().unwrap();
    let output = write_pdf(&dir, "existing.pdf", 1, "Old");

    let validator = Validator::new();
    let result = validator
        .validate_output(&output, OverwriteMode::NoClobber)
        .await;
    assert!(matches!(
        result.unwrap_err(),
        PdfOpsError::OutputExists { .. }
    ));
}

#[tokio::test]
async fn test_error_exit_codes_are_stable() {
    let dir = TempDir::new().unwrap();
    let reader = SourceReader::new();

    let not_found = reader
        .read(&dir.path().join("missing.pdf"))
        .await
        .unwrap_err();
    assert_eq!(not_found.exit_code(), 2);

    let bad = dir.path().join("bad.pdf");
    std::fs::write(&bad, b"junk").unwrap();
    let source = reader.read(&bad).await.unwrap();
    let load_err = compress_document(&source).unwrap_err();
    assert_eq!(load_err.exit_code(), 3);
}
