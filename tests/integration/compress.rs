//! Integration tests for compression end to end.

use pdfops::io::{ArtifactWriter, SourceReader};
use pdfops::ops::compress_document;
use tempfile::TempDir;

use crate::common::{count_pages, page_markers, write_pdf};

#[tokio::test]
async fn test_compress_to_disk() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(&dir, "doc.pdf", 3, "Doc");
    let input_size = std::fs::metadata(&input).unwrap().len();

    let reader = SourceReader::new();
    let source = reader.read(&input).await.unwrap();

    let outcome = compress_document(&source).unwrap();
    assert_eq!(outcome.original_size, input_size);

    let output = dir.path().join("compressed.pdf");
    let writer = ArtifactWriter::new();
    writer.save(&outcome.bytes, &output).await.unwrap();

    let written = std::fs::read(&output).unwrap();
    assert_eq!(written.len() as u64, outcome.compressed_size);
    assert_eq!(count_pages(&written), 3);
}

#[tokio::test]
async fn test_compress_preserves_content() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(&dir, "doc.pdf", 2, "Keep");

    let reader = SourceReader::new();
    let source = reader.read(&input).await.unwrap();

    let outcome = compress_document(&source).unwrap();
    assert_eq!(
        page_markers(&outcome.bytes),
        vec!["Keep-Page-1", "Keep-Page-2"]
    );
}

#[tokio::test]
async fn test_compress_report_matches_sizes() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(&dir, "doc.pdf", 1, "Doc");

    let reader = SourceReader::new();
    let source = reader.read(&input).await.unwrap();

    let outcome = compress_document(&source).unwrap();
    let report = outcome.report();

    assert_eq!(report.original_bytes, outcome.original_size);
    assert_eq!(report.compressed_bytes, outcome.compressed_size);

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["originalKb"].is_number());
    assert!(json["compressedKb"].is_number());
}
