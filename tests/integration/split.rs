//! Integration tests for page-range extraction end to end.

use pdfops::config::PageRange;
use pdfops::error::PdfOpsError;
use pdfops::io::{ArtifactWriter, SourceReader};
use pdfops::ops::extract_range;
use rstest::rstest;
use tempfile::TempDir;

use crate::common::{count_pages, page_markers, write_pdf};

#[tokio::test]
async fn test_split_middle_range_to_disk() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(&dir, "doc.pdf", 10, "Doc");

    let reader = SourceReader::new();
    let source = reader.read(&input).await.unwrap();

    let range = PageRange::new(4, 7).unwrap();
    let excerpt = extract_range(&source, &range).unwrap();

    let output = dir.path().join("excerpt.pdf");
    let writer = ArtifactWriter::new();
    writer.save(&excerpt, &output).await.unwrap();

    let written = std::fs::read(&output).unwrap();
    assert_eq!(count_pages(&written), 4);
    assert_eq!(
        page_markers(&written),
        vec!["Doc-Page-4", "Doc-Page-5", "Doc-Page-6", "Doc-Page-7"]
    );
}

#[tokio::test]
async fn test_split_source_unchanged_on_disk() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(&dir, "doc.pdf", 5, "Doc");
    let before = std::fs::read(&input).unwrap();

    let reader = SourceReader::new();
    let source = reader.read(&input).await.unwrap();
    let _ = extract_range(&source, &PageRange::new(2, 4).unwrap()).unwrap();

    let after = std::fs::read(&input).unwrap();
    assert_eq!(before, after);
}

#[rstest]
#[case(3, 2)]
#[case(6, 6)]
#[case(1, 9)]
#[case(8, 9)]
#[tokio::test]
async fn test_split_invalid_ranges_rejected(#[case] from: u32, #[case] to: u32) {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(&dir, "doc.pdf", 5, "Doc");

    let reader = SourceReader::new();
    let source = reader.read(&input).await.unwrap();

    let range = PageRange::new(from, to).unwrap();
    let result = extract_range(&source, &range);
    assert!(matches!(
        result.unwrap_err(),
        PdfOpsError::InvalidPageRange { page_count: 5, .. }
    ));
}

#[rstest]
#[case(1, 1, vec!["Doc-Page-1"])]
#[case(5, 5, vec!["Doc-Page-5"])]
#[case(1, 5, vec!["Doc-Page-1", "Doc-Page-2", "Doc-Page-3", "Doc-Page-4", "Doc-Page-5"])]
#[tokio::test]
async fn test_split_boundary_ranges(
    #[case] from: u32,
    #[case] to: u32,
    #[case] expected: Vec<&str>,
) {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(&dir, "doc.pdf", 5, "Doc");

    let reader = SourceReader::new();
    let source = reader.read(&input).await.unwrap();

    let range = PageRange::new(from, to).unwrap();
    let excerpt = extract_range(&source, &range).unwrap();
    assert_eq!(page_markers(&excerpt), expected);
}
