//! Integration tests for merging documents end to end.

use pdfops::document::SourceFile;
use pdfops::io::{ArtifactWriter, SourceReader};
use pdfops::ops::merge_documents;
use tempfile::TempDir;

use crate::common::{count_pages, page_markers, write_pdf};

#[tokio::test]
async fn test_merge_from_disk_to_disk() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", 2, "A");
    let b = write_pdf(&dir, "b.pdf", 3, "B");

    let reader = SourceReader::new();
    let sources = vec![
        reader.read(&a).await.unwrap(),
        reader.read(&b).await.unwrap(),
    ];

    let merged = merge_documents(&sources).unwrap();
    assert_eq!(count_pages(&merged), 5);

    let output = dir.path().join("merged.pdf");
    let writer = ArtifactWriter::new();
    writer.save(&merged, &output).await.unwrap();

    let written = std::fs::read(&output).unwrap();
    assert_eq!(count_pages(&written), 5);
}

#[tokio::test]
async fn test_merge_order_follows_input_order() {
    let dir = TempDir::new().unwrap();
    let paths = vec![
        write_pdf(&dir, "one.pdf", 1, "One"),
        write_pdf(&dir, "two.pdf", 2, "Two"),
        write_pdf(&dir, "three.pdf", 1, "Three"),
    ];

    let reader = SourceReader::new();
    let (results, _) = reader.read_all(&paths, 4).await;
    let sources: Vec<SourceFile> = results.into_iter().map(|r| r.unwrap()).collect();

    let merged = merge_documents(&sources).unwrap();
    assert_eq!(
        page_markers(&merged),
        vec!["One-Page-1", "Two-Page-1", "Two-Page-2", "Three-Page-1"]
    );
}

#[tokio::test]
async fn test_merge_many_files_parallel_read() {
    let dir = TempDir::new().unwrap();
    let paths: Vec<_> = (0..8)
        .map(|i| write_pdf(&dir, &format!("f{i}.pdf"), 1, &format!("F{i}")))
        .collect();

    let reader = SourceReader::new();
    let (results, stats) = reader.read_all(&paths, 4).await;
    assert_eq!(stats.success_count, 8);

    let sources: Vec<SourceFile> = results.into_iter().map(|r| r.unwrap()).collect();
    let merged = merge_documents(&sources).unwrap();

    assert_eq!(count_pages(&merged), 8);
    // Parallel reads must not reorder pages
    let markers = page_markers(&merged);
    for (i, marker) in markers.iter().enumerate() {
        assert_eq!(marker, &format!("F{i}-Page-1"));
    }
}

#[tokio::test]
async fn test_merge_single_source_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = write_pdf(&dir, "solo.pdf", 4, "Solo");

    let reader = SourceReader::new();
    let source = reader.read(&path).await.unwrap();

    let merged = merge_documents(&[source]).unwrap();
    assert_eq!(count_pages(&merged), 4);
    assert_eq!(
        page_markers(&merged),
        vec!["Solo-Page-1", "Solo-Page-2", "Solo-Page-3", "Solo-Page-4"]
    );
}
