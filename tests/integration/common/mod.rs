//! Integration test helpers.
//!
//! These tests exercise the full operation flow against PDFs generated
//! in-memory, so no binary fixtures are needed.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use std::path::PathBuf;
use tempfile::TempDir;

/// Build a minimal PDF with `num_pages` pages, each carrying a text marker
/// `"{prefix}-Page-{n}"` in its content stream.
pub fn build_pdf(num_pages: u32, prefix: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids = Vec::with_capacity(num_pages as usize);
    for n in 1..=num_pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 700.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::string_literal(format!("{prefix}-Page-{n}"))],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => num_pages as i64,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("serialize test pdf");
    buffer
}

/// Write a generated PDF into a temp directory and return its path.
pub fn write_pdf(dir: &TempDir, name: &str, num_pages: u32, prefix: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, build_pdf(num_pages, prefix)).expect("write test pdf");
    path
}

/// Extract the text markers from every page of a generated PDF, in page
/// order.
pub fn page_markers(bytes: &[u8]) -> Vec<String> {
    let doc = Document::load_mem(bytes).expect("load pdf");

    let mut markers = Vec::new();
    for (_, page_id) in doc.get_pages() {
        let content = doc.get_page_content(page_id).expect("page content");
        let content = Content::decode(&content).expect("decode content");
        for op in content.operations {
            if op.operator == "Tj"
                && let Some(Object::String(text, _)) = op.operands.first()
            {
                markers.push(String::from_utf8_lossy(text).into_owned());
            }
        }
    }
    markers
}

/// Page count of a serialized PDF.
pub fn count_pages(bytes: &[u8]) -> usize {
    Document::load_mem(bytes).expect("load pdf").get_pages().len()
}
