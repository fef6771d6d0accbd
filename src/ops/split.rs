//! Page-range extraction.
//!
//! Produces a new document containing only the pages selected by a
//! [`PageRange`], in their original order. The source document is never
//! modified.

use lopdf::{Object, ObjectId};

use crate::config::PageRange;
use crate::document::{SourceFile, load_document, page_count, save_document};
use crate::error::{PdfOpsError, Result};

/// Extract an inclusive 1-indexed page range from a source document.
///
/// The range is validated against the document's actual page count before
/// any pages are touched; an out-of-bounds or reversed range fails with
/// [`PdfOpsError::InvalidPageRange`] and produces no output.
///
/// # Examples
///
/// ```no_run
/// use pdfops::config::PageRange;
/// use pdfops::document::SourceFile;
/// use pdfops::ops::extract_range;
///
/// # fn example(bytes: Vec<u8>) -> pdfops::Result<()> {
/// let source = SourceFile::new("report.pdf", bytes);
/// let range = PageRange::new(4, 7)?;
/// let excerpt = extract_range(&source, &range)?;
/// # Ok(())
/// # }
/// ```
pub fn extract_range(source: &SourceFile, range: &PageRange) -> Result<Vec<u8>> {
    let mut doc = load_document(&source.bytes, &source.name)?;

    let total = page_count(&doc);
    if total == 0 {
        return Err(PdfOpsError::corrupted(&source.name, "Document has no pages"));
    }
    range.validate_for(total)?;

    // get_pages keys are 1-indexed page numbers in document order
    let pages = doc.get_pages();
    let mut selected: Vec<ObjectId> = Vec::with_capacity(range.len() as usize);
    for page_number in range.pages() {
        match pages.get(&page_number) {
            Some(&id) => selected.push(id),
            None => {
                return Err(PdfOpsError::corrupted(
                    &source.name,
                    format!("Page {page_number} missing from page tree"),
                ));
            }
        }
    }

    rebuild_page_tree(&mut doc, &selected)?;

    doc.prune_objects();
    doc.compress();
    doc.renumber_objects();

    save_document(doc)
}

/// Replace the root page node's Kids with the selected pages only.
///
/// Reparents each kept page to the root page node so that pruning never
/// drops an ancestor a kept page still references.
fn rebuild_page_tree(doc: &mut lopdf::Document, selected: &[ObjectId]) -> Result<()> {
    let catalog = doc
        .catalog_mut()
        .map_err(|e| PdfOpsError::operation_failed(format!("Failed to get catalog: {e}")))?;

    let pages_id = catalog
        .get(b"Pages")
        .and_then(|p| p.as_reference())
        .map_err(|e| {
            PdfOpsError::operation_failed(format!("Failed to get pages reference: {e}"))
        })?;

    for &page_id in selected {
        let page_obj = doc
            .get_object_mut(page_id)
            .map_err(|e| PdfOpsError::operation_failed(format!("Failed to get page: {e}")))?;

        if let Object::Dictionary(dict) = page_obj {
            dict.set("Parent", Object::Reference(pages_id));
        } else {
            return Err(PdfOpsError::operation_failed(
                "Page object is not a dictionary",
            ));
        }
    }

    let pages_obj = doc
        .get_object_mut(pages_id)
        .map_err(|e| PdfOpsError::operation_failed(format!("Failed to get pages object: {e}")))?;

    if let Object::Dictionary(dict) = pages_obj {
        let kids: Vec<Object> = selected.iter().map(|&id| Object::Reference(id)).collect();
        dict.set("Kids", Object::Array(kids));
        dict.set("Count", Object::Integer(selected.len() as i64));
    } else {
        return Err(PdfOpsError::operation_failed(
            "Pages object is not a dictionary",
        ));
    }

    Ok(())
}
