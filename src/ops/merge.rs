//! Document merge operation.
//!
//! Concatenates the pages of an ordered list of source documents into one
//! output document. Page order within each source is preserved; source order
//! determines the overall page order.

use lopdf::{Document, Object, ObjectId};

use crate::document::{SourceFile, load_document, save_document};
use crate::error::{PdfOpsError, Result};

/// Merge source documents into a single PDF, returned as bytes.
///
/// The first document becomes the base; every subsequent document has its
/// object IDs renumbered past the base's maximum, its objects imported, and
/// its pages appended to the base's page tree in order.
///
/// # Errors
///
/// - [`PdfOpsError::EmptyInput`] if `sources` is empty.
/// - [`PdfOpsError::FailedToLoadDocument`] if any source fails to parse; the
///   whole merge aborts and no partial output is produced.
///
/// # Examples
///
/// ```no_run
/// use pdfops::document::SourceFile;
/// use pdfops::ops::merge_documents;
///
/// # fn example(a: Vec<u8>, b: Vec<u8>) -> pdfops::Result<()> {
/// let sources = vec![SourceFile::new("a.pdf", a), SourceFile::new("b.pdf", b)];
/// let merged = merge_documents(&sources)?;
/// # Ok(())
/// # }
/// ```
pub fn merge_documents(sources: &[SourceFile]) -> Result<Vec<u8>> {
    if sources.is_empty() {
        return Err(PdfOpsError::EmptyInput);
    }

    // Load everything up front so a parse failure in any source aborts
    // before assembly starts.
    let mut loaded = Vec::with_capacity(sources.len());
    for source in sources {
        loaded.push(load_document(&source.bytes, &source.name)?);
    }

    let mut docs = loaded.into_iter();
    let mut merged = match docs.next() {
        Some(doc) => doc,
        None => return Err(PdfOpsError::EmptyInput),
    };
    let mut max_id = merged.max_id;

    for mut doc in docs {
        // Renumber objects to avoid ID conflicts with what is already merged
        doc.renumber_objects_with(max_id + 1);
        max_id = doc.max_id;

        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();

        merged.objects.extend(doc.objects);

        append_pages(&mut merged, &page_ids)?;
    }

    merged.compress();
    merged.renumber_objects();

    save_document(merged)
}

/// Append pages to the merged document's page tree.
///
/// Reparents each appended page to the target's root page node, then extends
/// the Kids array and Count.
fn append_pages(merged: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
    let catalog = merged
        .catalog_mut()
        .map_err(|e| PdfOpsError::operation_failed(format!("Failed to get catalog: {e}")))?;

    let pages_id = catalog
        .get(b"Pages")
        .and_then(|p| p.as_reference())
        .map_err(|e| {
            PdfOpsError::operation_failed(format!("Failed to get pages reference: {e}"))
        })?;

    for &page_id in page_ids {
        let page_obj = merged
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

    let pages_obj = merged
        .get_object_mut(pages_id)
        .map_err(|e| PdfOpsError::operation_failed(format!("Failed to get pages object: {e}")))?;

    if let Object::Dictionary(dict) = pages_obj {
        let kids = dict
            .get_mut(b"Kids")
            .map_err(|_| PdfOpsError::operation_failed("Pages dictionary missing Kids array"))?;

        if let Object::Array(kids_array) = kids {
            for &page_id in page_ids {
                kids_array.push(Object::Reference(page_id));
            }
        } else {
            return Err(PdfOpsError::operation_failed("Kids is not an array"));
        }

        let current_count = dict.get(b"Count").and_then(|c| c.as_i64()).unwrap_or(0);
        dict.set("Count", Object::Integer(current_count + page_ids.len() as i64));
    } else {
        return Err(PdfOpsError::operation_failed(
            "Pages object is not a dictionary",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{build_pdf, page_markers};

    fn source(name: &str, pages: u32) -> SourceFile {
        SourceFile::new(name, build_pdf(pages, name))
    }

    #[test]
    fn test_merge_empty_fails() {
        let result = merge_documents(&[]);
        assert!(matches!(result.unwrap_err(), PdfOpsError::EmptyInput));
    }

    #[test]
    fn test_merge_single_document() {
        let merged = merge_documents(&[source("Solo", 1)]).unwrap();
        let doc = Document::load_mem(&merged).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_merge_two_documents_combines_pages() {
        let merged = merge_documents(&[source("A", 3), source("B", 2)]).unwrap();
        let doc = Document::load_mem(&merged).unwrap();
        assert_eq!(doc.get_pages().len(), 5);
    }

    #[test]
    fn test_merge_preserves_page_order() {
        let merged = merge_documents(&[source("First", 2), source("Second", 1)]).unwrap();

        let markers = page_markers(&merged);
        assert_eq!(
            markers,
            vec!["First-Page-1", "First-Page-2", "Second-Page-1"]
        );
    }

    #[test]
    fn test_merge_many_documents() {
        let sources: Vec<SourceFile> = (0..5).map(|i| source(&format!("Doc{i}"), 1)).collect();
        let merged = merge_documents(&sources).unwrap();

        let doc = Document::load_mem(&merged).unwrap();
        assert_eq!(doc.get_pages().len(), 5);
    }

    #[test]
    fn test_merge_invalid_source_aborts() {
        let sources = vec![source("Good", 2), SourceFile::new("bad.pdf", b"junk".to_vec())];
        let result = merge_documents(&sources);
        assert!(matches!(
            result.unwrap_err(),
            PdfOpsError::FailedToLoadDocument { .. }
        ));
    }

    #[test]
    fn test_merge_output_is_valid_pdf() {
        let merged = merge_documents(&[source("X", 2), source("Y", 2)]).unwrap();
        let doc = Document::load_mem(&merged);
        assert!(doc.is_ok());
    }

    #[test]
    fn test_merge_does_not_mutate_sources() {
        let a = source("A", 2);
        let original = a.bytes.clone();
        let _ = merge_documents(&[a.clone(), source("B", 1)]).unwrap();
        assert_eq!(a.bytes, original);
    }
}
