use anyhow::Result;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::BTreeMap;

use super::PdfDocument;

/// Concatenate documents into one, keeping pages in the order given.
///
/// Every source document is renumbered into a single id space, then a fresh
/// page tree and catalog are built over the collected pages. Follows the
/// recipe from the lopdf merge example.
pub fn concat(documents: Vec<PdfDocument>) -> Result<PdfDocument> {
    if documents.is_empty() {
        anyhow::bail!("No documents to merge");
    }

    let mut max_id = 1;
    let mut page_ids: Vec<ObjectId> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();
    let mut inherited = Dictionary::new();

    for document in documents {
        let mut doc = document.doc;

        // Renumber into the shared id space
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        fold_root_attributes(&doc, &mut inherited);
        page_ids.extend(doc.get_pages().into_iter().map(|(_, id)| id));
        objects.extend(doc.objects);
    }

    let mut merged = Document::with_version("1.5");
    merged.objects.extend(objects);
    // Keep new_object_id() clear of the ids collected above
    merged.max_id = max_id - 1;

    let pages_id = merged.new_object_id();
    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();

    let mut pages = inherited;
    pages.set("Type", Object::Name(b"Pages".to_vec()));
    pages.set("Count", Object::Integer(page_ids.len() as i64));
    pages.set("Kids", Object::Array(kids));

    let catalog_id = merged.new_object_id();
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));

    merged.objects.insert(pages_id, Object::Dictionary(pages));
    merged.objects.insert(catalog_id, Object::Dictionary(catalog));
    merged.trailer.set("Root", Object::Reference(catalog_id));

    // Point every page at the rebuilt page tree
    for &page_id in &page_ids {
        if let Ok(Object::Dictionary(dict)) = merged.get_object_mut(page_id) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    // The source page trees and catalogs are unreachable from the new root
    merged.prune_objects();
    merged.compress();
    Ok(PdfDocument { doc: merged })
}

/// Carry inheritable attributes (Resources, Rotate, the boxes) from a
/// source's page tree root into the rebuilt one. The first document to set
/// a key wins, as in the lopdf merge example.
fn fold_root_attributes(doc: &Document, inherited: &mut Dictionary) {
    let root = doc
        .catalog()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)
        .and_then(|id| doc.get_dictionary(id));
    if let Ok(root) = root {
        for (key, value) in root.iter() {
            if matches!(key.as_slice(), b"Type" | b"Kids" | b"Count" | b"Parent") {
                continue;
            }
            if inherited.get(key).is_err() {
                inherited.set(key.clone(), value.clone());
            }
        }
    }
}
