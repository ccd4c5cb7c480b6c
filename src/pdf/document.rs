use anyhow::{Context, Result};
use lopdf::Document;
use std::path::Path;

/// A PDF open for page manipulation.
///
/// lopdf numbers pages from 1; the methods here take the 0-based indices
/// used across this crate and translate at the boundary.
#[derive(Debug)]
pub struct PdfDocument {
    pub doc: Document,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let doc = Document::load(path)
            .with_context(|| format!("Failed to open PDF: {}", path.display()))?;
        log::debug!("opened {} with {} pages", path.display(), doc.get_pages().len());
        Ok(PdfDocument { doc })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Copy the 0-based inclusive span [from, to] into a new document.
    pub fn extract_span(&self, from: u32, to: u32) -> Result<PdfDocument> {
        let total = self.page_count();
        if from > to || to >= total {
            anyhow::bail!(
                "Span {}-{} is out of range (document has {} pages)",
                from,
                to,
                total
            );
        }

        // Clone, then delete everything outside the span
        let mut new_doc = self.doc.clone();
        let pages_to_delete: Vec<u32> = (1..=total)
            .filter(|&number| number < from + 1 || number > to + 1)
            .collect();
        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
        }
        new_doc.prune_objects();

        Ok(PdfDocument { doc: new_doc })
    }

    /// Delete the page at a 0-based index; later pages shift left by one.
    pub fn delete_page(&mut self, index: u32) -> Result<()> {
        let total = self.page_count();
        if index >= total {
            anyhow::bail!(
                "Page index {} is out of range (document has {} pages)",
                index,
                total
            );
        }
        self.doc.delete_pages(&[index + 1]);
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.doc
            .save(path)
            .with_context(|| format!("Failed to save PDF: {}", path.display()))?;
        Ok(())
    }
}
