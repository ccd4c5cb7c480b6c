use anyhow::{ensure, Result};
use colored::Colorize;
use std::path::Path;

use crate::folders::{file_stem, Folders};
use crate::pdf::render::Renderer;
use crate::pdf::PdfDocument;
use crate::raster;

/// Remove every page whose visible content reappears unchanged on the
/// following page, and save the result as `reduced-<stem>.pdf`.
pub fn run(folders: &Folders, input: &str) -> Result<()> {
    let input_path = folders.inbox_path(input);
    let output = format!("reduced-{}.pdf", file_stem(input));

    println!("{}", "Scanning pages to detect redundancy...".cyan());
    let (scanned_pages, redundant) = scan_for_redundant(&input_path)?;
    println!(
        "{}",
        format!("{} redundant pages found...", redundant.len()).yellow()
    );

    let mut doc = PdfDocument::open(&input_path)?;
    let initial = doc.page_count();
    ensure!(
        initial == scanned_pages,
        "Renderer saw {} pages but the document reports {}",
        scanned_pages,
        initial
    );

    delete_in_order(&mut doc, &redundant)?;
    let remaining = doc.page_count();
    doc.save(folders.outbox_path(&output))?;

    println!(
        "{}",
        format!(
            "{} saved successfully with {:.2}% reduction in the outbox folder!",
            output,
            reduction_ratio(initial, remaining)
        )
        .green()
    );
    Ok(())
}

/// Render consecutive page pairs and collect the 0-based indices of pages
/// made redundant by their successor. The render handle closes when the
/// scan finishes, before the document is reopened for editing.
fn scan_for_redundant(path: &Path) -> Result<(u32, Vec<u32>)> {
    let renderer = Renderer::new()?;
    let rendered = renderer.open(path)?;
    let page_count = rendered.page_count();
    ensure!(page_count > 0, "Document has no pages");

    let bar = super::progress_bar(page_count as u64, "Scanning pages");
    let mut redundant = Vec::new();
    for index in 0..page_count {
        if index + 1 < page_count {
            let current = rendered.rasterize(index)?;
            let next = rendered.rasterize(index + 1)?;
            if raster::is_redundant(&current, &next) {
                redundant.push(index);
            }
        }
        bar.inc(1);
    }
    bar.finish();

    Ok((page_count, redundant))
}

/// Delete pages by ascending original 0-based index, compensating for the
/// leftward shift caused by each earlier deletion.
fn delete_in_order(doc: &mut PdfDocument, indices: &[u32]) -> Result<()> {
    for (deleted, &index) in indices.iter().enumerate() {
        doc.delete_page(index - deleted as u32)?;
    }
    Ok(())
}

/// Percentage of pages removed, as reported after a reduction.
fn reduction_ratio(initial: u32, remaining: u32) -> f64 {
    100.0 - (remaining as f64 / initial as f64) * 100.0
}
