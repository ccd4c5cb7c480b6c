use anyhow::Result;
use colored::Colorize;

use crate::folders::{file_stem, Folders};
use crate::pdf::{merge, PdfDocument};
use crate::ranges::{self, Clamp, Range};

/// Extract each requested page range into its own PDF, then concatenate
/// the extracted spans into one cumulative PDF.
///
/// Individual files are named after the clamped bounds
/// (`page-8-10-<stem>.pdf`); the cumulative file is named after the ranges
/// as requested (`page-8-15,1-3-<stem>.pdf`).
pub fn run(folders: &Folders, input: &str, requested: &[Range]) -> Result<()> {
    let stem = file_stem(input);
    let doc = PdfDocument::open(folders.inbox_path(input))?;
    let total = doc.page_count();

    let mut extracted: Vec<PdfDocument> = Vec::new();
    for &range in requested {
        let (start, end) = match fit_to_document(range, total) {
            Some(bounds) => bounds,
            None => continue,
        };

        // Planner output is 1-based; the engine takes 0-based indices
        let mut span = doc.extract_span(start - 1, end - 1)?;
        let name = format!("page-{}-{}-{}.pdf", start, end, stem);
        span.save(folders.outbox_path(&name))?;
        println!(
            "{}",
            format!("Pages {}-{} extracted to {}", start, end, name).green()
        );
        extracted.push(span);
    }

    if extracted.is_empty() {
        println!("{}", "No valid pages were extracted!".red());
        return Ok(());
    }

    let individual = extracted.len();
    let cumulative = format!("page-{}-{}.pdf", ranges::label(requested), stem);
    let mut merged = merge::concat(extracted)?;
    merged.save(folders.outbox_path(&cumulative))?;
    println!(
        "{}",
        format!("Merged extraction saved as: {}", cumulative).cyan()
    );

    println!(
        "\n{}",
        format!("Created {} PDF file(s) in the outbox folder!", individual + 1).cyan()
    );
    println!("{}", format!("Individual extractions: {}", individual).yellow());
    println!("{}", "Merged extraction: 1".yellow());
    Ok(())
}

/// Clamp a range against the page count, reporting every adjustment.
/// Returns the usable 1-based bounds, or None when the range is skipped.
fn fit_to_document(range: Range, total: u32) -> Option<(u32, u32)> {
    match ranges::clamp(range, total) {
        Clamp::Skip => {
            println!(
                "{}",
                format!("Warning: Skipping range {} (beyond document)", range).yellow()
            );
            None
        }
        Clamp::Fit {
            start,
            end,
            floored,
            capped,
        } => {
            if floored {
                println!(
                    "{}",
                    format!("Warning: Start page {} adjusted to 1", range.start).yellow()
                );
            }
            if capped {
                println!(
                    "{}",
                    format!("Warning: End page {} adjusted to {}", range.end, total).yellow()
                );
            }
            Some((start, end))
        }
    }
}
