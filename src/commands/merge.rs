use anyhow::Result;
use colored::Colorize;

use crate::folders::Folders;
use crate::pdf::{merge, PdfDocument};
use crate::ranges::{self, Clamp, Range};

/// Merge inbox files picked by 1-based selection ranges into a single PDF
/// saved under the outbox. The same file may be selected more than once.
pub fn run(folders: &Folders, pdfs: &[String], selections: &[Range], output: &str) -> Result<()> {
    let picks = expand_selections(selections, pdfs.len() as u32);
    if picks.is_empty() {
        println!("{}", "No valid PDFs selected for merging!".red());
        return Ok(());
    }

    println!("\n{}", "Merging PDFs in this order:".cyan());
    for (position, &number) in picks.iter().enumerate() {
        println!(
            "{} {} {}",
            format!("{}.", position + 1).yellow(),
            pdfs[(number - 1) as usize],
            format!("(was #{})", number).dimmed()
        );
    }

    let bar = super::progress_bar(picks.len() as u64, "Merging PDFs");
    let mut documents = Vec::with_capacity(picks.len());
    for &number in &picks {
        let name = &pdfs[(number - 1) as usize];
        documents.push(PdfDocument::open(folders.inbox_path(name))?);
        bar.inc(1);
    }
    bar.finish();

    let mut merged = merge::concat(documents)?;
    merged.save(folders.outbox_path(output))?;

    println!(
        "\n{}",
        format!("All selected PDFs merged into '{}' in the outbox folder!", output).green()
    );
    Ok(())
}

/// Expand selection ranges into the concrete 1-based file sequence,
/// clamping each range against the number of available files.
fn expand_selections(selections: &[Range], available: u32) -> Vec<u32> {
    let mut picks = Vec::new();

    for &range in selections {
        match ranges::clamp(range, available) {
            Clamp::Skip => {
                println!(
                    "{}",
                    format!(
                        "Warning: Range starting at {} is beyond available PDFs",
                        range.start
                    )
                    .yellow()
                );
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
                        format!("Warning: Selection start {} adjusted to 1", range.start).yellow()
                    );
                }
                if capped {
                    println!(
                        "{}",
                        format!("Warning: Selection end {} adjusted to {}", range.end, available)
                            .yellow()
                    );
                }
                picks.extend(start..=end);
            }
        }
    }

    picks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fixtures;

    fn setup() -> (tempfile::TempDir, Folders) {
        let dir = tempfile::tempdir().unwrap();
        let folders = Folders::new(dir.path().join("inbox"), dir.path().join("outbox"));
        folders.ensure_exist().unwrap();
        (dir, folders)
    }

    #[test]
    fn test_expand_selections() {
        let selections = vec![Range::new(1, 3), Range::new(5, 6), Range::new(8, 8)];
        assert_eq!(expand_selections(&selections, 8), vec![1, 2, 3, 5, 6, 8]);
    }

    #[test]
    fn test_expand_selections_allows_duplicates() {
        let selections = vec![Range::new(1, 2), Range::new(2, 3)];
        assert_eq!(expand_selections(&selections, 3), vec![1, 2, 2, 3]);
    }

    #[test]
    fn test_expand_selections_clamps() {
        let selections = vec![Range::new(0, 2), Range::new(7, 12)];
        assert_eq!(expand_selections(&selections, 8), vec![1, 2, 7, 8]);
    }

    #[test]
    fn test_expand_selections_skips_beyond() {
        let selections = vec![Range::new(9, 10)];
        assert!(expand_selections(&selections, 8).is_empty());
    }

    #[test]
    fn test_merge_selected_files_in_order() {
        let (_dir, folders) = setup();
        fixtures::document_with_pages(2, 600)
            .save(folders.inbox_path("a.pdf"))
            .unwrap();
        fixtures::document_with_pages(1, 700)
            .save(folders.inbox_path("b.pdf"))
            .unwrap();

        let pdfs = vec!["a.pdf".to_string(), "b.pdf".to_string()];
        let selections = vec![Range::new(2, 2), Range::new(1, 1)];
        run(&folders, &pdfs, &selections, "combined.pdf").unwrap();

        let merged = PdfDocument::open(folders.outbox_path("combined.pdf")).unwrap();
        assert_eq!(fixtures::widths(&merged), vec![700, 600, 601]);
    }

    #[test]
    fn test_merge_same_file_twice() {
        let (_dir, folders) = setup();
        fixtures::document_with_pages(1, 600)
            .save(folders.inbox_path("only.pdf"))
            .unwrap();

        let pdfs = vec!["only.pdf".to_string()];
        let selections = vec![Range::new(1, 1), Range::new(1, 1)];
        run(&folders, &pdfs, &selections, "doubled.pdf").unwrap();

        let merged = PdfDocument::open(folders.outbox_path("doubled.pdf")).unwrap();
        assert_eq!(fixtures::widths(&merged), vec![600, 600]);
    }

    #[test]
    fn test_merge_nothing_selected() {
        let (_dir, folders) = setup();
        let pdfs = vec!["a.pdf".to_string()];
        let selections = vec![Range::new(5, 6)];

        run(&folders, &pdfs, &selections, "combined.pdf").unwrap();
        assert!(!folders.outbox_path("combined.pdf").exists());
    }
}
