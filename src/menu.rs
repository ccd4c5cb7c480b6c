use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

use crate::ranges::{self, Range};

const RULE: &str = "==================================================";

/// The action picked from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Reduce,
    Extract,
    Merge,
    Exit,
}

pub fn print_menu() {
    println!("\n{}", RULE.magenta());
    println!("{}", "                 PDF UTILITY".magenta());
    println!("{}", RULE.magenta());
    println!("{} Reduce PDF (remove redundant pages)", "1.".cyan());
    println!("{} Extract pages (multiple ranges)", "2.".cyan());
    println!("{} Merge PDFs (select from inbox)", "3.".cyan());
    println!("{} Exit", "4.".cyan());
    println!("{}", RULE.magenta());
}

/// Map a menu answer to an action; anything but 1-4 is rejected.
pub fn parse_choice(answer: &str) -> Option<Choice> {
    match answer.trim() {
        "1" => Some(Choice::Reduce),
        "2" => Some(Choice::Extract),
        "3" => Some(Choice::Merge),
        "4" => Some(Choice::Exit),
        _ => None,
    }
}

/// Print a prompt and read one trimmed line from stdin.
/// Fails when stdin is closed.
pub fn read_line(prompt: &str) -> Result<String> {
    print!("{} ", format!("{}:", prompt).green());
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    if bytes == 0 {
        return Err(anyhow!("Input ended"));
    }
    Ok(line.trim().to_string())
}

/// List the inbox PDFs and have the user pick one by number.
/// Returns None when the inbox holds no PDFs at all.
pub fn select_pdf(inbox: &Path, pdfs: &[String], action: &str) -> Result<Option<String>> {
    if pdfs.is_empty() {
        println!(
            "{}",
            format!("No PDF files found in '{}' folder!", inbox.display()).red()
        );
        return Ok(None);
    }

    println!(
        "\n{}",
        format!("Available PDFs in '{}':", inbox.display()).cyan()
    );
    list_pdfs(pdfs);

    loop {
        let answer = read_line(&format!("\nSelect PDF for {} (1-{})", action, pdfs.len()))?;
        match answer.parse::<usize>() {
            Ok(number) if (1..=pdfs.len()).contains(&number) => {
                return Ok(Some(pdfs[number - 1].clone()));
            }
            Ok(_) => println!(
                "{}",
                format!("Invalid choice. Please enter a number between 1 and {}", pdfs.len()).red()
            ),
            Err(_) => println!("{}", "Invalid input. Please enter a number.".red()),
        }
    }
}

pub fn list_pdfs(pdfs: &[String]) {
    for (number, name) in pdfs.iter().enumerate() {
        println!("{} {}", format!("{}.", number + 1).yellow(), name);
    }
}

/// Ask for a range expression until one parses; errors re-prompt with
/// example syntax.
pub fn prompt_ranges(prompt: &str) -> Result<Vec<Range>> {
    loop {
        let answer = read_line(prompt)?;
        match ranges::parse_ranges(&answer) {
            Ok(parsed) => return Ok(parsed),
            Err(err) => {
                println!("{} {}", "Error:".red(), err);
                println!(
                    "{}",
                    "Examples: '12-123,23-222' or '1-3,5-6,7,8'".yellow()
                );
            }
        }
    }
}
