mod cli;
mod commands;
mod folders;
mod menu;
mod pdf;
mod ranges;
mod raster;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::Cli;
use folders::Folders;
use menu::Choice;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let folders = Folders::new(cli.inbox, cli.outbox);
    folders.ensure_exist()?;

    println!("{}", "Welcome to pdftray!".cyan());
    println!(
        "{}",
        format!("Put input PDFs in the '{}' folder.", folders.inbox.display()).yellow()
    );
    println!(
        "{}",
        format!(
            "Output files are saved in the '{}' folder.",
            folders.outbox.display()
        )
        .yellow()
    );

    loop {
        menu::print_menu();
        let answer = match menu::read_line("Enter your choice (1-4)") {
            Ok(answer) => answer,
            // stdin closed; nothing more to ask
            Err(_) => break,
        };

        let outcome = match menu::parse_choice(&answer) {
            Some(Choice::Reduce) => reduce(&folders),
            Some(Choice::Extract) => extract(&folders),
            Some(Choice::Merge) => merge(&folders),
            Some(Choice::Exit) => break,
            None => {
                println!(
                    "{}",
                    "Invalid choice. Please enter a number between 1 and 4.".red()
                );
                continue;
            }
        };

        // A failed operation reports itself; the menu stays up
        if let Err(err) = outcome {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
        }
    }

    println!("\n{}", "Exiting... Thank you for using pdftray!".green());
    Ok(())
}

fn reduce(folders: &Folders) -> Result<()> {
    let pdfs = folders.pdfs_in_inbox()?;
    let input = match menu::select_pdf(&folders.inbox, &pdfs, "reduction")? {
        Some(name) => name,
        None => return Ok(()),
    };

    println!("\n{}", format!("Processing {}...", input).cyan());
    commands::reduce::run(folders, &input)
}

fn extract(folders: &Folders) -> Result<()> {
    let pdfs = folders.pdfs_in_inbox()?;
    let input = match menu::select_pdf(&folders.inbox, &pdfs, "page extraction")? {
        Some(name) => name,
        None => return Ok(()),
    };
    println!("{}", format!("Selected: {}", input).cyan());

    let requested =
        menu::prompt_ranges("Enter page ranges (e.g., '12-123,23-222' or '1-3,5,7-9')")?;
    println!("\n{}", format!("Extracting pages from {}...", input).cyan());
    commands::extract::run(folders, &input, &requested)
}

fn merge(folders: &Folders) -> Result<()> {
    let pdfs = folders.pdfs_in_inbox()?;
    if pdfs.is_empty() {
        println!(
            "{}",
            format!("No PDF files found in '{}' folder!", folders.inbox.display()).red()
        );
        return Ok(());
    }

    println!("\n{}", "Available PDFs for merging:".cyan());
    menu::list_pdfs(&pdfs);

    let requested = menu::prompt_ranges(&format!(
        "Enter PDF selection ranges (e.g., '1-3,5-6,7,8' from 1-{})",
        pdfs.len()
    ))?;

    let output = loop {
        let answer = menu::read_line("Enter output filename (saved in the outbox folder)")?;
        if !answer.is_empty() {
            break folders::ensure_pdf_extension(&answer);
        }
        println!("{}", "Please enter a filename.".red());
    };

    commands::merge::run(folders, &pdfs, &requested, &output)
}
