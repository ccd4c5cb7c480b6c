use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdftray")]
#[command(about = "Menu-driven PDF utility: reduce redundant pages, extract ranges, merge")]
#[command(version)]
pub struct Cli {
    /// Folder scanned for input PDFs
    #[arg(long, default_value = "inbox")]
    pub inbox: PathBuf,

    /// Folder that receives output PDFs
    #[arg(long, default_value = "outbox")]
    pub outbox: PathBuf,
}
