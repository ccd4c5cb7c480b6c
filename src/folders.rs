use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The inbox/outbox pair every operation reads from and writes to.
pub struct Folders {
    pub inbox: PathBuf,
    pub outbox: PathBuf,
}

impl Folders {
    pub fn new(inbox: PathBuf, outbox: PathBuf) -> Self {
        Folders { inbox, outbox }
    }

    /// Create both folders if they are missing.
    pub fn ensure_exist(&self) -> Result<()> {
        for folder in [&self.inbox, &self.outbox] {
            std::fs::create_dir_all(folder)
                .with_context(|| format!("Failed to create folder: {}", folder.display()))?;
        }
        Ok(())
    }

    /// File names of the PDFs sitting directly in the inbox, sorted by name.
    pub fn pdfs_in_inbox(&self) -> Result<Vec<String>> {
        let mut pdfs = Vec::new();

        for entry in WalkDir::new(&self.inbox)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry
                .with_context(|| format!("Failed to read folder: {}", self.inbox.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if name.to_lowercase().ends_with(".pdf") {
                pdfs.push(name);
            }
        }

        Ok(pdfs)
    }

    pub fn inbox_path(&self, name: &str) -> PathBuf {
        self.inbox.join(name)
    }

    pub fn outbox_path(&self, name: &str) -> PathBuf {
        self.outbox.join(name)
    }
}

/// Append ".pdf" unless the name already ends with it (any case).
pub fn ensure_pdf_extension(name: &str) -> String {
    if name.to_lowercase().ends_with(".pdf") {
        name.to_string()
    } else {
        format!("{}.pdf", name)
    }
}

/// Stem used when deriving output names from an input file name.
pub fn file_stem(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}
