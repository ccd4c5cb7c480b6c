pub mod document;
pub mod merge;
pub mod render;

#[cfg(test)]
pub mod fixtures;

pub use document::PdfDocument;
