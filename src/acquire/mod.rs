// file: src/acquire/mod.rs
// description: raw text acquisition from resume files
// reference: one acquirer per supported document format

pub mod docx;
pub mod pdf;

pub use docx::DocxAcquirer;
pub use pdf::PdfAcquirer;

use crate::error::Result;
use crate::models::DocumentFormat;
use std::path::Path;

/// Turns a file on disk into raw text.
pub trait TextAcquirer {
    fn format(&self) -> DocumentFormat;

    fn acquire(&self, path: &Path) -> Result<String>;
}
