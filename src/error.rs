// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarvestError>;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error extracting text from '{path}': {message}")]
    Acquisition { path: PathBuf, message: String },

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("File too large ({size} bytes, limit {limit}): {path}")]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Arrays must be of the same length (emails: {emails}, texts: {texts})")]
    LengthMismatch { emails: usize, texts: usize },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HarvestError {
    pub fn acquisition(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Acquisition {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
