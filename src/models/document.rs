// file: src/models/document.rs
// description: input document identity and format classification
// reference: internal data structures

use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Unsupported,
}

impl DocumentFormat {
    /// Classify a path by its extension, ignoring case.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => DocumentFormat::Pdf,
            Some("docx") => DocumentFormat::Docx,
            _ => DocumentFormat::Unsupported,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// A file handed to the pipeline. Lives for one extraction call.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub path: PathBuf,
    pub format: DocumentFormat,
}

impl RawDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = DocumentFormat::from_path(&path);
        Self { path, format }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("cv.pdf")), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_path(Path::new("cv.PDF")), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_path(Path::new("cv.DocX")), DocumentFormat::Docx);
        assert_eq!(
            DocumentFormat::from_path(Path::new("cv.doc")),
            DocumentFormat::Unsupported
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("README")),
            DocumentFormat::Unsupported
        );
    }

    #[test]
    fn test_raw_document() {
        let doc = RawDocument::new("/tmp/resumes/Jane Doe.docx");
        assert_eq!(doc.format, DocumentFormat::Docx);
        assert_eq!(doc.path, PathBuf::from("/tmp/resumes/Jane Doe.docx"));
        assert_eq!(doc.format.to_string(), "docx");
    }
}
