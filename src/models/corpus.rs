// file: src/models/corpus.rs
// description: aggregated per-document records and their legacy column views
// reference: internal data structures

use crate::models::ExtractionResult;
use std::path::PathBuf;

/// One contributing document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub source: PathBuf,
    pub emails: Vec<String>,
    pub first_phone: Option<String>,
    pub text: String,
}

impl DocumentRecord {
    pub fn from_extraction(source: impl Into<PathBuf>, result: ExtractionResult) -> Self {
        let ExtractionResult {
            emails,
            phones,
            residual,
        } = result;

        Self {
            source: source.into(),
            emails,
            first_phone: phones.into_iter().next(),
            text: residual,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    records: Vec<DocumentRecord>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document's extraction. Returns false when it carried nothing
    /// and was left out.
    pub fn accept(&mut self, source: impl Into<PathBuf>, result: ExtractionResult) -> bool {
        if !result.has_signal() {
            return false;
        }
        self.records
            .push(DocumentRecord::from_extraction(source, result));
        true
    }

    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every email of every contributing document, flattened.
    pub fn emails(&self) -> Vec<String> {
        self.records
            .iter()
            .flat_map(|record| record.emails.iter().cloned())
            .collect()
    }

    /// At most one phone per document; documents without one add nothing.
    pub fn phones(&self) -> Vec<String> {
        self.records
            .iter()
            .filter_map(|record| record.first_phone.clone())
            .collect()
    }

    /// One residual text per contributing document.
    pub fn texts(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.text.clone())
            .collect()
    }
}
