// file: src/repository/classifier.rs
// description: file classification by extension and routing to text acquirers
// reference: per-document failure isolation at the dispatch boundary

use crate::acquire::{DocxAcquirer, PdfAcquirer, TextAcquirer};
use crate::config::InputConfig;
use crate::error::{HarvestError, Result};
use crate::extractor::FieldExtractor;
use crate::models::{DocumentFormat, ExtractionResult, RawDocument};
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub result: ExtractionResult,
    pub failed: bool,
}

pub struct DocumentDispatcher {
    pdf: PdfAcquirer,
    docx: DocxAcquirer,
    extractor: FieldExtractor,
    max_file_size: Option<u64>,
}

impl DocumentDispatcher {
    pub fn new(max_file_size: Option<u64>) -> Self {
        Self {
            pdf: PdfAcquirer::new(),
            docx: DocxAcquirer::new(),
            extractor: FieldExtractor::new(),
            max_file_size,
        }
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self::new(config.max_file_size_bytes())
    }

    /// Extract a file, reporting any failure and yielding the empty result
    /// in its place. Never fails.
    pub fn dispatch(&self, path: &Path) -> ExtractionResult {
        self.dispatch_outcome(path).result
    }

    /// Like `dispatch`, but also tells whether the file failed.
    pub fn dispatch_outcome(&self, path: &Path) -> DispatchOutcome {
        match self.try_dispatch(path) {
            Ok(result) => DispatchOutcome {
                result,
                failed: false,
            },
            Err(e) => {
                warn!("{}", e);
                DispatchOutcome {
                    result: ExtractionResult::empty(),
                    failed: true,
                }
            }
        }
    }

    pub fn try_dispatch(&self, path: &Path) -> Result<ExtractionResult> {
        let document = RawDocument::new(path);
        let acquirer = self
            .acquirer_for(document.format)
            .ok_or_else(|| HarvestError::UnsupportedFormat(document.path.clone()))?;

        self.check_size(&document.path)?;

        let text = acquirer.acquire(&document.path)?;
        Ok(self.extractor.extract(&text))
    }

    pub fn acquirer_for(&self, format: DocumentFormat) -> Option<&dyn TextAcquirer> {
        let acquirer: &dyn TextAcquirer = match format {
            DocumentFormat::Pdf => &self.pdf,
            DocumentFormat::Docx => &self.docx,
            DocumentFormat::Unsupported => return None,
        };
        Some(acquirer)
    }

    fn check_size(&self, path: &Path) -> Result<()> {
        let Some(limit) = self.max_file_size else {
            return Ok(());
        };

        let size = fs::metadata(path)
            .map_err(|source| HarvestError::FileOperation {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        if size > limit {
            return Err(HarvestError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }

        Ok(())
    }
}

impl Default for DocumentDispatcher {
    fn default() -> Self {
        Self::new(None)
    }
}
