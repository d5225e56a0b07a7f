// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod acquire;
pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod repository;
pub mod utils;

pub use acquire::{DocxAcquirer, PdfAcquirer, TextAcquirer};
pub use config::{Config, ExportFormat, InputConfig, OutputConfig, RowLayout};
pub use error::{HarvestError, Result};
pub use exporter::{ExportRow, ExportTable, TableExporter};
pub use extractor::FieldExtractor;
pub use models::{Corpus, DocumentFormat, DocumentRecord, ExtractionResult, RawDocument};
pub use pipeline::{CorpusAggregator, PipelineStats};
pub use repository::{DocumentDispatcher, FileScanner, ScannedFile};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _aggregator = CorpusAggregator::new(&config.input);
        let _exporter = TableExporter::new(config.output.format);
        assert!(FieldExtractor::new().extract("").emails.is_empty());
    }
}
