// file: src/exporter/mod.rs
// description: tabular export of aggregated contact data
// reference: internal module structure

pub mod csv;
pub mod table;
pub mod xlsx;

pub use self::csv::CsvTableWriter;
pub use self::table::{ExportRow, ExportTable, HEADERS};
pub use self::xlsx::XlsxTableWriter;

use crate::config::{ExportFormat, RowLayout};
use crate::error::{HarvestError, Result};
use crate::models::Corpus;
use crate::utils::Validator;
use std::fs;
use std::path::Path;
use tracing::info;

/// Serializes a finished table into file bytes.
pub trait TableWriter {
    fn render(&self, table: &ExportTable) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TableExporter {
    format: ExportFormat,
}

impl TableExporter {
    pub fn new(format: ExportFormat) -> Self {
        Self { format }
    }

    /// Align the three columns and write them. A length mismatch between
    /// `emails` and `texts` aborts before anything touches the disk.
    pub fn export_columns(
        &self,
        emails: &[String],
        phones: &[String],
        texts: &[String],
        destination: &Path,
    ) -> Result<usize> {
        let table = ExportTable::from_columns(emails, phones, texts)?;
        self.export_table(&table, destination)
    }

    pub fn export_corpus(
        &self,
        corpus: &Corpus,
        layout: RowLayout,
        destination: &Path,
    ) -> Result<usize> {
        let table = ExportTable::from_corpus(corpus, layout)?;
        self.export_table(&table, destination)
    }

    /// The file is rendered in memory and written in one step.
    pub fn export_table(&self, table: &ExportTable, destination: &Path) -> Result<usize> {
        Validator::validate_output_path(destination)?;

        let format = self.format.resolve(destination);
        let bytes = match format {
            ExportFormat::Csv => CsvTableWriter.render(table)?,
            ExportFormat::Xlsx | ExportFormat::Auto => XlsxTableWriter.render(table)?,
        };

        fs::write(destination, bytes).map_err(|source| HarvestError::FileOperation {
            path: destination.to_path_buf(),
            source,
        })?;

        info!(
            "Wrote {} rows to {} ({:?})",
            table.len(),
            destination.display(),
            format
        );
        Ok(table.len())
    }
}
