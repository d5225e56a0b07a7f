// file: src/exporter/csv.rs
// description: csv rendering of the export table
// reference: https://docs.rs/csv

use crate::error::{HarvestError, Result};
use crate::exporter::TableWriter;
use crate::exporter::table::{ExportTable, HEADERS};

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTableWriter;

impl TableWriter for CsvTableWriter {
    fn render(&self, table: &ExportTable) -> Result<Vec<u8>> {
        let mut writer = ::csv::Writer::from_writer(Vec::new());

        writer.write_record(HEADERS)?;
        for row in table.rows() {
            writer.write_record(row.cells())?;
        }

        writer
            .into_inner()
            .map_err(|e| HarvestError::Io(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporter::table::ExportRow;

    #[test]
    fn test_render_quotes_multiline_text() {
        let table = ExportTable::from_columns(
            &["a@b.com".to_string()],
            &[],
            &["line one\nline, two".to_string()],
        )
        .unwrap();

        let bytes = CsvTableWriter.render(&table).unwrap();
        let rendered = String::from_utf8(bytes).unwrap();
        assert_eq!(rendered, "Email,Phone,Text\na@b.com,,\"line one\nline, two\"\n");
        assert_eq!(table.rows()[0], ExportRow {
            email: "a@b.com".to_string(),
            phone: String::new(),
            text: "line one\nline, two".to_string(),
        });
    }

    #[test]
    fn test_render_empty_table_has_header() {
        let bytes = CsvTableWriter.render(&ExportTable::default()).unwrap();
        assert_eq!(bytes, b"Email,Phone,Text\n");
    }
}
