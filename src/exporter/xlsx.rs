// file: src/exporter/xlsx.rs
// description: xlsx workbook rendering of the export table
// reference: https://docs.rs/rust_xlsxwriter

use crate::error::Result;
use crate::exporter::TableWriter;
use crate::exporter::table::{ExportTable, HEADERS};
use crate::utils::Validator;
use rust_xlsxwriter::{Format, Workbook};
use tracing::warn;

/// Excel refuses longer cell strings.
pub const MAX_CELL_CHARS: usize = 32_767;

#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxTableWriter;

impl TableWriter for XlsxTableWriter {
    fn render(&self, table: &ExportTable) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (index, row) in table.rows().iter().enumerate() {
            let row_number = (index + 1) as u32;
            for (col, value) in row.cells().into_iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                let cell = Validator::truncate_chars(value, MAX_CELL_CHARS);
                if cell.len() < value.len() {
                    warn!(
                        "Cell at row {}, column {} truncated to {} characters",
                        row_number, HEADERS[col], MAX_CELL_CHARS
                    );
                }
                worksheet.write_string(row_number, col as u16, cell)?;
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_produces_zip_container() {
        let table = ExportTable::from_columns(
            &["a@b.com".to_string()],
            &["9876543210".to_string()],
            &["Rust developer".to_string()],
        )
        .unwrap();

        let bytes = XlsxTableWriter.render(&table).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_oversized_text_is_truncated_not_rejected() {
        let long_text = "x".repeat(MAX_CELL_CHARS + 10);
        let table =
            ExportTable::from_columns(&["a@b.com".to_string()], &[], &[long_text]).unwrap();

        assert!(XlsxTableWriter.render(&table).is_ok());
    }
}
