// file: src/acquire/pdf.rs
// description: PDF text acquisition backed by pdf-extract
// reference: https://docs.rs/pdf-extract

use crate::acquire::TextAcquirer;
use crate::error::{HarvestError, Result};
use crate::models::DocumentFormat;
use std::any::Any;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfAcquirer;

impl PdfAcquirer {
    pub fn new() -> Self {
        Self
    }
}

impl TextAcquirer for PdfAcquirer {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn acquire(&self, path: &Path) -> Result<String> {
        debug!("Extracting PDF: {}", path.display());

        let bytes = fs::read(path).map_err(|source| HarvestError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        // The decoder panics on some malformed inputs.
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(&bytes)
        }));

        match outcome {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(HarvestError::acquisition(path, e)),
            Err(payload) => Err(HarvestError::acquisition(path, panic_message(&*payload))),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("decoder panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("decoder panicked: {message}")
    } else {
        "decoder panicked".to_string()
    }
}

/// Single-page Helvetica PDF, one text line per entry.
#[cfg(test)]
pub(crate) fn write_pdf(path: &Path, lines: &[&str]) {
    let mut content = String::from("BT\n/F1 12 Tf\n72 720 Td\n");
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            content.push_str("0 -20 Td\n");
        }
        content.push_str(&format!("({line} ) Tj\n"));
    }
    content.push_str("ET");

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ),
    ];

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::new();
    for (index, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", index + 1, body));
    }

    let xref_offset = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        pdf.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    ));

    fs::write(path, pdf).unwrap();
}
