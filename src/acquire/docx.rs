// file: src/acquire/docx.rs
// description: DOCX paragraph text acquisition from the word/document.xml part
// reference: https://docs.rs/zip and https://docs.rs/quick-xml

use crate::acquire::TextAcquirer;
use crate::error::{HarvestError, Result};
use crate::models::DocumentFormat;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Debug, Clone, Copy, Default)]
pub struct DocxAcquirer;

impl DocxAcquirer {
    pub fn new() -> Self {
        Self
    }
}

impl TextAcquirer for DocxAcquirer {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn acquire(&self, path: &Path) -> Result<String> {
        debug!("Opening DOCX: {}", path.display());

        let file = File::open(path).map_err(|source| HarvestError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        let mut archive = ZipArchive::new(file).map_err(|e| HarvestError::acquisition(path, e))?;
        let mut part = archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| HarvestError::acquisition(path, e))?;

        let mut xml = String::new();
        part.read_to_string(&mut xml)
            .map_err(|e| HarvestError::acquisition(path, e))?;

        paragraphs_to_text(&xml).map_err(|e| HarvestError::acquisition(path, e))
    }
}

/// Concatenates paragraph text in document order, each paragraph followed
/// by a newline.
pub fn paragraphs_to_text(xml: &str) -> std::result::Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    // Text boxes nest paragraphs inside paragraphs.
    let mut open: Vec<String> = Vec::new();
    let mut in_run = 0usize;
    let mut in_text = false;
    // Depth inside mc:Fallback, which repeats the mc:Choice content.
    let mut fallback_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(_) if fallback_depth > 0 => fallback_depth += 1,
            Event::End(_) if fallback_depth > 0 => fallback_depth -= 1,
            Event::Empty(_) | Event::Text(_) if fallback_depth > 0 => {}
            Event::Start(e) => match e.name().as_ref() {
                b"mc:Fallback" => fallback_depth = 1,
                b"w:p" => open.push(String::new()),
                b"w:r" => in_run += 1,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(paragraph) = open.pop() {
                        close_paragraph(&mut open, &mut text, &paragraph);
                    }
                }
                b"w:r" => in_run = in_run.saturating_sub(1),
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => close_paragraph(&mut open, &mut text, ""),
                b"w:tab" if in_run > 0 => push_to(&mut open, "\t"),
                b"w:br" | b"w:cr" if in_run > 0 => push_to(&mut open, "\n"),
                _ => {}
            },
            Event::Text(t) if in_text => {
                let value = t.unescape()?;
                push_to(&mut open, &value);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

/// A finished paragraph lands in its host paragraph when nested, otherwise
/// in the document text.
fn close_paragraph(open: &mut [String], text: &mut String, paragraph: &str) {
    let target = match open.last_mut() {
        Some(parent) => parent,
        None => text,
    };
    target.push_str(paragraph);
    target.push('\n');
}

fn push_to(open: &mut [String], value: &str) {
    if let Some(paragraph) = open.last_mut() {
        paragraph.push_str(value);
    }
}

#[cfg(test)]
pub(crate) fn write_docx(path: &Path, xml: &str) {
    use std::io::Write;
    use zip::write::{SimpleFileOptions, ZipWriter};

    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    zip.start_file(DOCUMENT_PART, SimpleFileOptions::default())
        .unwrap();
    zip.write_all(xml.as_bytes()).unwrap();
    zip.finish().unwrap();
}

/// Minimal `word/document.xml` holding one plain run per paragraph.
#[cfg(test)]
pub(crate) fn document_xml(paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
        .collect();
    format!(
        "<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\"><w:body>{body}</w:body></w:document>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::{SimpleFileOptions, ZipWriter};

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>
<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>Priya Sharma</w:t></w:r></w:p>
<w:p><w:r><w:t xml:space="preserve">Email: </w:t></w:r><w:r><w:t>priya@mail.com</w:t></w:r></w:p>
<w:p/>
<w:p><w:r><w:t>Phone</w:t><w:tab/><w:t>+91-9876543210</w:t></w:r></w:p>
<w:p><w:r><w:t>R&amp;D</w:t></w:r></w:p>
</w:body>
</w:document>"#;

    #[test]
    fn test_paragraphs_joined_with_newlines() {
        let text = paragraphs_to_text(BODY).unwrap();
        assert_eq!(
            text,
            "Priya Sharma\nEmail: priya@mail.com\n\nPhone\t+91-9876543210\nR&D\n"
        );
    }

    #[test]
    fn test_text_box_kept_once_inside_its_paragraph() {
        let xml = r#"<w:document xmlns:w="w" xmlns:mc="mc" xmlns:wps="wps" xmlns:v="v"><w:body>
<w:p><w:r><w:t xml:space="preserve">Header </w:t></w:r><w:r><mc:AlternateContent>
<mc:Choice Requires="wps"><w:drawing><wps:txbx><w:txbxContent><w:p><w:r><w:t>Boxed</w:t></w:r></w:p><w:p/></w:txbxContent></wps:txbx></w:drawing></mc:Choice>
<mc:Fallback><w:pict><v:textbox><w:txbxContent><w:p><w:r><w:t>Boxed</w:t></w:r></w:p><w:p/></w:txbxContent></v:textbox></w:pict></mc:Fallback>
</mc:AlternateContent></w:r><w:r><w:t xml:space="preserve"> tail</w:t></w:r></w:p>
<w:p><w:r><w:t>Next</w:t></w:r></w:p>
</w:body></w:document>"#;

        assert_eq!(
            paragraphs_to_text(xml).unwrap(),
            "Header Boxed\n\n tail\nNext\n"
        );
    }

    #[test]
    fn test_plain_paragraph_fixture() {
        let xml = document_xml(&["Arjun", "arjun@mail.in"]);
        assert_eq!(paragraphs_to_text(&xml).unwrap(), "Arjun\narjun@mail.in\n");
    }

    #[test]
    fn test_acquire_from_archive() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("priya.docx");
        write_docx(&path, BODY);

        let text = DocxAcquirer::new().acquire(&path).unwrap();
        assert!(text.starts_with("Priya Sharma\n"));
        assert!(text.contains("priya@mail.com"));
    }

    #[test]
    fn test_not_a_zip_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.docx");
        std::fs::write(&path, b"plain text pretending").unwrap();

        let err = DocxAcquirer::new().acquire(&path).unwrap_err();
        assert!(matches!(err, HarvestError::Acquisition { .. }));
    }

    #[test]
    fn test_archive_without_document_part_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.docx");
        let file = File::create(&path).unwrap();
        let mut zip = ZipWriter::new(file);
        zip.start_file("docProps/core.xml", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"<core/>").unwrap();
        zip.finish().unwrap();

        assert!(DocxAcquirer::new().acquire(&path).is_err());
    }
}
