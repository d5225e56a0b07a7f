// file: src/exporter/table.rs
// description: row alignment of aggregated columns into the Email / Phone / Text table
// reference: internal data structures

use crate::config::RowLayout;
use crate::error::{HarvestError, Result};
use crate::models::{Corpus, DocumentRecord};
use std::iter;
use tracing::debug;

pub const HEADERS: [&str; 3] = ["Email", "Phone", "Text"];

/// Separator used when several emails share one cell.
pub const EMAIL_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRow {
    pub email: String,
    pub phone: String,
    pub text: String,
}

impl ExportRow {
    pub fn cells(&self) -> [&str; 3] {
        [self.email.as_str(), self.phone.as_str(), self.text.as_str()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTable {
    rows: Vec<ExportRow>,
}

impl ExportTable {
    /// Rows are indexed by `emails`. `texts` must be exactly as long;
    /// `phones` is padded with empty strings or cut to fit.
    pub fn from_columns(emails: &[String], phones: &[String], texts: &[String]) -> Result<Self> {
        if emails.len() != texts.len() {
            return Err(HarvestError::LengthMismatch {
                emails: emails.len(),
                texts: texts.len(),
            });
        }

        if phones.len() != emails.len() {
            debug!(
                "Aligning {} phones to {} emails",
                phones.len(),
                emails.len()
            );
        }

        let padded_phones = phones
            .iter()
            .cloned()
            .chain(iter::repeat(String::new()))
            .take(emails.len());

        let rows = emails
            .iter()
            .zip(padded_phones)
            .zip(texts)
            .map(|((email, phone), text)| ExportRow {
                email: email.clone(),
                phone,
                text: text.clone(),
            })
            .collect();

        Ok(Self { rows })
    }

    pub fn from_corpus(corpus: &Corpus, layout: RowLayout) -> Result<Self> {
        match layout {
            RowLayout::Columns => {
                Self::from_columns(&corpus.emails(), &corpus.phones(), &corpus.texts())
            }
            RowLayout::PerDocument => Ok(Self {
                rows: corpus.records().iter().map(document_row).collect(),
            }),
            RowLayout::PerEmail => Ok(Self {
                rows: corpus.records().iter().flat_map(email_rows).collect(),
            }),
        }
    }

    pub fn rows(&self) -> &[ExportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn document_row(record: &DocumentRecord) -> ExportRow {
    ExportRow {
        email: record.emails.join(EMAIL_SEPARATOR),
        phone: record.first_phone.clone().unwrap_or_default(),
        text: record.text.clone(),
    }
}

fn email_rows(record: &DocumentRecord) -> Vec<ExportRow> {
    let phone = record.first_phone.clone().unwrap_or_default();

    if record.emails.is_empty() {
        return vec![ExportRow {
            email: String::new(),
            phone,
            text: record.text.clone(),
        }];
    }

    record
        .emails
        .iter()
        .map(|email| ExportRow {
            email: email.clone(),
            phone: phone.clone(),
            text: record.text.clone(),
        })
        .collect()
}
