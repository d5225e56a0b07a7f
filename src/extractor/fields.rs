// file: src/extractor/fields.rs
// description: email / phone extraction with deduplication and residual text
// reference: fixed-pattern matching over decoded resume text

use crate::extractor::patterns::{EMAIL, PHONE};
use crate::models::ExtractionResult;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct FieldExtractor;

impl FieldExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> ExtractionResult {
        let emails = unique_matches(&EMAIL, text);
        let phones = unique_matches(&PHONE, text);

        let without_emails = EMAIL.replace_all(text, "");
        let residual = PHONE.replace_all(&without_emails, "").into_owned();

        let result = ExtractionResult {
            emails,
            phones,
            residual,
        };

        debug!(
            "Matched {} emails, {} phones, {} residual chars",
            result.emails.len(),
            result.phones.len(),
            result.text_length()
        );

        result
    }
}

fn unique_matches(pattern: &Regex, text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    pattern
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RESUME: &str = "Jane Doe\n\
        Email: jane.doe@mail.com | alt: jd@work.co.in | jane.doe@mail.com\n\
        Phone: +91 98765 43210, 9123456789\n\
        Skills: Rust, SQL\n";

    fn sorted(values: &[String]) -> Vec<String> {
        let mut values = values.to_vec();
        values.sort();
        values
    }

    #[test]
    fn test_duplicates_collapse() {
        let result = FieldExtractor::new().extract("Contact: a@b.com or a@b.com");
        assert_eq!(result.emails, vec!["a@b.com".to_string()]);
        assert!(result.phones.is_empty());
        assert_eq!(result.residual, "Contact:  or ");
    }

    #[test]
    fn test_repeated_runs_agree() {
        let extractor = FieldExtractor::new();
        let first = extractor.extract(RESUME);
        let second = extractor.extract(RESUME);

        assert_eq!(sorted(&first.emails), sorted(&second.emails));
        assert_eq!(sorted(&first.phones), sorted(&second.phones));
        assert_eq!(first.residual, second.residual);
    }

    #[test]
    fn test_extracts_all_fields() {
        let result = FieldExtractor::new().extract(RESUME);

        assert_eq!(
            sorted(&result.emails),
            vec!["jane.doe@mail.com".to_string(), "jd@work.co.in".to_string()]
        );
        assert_eq!(
            sorted(&result.phones),
            vec!["+91 98765 43210".to_string(), "9123456789".to_string()]
        );
        assert_eq!(
            result.residual,
            "Jane Doe\nEmail:  | alt:  | \nPhone: , \nSkills: Rust, SQL\n"
        );
    }

    #[test]
    fn test_residual_has_no_matches_left() {
        let extractor = FieldExtractor::new();
        let result = extractor.extract(RESUME);
        let again = extractor.extract(&result.residual);

        assert!(again.emails.is_empty());
        assert!(again.phones.is_empty());
        assert_eq!(again.residual, result.residual);
    }

    #[test]
    fn test_first_phone_is_first_in_text() {
        let result = FieldExtractor::new().extract("call 7000000001 or 8000000002 or 7000000001");
        assert_eq!(result.first_phone(), Some("7000000001"));
        assert_eq!(result.phones.len(), 2);
    }

    #[test]
    fn test_emails_removed_before_phones() {
        let result = FieldExtractor::new().extract("id: 9876543210@mail.com.");
        assert_eq!(result.emails, vec!["9876543210@mail.com".to_string()]);
        assert_eq!(result.phones, vec!["9876543210".to_string()]);
        assert_eq!(result.residual, "id: .");
    }

    #[test]
    fn test_rejected_numbers() {
        let result = FieldExtractor::new().extract("pin 12345, old 5876543210");
        assert!(result.phones.is_empty());
        assert_eq!(result.residual, "pin 12345, old 5876543210");
    }

    #[test]
    fn test_residual_length_in_characters() {
        let result = FieldExtractor::new().extract("Rāhul Kumār 9876543210");
        assert_eq!(result.residual, "Rāhul Kumār ");
        assert_eq!(result.text_length(), 12);
        assert!(result.residual.len() > result.text_length());
    }

    #[test]
    fn test_empty_input() {
        let result = FieldExtractor::new().extract("");
        assert_eq!(result, ExtractionResult::empty());
    }

    #[test]
    fn test_unicode_text_is_preserved() {
        let result = FieldExtractor::new().extract("Résumé · 🚀 ravi@mail.in");
        assert_eq!(result.emails, vec!["ravi@mail.in".to_string()]);
        assert_eq!(result.residual, "Résumé · 🚀 ");
    }
}
