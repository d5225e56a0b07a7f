// file: src/models/extraction.rs
// description: per-document extraction output
// reference: internal data structures

/// Unique emails and phones of one document plus the text left over once
/// they are removed. Both lists hold each value once, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub residual: String,
}

impl ExtractionResult {
    /// The "no text" result used for unreadable or rejected documents.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when at least one field carries something.
    pub fn has_signal(&self) -> bool {
        !self.emails.is_empty() || !self.phones.is_empty() || !self.residual.is_empty()
    }

    pub fn first_phone(&self) -> Option<&str> {
        self.phones.first().map(String::as_str)
    }

    /// Residual length in characters, as shown in per-file summaries.
    pub fn text_length(&self) -> usize {
        self.residual.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_signal() {
        let result = ExtractionResult::empty();
        assert!(!result.has_signal());
        assert_eq!(result.first_phone(), None);
        assert_eq!(result.text_length(), 0);
    }

    #[test]
    fn test_whitespace_residual_counts_as_signal() {
        let result = ExtractionResult {
            residual: "\n".to_string(),
            ..Default::default()
        };
        assert!(result.has_signal());
    }

    #[test]
    fn test_text_length_counts_characters() {
        let result = ExtractionResult {
            residual: "Résumé".to_string(),
            ..Default::default()
        };
        assert_eq!(result.text_length(), 6);
    }
}
