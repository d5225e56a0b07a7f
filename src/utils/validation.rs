// file: src/utils/validation.rs
// description: input / output path validation and text helpers
// reference: input validation patterns

use crate::error::{HarvestError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(HarvestError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(HarvestError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// The destination must be a file path whose parent directory exists.
    pub fn validate_output_path(path: &Path) -> Result<()> {
        if path.is_dir() {
            return Err(HarvestError::Validation(format!(
                "Output path is a directory: {}",
                path.display()
            )));
        }

        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                Err(HarvestError::Validation(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )))
            }
            _ => Ok(()),
        }
    }

    /// Cut `text` to at most `max_chars` characters.
    pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
        match text.char_indices().nth(max_chars) {
            Some((byte_index, _)) => &text[..byte_index],
            None => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());

        let file = temp.path().join("file.pdf");
        std::fs::write(&file, "x").unwrap();
        assert!(Validator::validate_directory(&file).is_err());
        assert!(Validator::validate_directory(&temp.path().join("missing")).is_err());
    }

    #[test]
    fn test_validate_output_path() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_output_path(&temp.path().join("out.xlsx")).is_ok());
        assert!(Validator::validate_output_path(Path::new("cv_info.xlsx")).is_ok());
        assert!(Validator::validate_output_path(temp.path()).is_err());
        assert!(
            Validator::validate_output_path(&temp.path().join("missing").join("out.xlsx"))
                .is_err()
        );
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(Validator::truncate_chars("hello", 10), "hello");
        assert_eq!(Validator::truncate_chars("hello", 3), "hel");
        assert_eq!(Validator::truncate_chars("héllo", 2), "hé");
        assert_eq!(Validator::truncate_chars("🚀🚀🚀", 1), "🚀");
    }
}
