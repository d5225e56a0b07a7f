// file: src/extractor/patterns.rs
// description: compiled regex patterns for contact extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref EMAIL: Regex = Regex::new(
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"
    ).expect("EMAIL regex is valid");

    // Indian mobile numbers with an optional +91 / 091 / 0091 / 91 prefix.
    // The national number may be split 5+5 by one space or hyphen.
    pub static ref PHONE: Regex = Regex::new(
        r"(?:(?:\+|0{0,2})91[\s-]?)?[6789]\d{4}[ -]?\d{5}\b"
    ).expect("PHONE regex is valid");
}

pub fn is_email(candidate: &str) -> bool {
    EMAIL
        .find(candidate)
        .is_some_and(|m| m.start() == 0 && m.end() == candidate.len())
}

pub fn is_phone(candidate: &str) -> bool {
    PHONE
        .find(candidate)
        .is_some_and(|m| m.start() == 0 && m.end() == candidate.len())
}
