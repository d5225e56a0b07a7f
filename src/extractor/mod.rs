// file: src/extractor/mod.rs
// description: contact field extraction module exports
// reference: internal module structure

pub mod fields;
pub mod patterns;

pub use fields::FieldExtractor;
