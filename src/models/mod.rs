// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod corpus;
pub mod document;
pub mod extraction;

pub use corpus::{Corpus, DocumentRecord};
pub use document::{DocumentFormat, RawDocument};
pub use extraction::ExtractionResult;
