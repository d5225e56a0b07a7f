// file: src/repository/mod.rs
// description: Resume folder discovery and per-file dispatch
// reference: Internal module structure

pub mod classifier;
pub mod scanner;

pub use classifier::{DispatchOutcome, DocumentDispatcher};
pub use scanner::{FileScanner, ScannedFile};
