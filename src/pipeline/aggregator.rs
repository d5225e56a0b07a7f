// file: src/pipeline/aggregator.rs
// description: walks a resume folder and accumulates per-document extractions
// reference: sequential per-file processing with local failure isolation

use crate::config::InputConfig;
use crate::error::Result;
use crate::models::{Corpus, ExtractionResult};
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use crate::repository::{DocumentDispatcher, FileScanner, ScannedFile};
use std::path::Path;
use tracing::{debug, info};

pub struct CorpusAggregator {
    scanner: FileScanner,
    dispatcher: DocumentDispatcher,
    show_progress: bool,
    colored: bool,
}

impl CorpusAggregator {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            scanner: FileScanner::new(config),
            dispatcher: DocumentDispatcher::from_config(config),
            show_progress: false,
            colored: false,
        }
    }

    pub fn with_progress(mut self, visible: bool, colored: bool) -> Self {
        self.show_progress = visible;
        self.colored = colored;
        self
    }

    pub fn aggregate(&self, directory: &Path) -> Result<Corpus> {
        self.aggregate_with_stats(directory).map(|(corpus, _)| corpus)
    }

    /// Only a directory that cannot be listed fails the run; every
    /// per-file problem is reported and the file contributes nothing.
    pub fn aggregate_with_stats(&self, directory: &Path) -> Result<(Corpus, PipelineStats)> {
        let files = self.scanner.scan_directory(directory)?;
        let mut tracker = ProgressTracker::new(files.len(), self.show_progress, self.colored);
        let mut corpus = Corpus::new();

        for file in &files {
            tracker.start_file(&file.relative_path, file.size);
            let result = self.extract_file(file, &mut tracker);

            info!(
                "Filename: {}, Email count: {}, Phone count: {}, Text length: {}",
                file.relative_path,
                result.emails.len(),
                result.phones.len(),
                result.text_length()
            );

            let email_count = result.emails.len();
            let has_phone = result.first_phone().is_some();
            if corpus.accept(&file.path, result) {
                tracker.document_contributed(email_count, has_phone);
            } else {
                debug!("Nothing extracted from {}, skipping", file.relative_path);
            }
        }

        let stats = tracker.finish();
        info!(
            "Aggregated {} of {} files ({} failed)",
            stats.documents_contributing, stats.files_seen, stats.files_failed
        );
        Ok((corpus, stats))
    }

    fn extract_file(&self, file: &ScannedFile, tracker: &mut ProgressTracker) -> ExtractionResult {
        let outcome = self.dispatcher.dispatch_outcome(&file.path);
        if outcome.failed {
            tracker.file_failed();
        } else {
            tracker.file_processed();
        }
        outcome.result
    }
}
