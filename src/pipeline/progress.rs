// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for an aggregation run
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    pub files_seen: usize,
    pub files_processed: usize,
    pub files_failed: usize,
    pub documents_contributing: usize,
    pub emails_found: usize,
    pub phones_kept: usize,
    pub total_bytes_processed: u64,
    pub duration: Duration,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files_skipped(&self) -> usize {
        self.files_seen - self.documents_contributing
    }

    pub fn files_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.files_seen as f64 / secs
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.files_processed + self.files_failed;
        if total == 0 {
            return 0.0;
        }
        (self.files_processed as f64 / total as f64) * 100.0
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    stats: PipelineStats,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_files: usize, visible: bool, colored: bool) -> Self {
        let bar = if visible {
            create_progress_bar(total_files as u64, colored)
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            stats: PipelineStats::new(),
            start_time: Instant::now(),
        }
    }

    pub fn start_file(&mut self, name: &str, bytes: u64) {
        self.stats.files_seen += 1;
        self.stats.total_bytes_processed += bytes;
        self.bar.set_message(name.to_string());
    }

    pub fn file_processed(&mut self) {
        self.stats.files_processed += 1;
        self.bar.inc(1);
    }

    pub fn file_failed(&mut self) {
        self.stats.files_failed += 1;
        self.bar.inc(1);
    }

    pub fn document_contributed(&mut self, emails: usize, has_phone: bool) {
        self.stats.documents_contributing += 1;
        self.stats.emails_found += emails;
        if has_phone {
            self.stats.phones_kept += 1;
        }
    }

    pub fn finish(self) -> PipelineStats {
        self.bar.finish_and_clear();
        PipelineStats {
            duration: self.start_time.elapsed(),
            ..self.stats
        }
    }
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
    };

    match ProgressStyle::default_bar().template(template) {
        Ok(style) => bar.set_style(style.progress_chars("█▓▒░")),
        Err(e) => tracing::debug!("Falling back to default progress style: {}", e),
    }
    bar
}
