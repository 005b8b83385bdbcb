//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for record files
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
    words: usize,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
            words: 0,
        }
    }

    /// Initialize progress bar for file processing
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet {
            return;
        }

        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");

        let pb = ProgressBar::new(total_files);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed file
    pub fn file_completed(&mut self, filename: &str, words: usize) {
        self.words += words;
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{filename} ({words} words)"));
            pb.inc(1);
        }
    }

    /// Words reported so far
    pub fn words(&self) -> usize {
        self.words
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_counts_words() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_files(2);
        reporter.file_completed("a.json", 3);
        reporter.file_completed("b.json", 4);
        reporter.finish();

        assert!(reporter.progress_bar.is_none());
        assert_eq!(reporter.words(), 7);
    }
}
