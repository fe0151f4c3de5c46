/// Progress bar for `process` batches, drawn on stderr.
use std::io::IsTerminal;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::files::TransformResult;

/// Per-file progress with a `✓ name` / `✗ name` status message.
///
/// Hidden for JSON output and when stderr is not a terminal, so nothing
/// reaches the streams scripts read.
pub struct BatchProgress {
    bar: ProgressBar,
}

impl BatchProgress {
    #[must_use]
    pub fn new(total: usize, json: bool) -> Self {
        let visible = !json && std::io::stderr().is_terminal();
        Self::with_target(total, visible)
    }

    fn with_target(total: usize, visible: bool) -> Self {
        if !visible {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        let bar_style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} {msg:<30} [{bar:30.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(bar_style);
        bar.set_message("Processing files...");
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Advance by one file and show its status.
    pub fn record(&self, result: &TransformResult) {
        let name = result
            .source
            .file_name()
            .map_or_else(
                || result.source.display().to_string(),
                |n| n.to_string_lossy().into_owned(),
            );
        let mark = if result.is_success() {
            style("✓").green().for_stderr()
        } else {
            style("✗").red().for_stderr()
        };
        self.bar.set_message(format!("{mark} {name}"));
        self.bar.inc(1);
    }

    /// Remove the bar before the report is printed.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::Outcome;
    use std::path::PathBuf;

    #[test]
    fn test_json_hides_bar() {
        assert!(BatchProgress::new(3, true).bar.is_hidden());
    }

    #[test]
    fn test_hidden_bar_still_counts() {
        let progress = BatchProgress::with_target(2, false);
        progress.record(&TransformResult {
            source: PathBuf::from("a.txt"),
            dry_run: false,
            outcome: Outcome::Failure {
                reason: "File not found: a.txt".to_owned(),
            },
        });
        assert_eq!(progress.bar.position(), 1);
        progress.finish();
    }
}
