/// Output formatting: tables, JSON, batch reports, errors.
use std::io::Write;
use std::path::Path;

use comfy_table::{CellAlignment, Table, presets::UTF8_FULL};
use console::style;
use serde::Serialize;
use tracing::debug;

use crate::files::{AppError, DirEntry, Outcome, TransformResult};
use crate::types::{EntryOutput, ErrorOutput, kind_label};

/// Output context passed to all formatters.
pub struct OutputCtx {
    /// Machine-readable JSON on stdout instead of human text.
    pub json: bool,
    /// Extra human-readable detail and debug timing.
    pub verbose: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(json: bool, verbose: bool) -> Self {
        Self { json, verbose }
    }

    /// Start a named debug timer. Logs elapsed time on drop when `--verbose` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.verbose)
    }
}

// --- Directory listing ---

/// Write a directory listing to stdout.
pub fn write_entries(dir: &Path, pattern: &str, entries: &[DirEntry], ctx: &OutputCtx) {
    if ctx.json {
        let out: Vec<EntryOutput> = entries.iter().map(EntryOutput::from).collect();
        print_json(&out);
        return;
    }

    println!("{}", dir.display());
    println!("{}", entries_table(entries));
    println!("Found {} items matching '{pattern}'", entries.len());
    if ctx.verbose {
        let total: u64 = entries.iter().filter_map(|e| e.size).sum();
        println!("Total size: {} bytes", group_thousands(total));
    }
}

fn entries_table(entries: &[DirEntry]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["Name", "Type", "Size", "Modified"]);

    for entry in entries {
        let size = entry.size.map_or_else(|| "-".to_owned(), group_thousands);
        let modified = entry
            .modified
            .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        table.add_row([
            entry.name.as_str(),
            kind_label(entry.kind),
            size.as_str(),
            modified.as_str(),
        ]);
    }

    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

/// Format `n` with `,` between thousands groups.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// --- Process results ---

/// Write per-file transform results to stdout.
pub fn write_results(results: &[TransformResult], ctx: &OutputCtx) {
    if ctx.json {
        print_json(results);
        return;
    }

    let dry_run = results.iter().any(|r| r.dry_run);
    if dry_run {
        println!("{}", style("DRY RUN - no files will be modified").cyan());
    }

    for result in results {
        let name = result.source.display();
        match &result.outcome {
            Outcome::Success {
                bytes_written,
                destination,
            } if result.dry_run => {
                println!(
                    "  Would process: {name} → {} ({bytes_written} bytes)",
                    destination.display()
                );
            }
            Outcome::Success {
                bytes_written,
                destination,
            } => {
                println!(
                    "{} {name} → {} ({bytes_written} bytes)",
                    style("✓").green(),
                    destination.display()
                );
            }
            Outcome::Failure { reason } => println!("{} {name}: {reason}", style("✗").red()),
        }
    }

    let summary = summary_line(results);
    if results.iter().all(TransformResult::is_success) {
        println!("{}", style(summary).green());
    } else {
        println!("{}", style(summary).yellow());
    }
}

/// Closing line of a `process` report.
fn summary_line(results: &[TransformResult]) -> String {
    let total = results.len();
    let ok = results.iter().filter(|r| r.is_success()).count();
    let dry_run = results.iter().any(|r| r.dry_run);
    match (dry_run, ok == total) {
        (true, true) => format!("Would process {total} file(s)"),
        (true, false) => format!("Would process {ok} of {total} file(s)"),
        (false, true) => format!("Successfully processed {total} file(s)"),
        (false, false) => format!("Processed {ok} of {total} file(s)"),
    }
}

// --- Error output ---

/// Write an error to stderr: JSON envelope in JSON mode, symptom plus tip otherwise.
pub fn write_error(err: &AppError, json: bool) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    if json {
        let s = serde_json::to_string_pretty(&ErrorOutput::from_app_error(err)).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "{} {err}", style("Error:").red().bold().for_stderr());
        if let Some(hint) = err.hint() {
            let _ = writeln!(out, "{} {hint}", style("Tip:").yellow().for_stderr());
        }
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds at debug level on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `verbose` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            debug!("{}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::EntryKind;
    use std::path::PathBuf;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    fn result(name: &str, ok: bool, dry_run: bool) -> TransformResult {
        let outcome = if ok {
            Outcome::Success {
                bytes_written: 1,
                destination: PathBuf::from(format!("{name}_upper")),
            }
        } else {
            Outcome::Failure {
                reason: format!("File not found: {name}"),
            }
        };
        TransformResult {
            source: PathBuf::from(name),
            dry_run,
            outcome,
        }
    }

    #[test]
    fn test_summary_line_variants() {
        let all_ok = [result("a", true, false), result("b", true, false)];
        assert_eq!(summary_line(&all_ok), "Successfully processed 2 file(s)");

        let mixed = [result("a", true, false), result("b", false, false)];
        assert_eq!(summary_line(&mixed), "Processed 1 of 2 file(s)");

        let dry = [result("a", true, true), result("b", true, true)];
        assert_eq!(summary_line(&dry), "Would process 2 file(s)");

        let dry_mixed = [result("a", true, true), result("b", false, true)];
        assert_eq!(summary_line(&dry_mixed), "Would process 1 of 2 file(s)");
    }

    #[test]
    fn test_entries_table_rows() {
        let entries = vec![
            DirEntry {
                name: "a.txt".to_owned(),
                kind: EntryKind::File,
                size: Some(12_345),
                modified: None,
            },
            DirEntry {
                name: "b".to_owned(),
                kind: EntryKind::Directory,
                size: None,
                modified: None,
            },
        ];
        let rendered = entries_table(&entries).to_string();
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("12,345"));
        assert!(rendered.contains("dir"));
        assert!(rendered.contains(" - "));
    }
}
