/// Case transforms applied to whole text files.
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, error, info};

use super::errors::{AppError, PathKind};

/// A case conversion applied to file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    /// Convert all text to uppercase.
    #[default]
    Upper,
    /// Convert all text to lowercase.
    Lower,
}

impl Transform {
    /// Name used in output filenames (`notes_upper.txt`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
        }
    }

    /// Apply the conversion to `text`. Uses full Unicode case mapping.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Upper => text.to_uppercase(),
            Self::Lower => text.to_lowercase(),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One input file scheduled for transformation.
#[derive(Debug, Clone)]
pub struct FileTask {
    pub source: PathBuf,
    pub target_dir: PathBuf,
    pub transform: Transform,
}

/// Outcome of a single [`FileTask`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The file was written, or would have been on a dry run.
    Success {
        bytes_written: usize,
        destination: PathBuf,
    },
    /// The file could not be processed.
    Failure { reason: String },
}

/// Per-file result of a `process` batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformResult {
    pub source: PathBuf,
    pub dry_run: bool,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl TransformResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success { .. })
    }
}

impl FileTask {
    /// Output path: `{target_dir}/{stem}_{transform}{.ext}`.
    #[must_use]
    pub fn destination(&self) -> PathBuf {
        let stem = self
            .source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = match self.source.extension() {
            Some(ext) => format!("{stem}_{}.{}", self.transform, ext.to_string_lossy()),
            None => format!("{stem}_{}", self.transform),
        };
        self.target_dir.join(name)
    }

    /// Read, convert, and (unless `dry_run`) write this file.
    ///
    /// Never fails: errors are folded into [`Outcome::Failure`].
    #[must_use]
    pub fn run(&self, dry_run: bool) -> TransformResult {
        debug!("Processing {}", self.source.display());
        let outcome = match self.execute(dry_run) {
            Ok((bytes_written, destination)) => {
                if dry_run {
                    debug!(
                        "Would write {bytes_written} bytes to {}",
                        destination.display()
                    );
                } else {
                    info!("Wrote {bytes_written} bytes to {}", destination.display());
                }
                Outcome::Success {
                    bytes_written,
                    destination,
                }
            }
            Err(err) => {
                error!("Failed to process {}: {err}", self.source.display());
                Outcome::Failure {
                    reason: err.to_string(),
                }
            }
        };
        TransformResult {
            source: self.source.clone(),
            dry_run,
            outcome,
        }
    }

    fn execute(&self, dry_run: bool) -> Result<(usize, PathBuf), AppError> {
        let text = read_text(&self.source)?;
        let converted = self.transform.apply(&text);
        let destination = self.destination();
        if !dry_run {
            fs::write(&destination, &converted)
                .map_err(|e| write_error(e, &self.target_dir, &destination))?;
        }
        Ok((converted.len(), destination))
    }
}

fn read_text(path: &Path) -> Result<String, AppError> {
    let meta = fs::metadata(path).map_err(|e| AppError::from_io(e, path, PathKind::File))?;
    if meta.is_dir() {
        return Err(AppError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|e| AppError::from_io(e, path, PathKind::File))
}

fn write_error(err: io::Error, target_dir: &Path, destination: &Path) -> AppError {
    // A missing parent is reported against the output directory, not the file.
    if err.kind() == io::ErrorKind::NotFound {
        AppError::from_io(err, target_dir, PathKind::Directory)
    } else {
        AppError::from_io(err, destination, PathKind::File)
    }
}

/// Options for a `process` batch.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub transform: Transform,
    /// Output directory; the working directory when `None`.
    pub output_dir: Option<PathBuf>,
    pub dry_run: bool,
    pub assume_yes: bool,
}

impl ProcessOptions {
    /// Whether a batch of `count` files needs interactive confirmation.
    #[must_use]
    pub fn needs_confirmation(&self, count: usize) -> bool {
        count > 1 && !self.assume_yes && !self.dry_run
    }
}

/// Run the confirmation gate for a batch of `count` files.
///
/// `confirm` is consulted only when [`ProcessOptions::needs_confirmation`]
/// holds; nothing is read or written before it answers.
///
/// # Errors
///
/// Returns [`AppError::UserAbort`] if `confirm` declines.
pub fn confirm_batch<F>(count: usize, opts: &ProcessOptions, confirm: F) -> Result<(), AppError>
where
    F: FnOnce(usize) -> bool,
{
    if opts.needs_confirmation(count) && !confirm(count) {
        return Err(AppError::UserAbort);
    }
    Ok(())
}

/// Transform every path in order, collecting per-file results.
///
/// `observe` sees each result as soon as its file is done.
///
/// # Errors
///
/// Returns an I/O error if the working directory cannot be determined.
pub fn process_files<F>(
    paths: &[PathBuf],
    opts: &ProcessOptions,
    mut observe: F,
) -> Result<Vec<TransformResult>, AppError>
where
    F: FnMut(&TransformResult),
{
    debug!(
        "Processing {} files with transform={}",
        paths.len(),
        opts.transform
    );

    let target_dir = match &opts.output_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(|source| AppError::Io {
            path: PathBuf::from("."),
            source,
        })?,
    };

    Ok(paths
        .iter()
        .map(|source| FileTask {
            source: source.clone(),
            target_dir: target_dir.clone(),
            transform: opts.transform,
        })
        .map(|task| {
            let result = task.run(opts.dry_run);
            observe(&result);
            result
        })
        .collect())
}
