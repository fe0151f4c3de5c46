/// Errors from the file layer: transforms, listings, confirmation.
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

const PATH_TIP: &str = "Check the path exists and you have read permissions";

/// Errors that can occur while processing or listing files.
#[derive(Debug, Error)]
pub enum AppError {
    /// The glob pattern could not be compiled.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as given on the command line.
        pattern: String,
        /// Underlying globset error.
        source: globset::Error,
    },

    /// A file or directory does not exist.
    #[error("{} not found: {}", .kind.label(), .path.display())]
    NotFound {
        /// Whether a file or directory was expected.
        kind: PathKind,
        /// The missing path.
        path: PathBuf,
    },

    /// The path exists but cannot be read or written.
    #[error("Permission denied: {}", .path.display())]
    PermissionDenied {
        /// The inaccessible path.
        path: PathBuf,
    },

    /// A directory was expected but something else was found.
    #[error("Not a directory: {}", .path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A regular file was expected but a directory was found.
    #[error("Not a file: {}", .path.display())]
    NotAFile {
        /// The offending path.
        path: PathBuf,
    },

    /// The file content is not UTF-8 and cannot be case-converted.
    #[error("{} is not valid UTF-8 text", .path.display())]
    InvalidText {
        /// The binary or mis-encoded file.
        path: PathBuf,
    },

    /// Any other I/O failure.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Some files in a batch failed; details were already reported per file.
    #[error("{failed} of {total} file(s) failed")]
    PartialFailure {
        /// Number of failed files.
        failed: usize,
        /// Number of files in the batch.
        total: usize,
    },

    /// The user declined the confirmation prompt.
    #[error("Aborted by user")]
    UserAbort,
}

/// What kind of filesystem object an operation expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
}

impl PathKind {
    fn label(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Directory => "Directory",
        }
    }
}

impl AppError {
    /// Classify an I/O error against the path that produced it.
    #[must_use]
    pub fn from_io(err: io::Error, path: &Path, kind: PathKind) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { kind, path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::InvalidData => Self::InvalidText { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UserAbort => 130,
            _ => 1,
        }
    }

    /// Machine-readable error code (snake_case) for JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => "invalid_pattern",
            Self::NotFound { .. } => "not_found",
            Self::PermissionDenied { .. } => "permission_denied",
            Self::NotADirectory { .. } => "not_a_directory",
            Self::NotAFile { .. } => "not_a_file",
            Self::InvalidText { .. } => "invalid_text",
            Self::Io { .. } => "io_error",
            Self::PartialFailure { .. } => "partial_failure",
            Self::UserAbort => "user_abort",
        }
    }

    /// One-line remediation tip shown under the error, if any.
    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidPattern { .. } => Some("Run with --help to see usage"),
            Self::NotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::NotADirectory { .. }
            | Self::NotAFile { .. } => Some(PATH_TIP),
            Self::InvalidText { .. }
            | Self::Io { .. }
            | Self::PartialFailure { .. }
            | Self::UserAbort => None,
        }
    }
}
