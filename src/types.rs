/// Shared serializable output types.
///
/// These types are what gets written as JSON. They are decoupled from the
/// internal `DirEntry` / `AppError` types.
use serde::Serialize;

use crate::files::{AppError, DirEntry, EntryKind};

/// A directory entry in JSON listing output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryOutput {
    /// File name.
    pub name: String,
    /// `"file"` or `"dir"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Size in bytes; `null` for directories.
    pub size: Option<u64>,
}

impl From<&DirEntry> for EntryOutput {
    fn from(entry: &DirEntry) -> Self {
        Self {
            name: entry.name.clone(),
            kind: kind_label(entry.kind),
            size: entry.size,
        }
    }
}

/// Short label for an entry kind, shared by table and JSON output.
#[must_use]
pub fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::File => "file",
        EntryKind::Directory => "dir",
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: &'static str,
    /// Human-readable error message.
    pub message: String,
    /// Remediation tip, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

impl ErrorOutput {
    /// Construct from an `AppError`.
    #[must_use]
    pub fn from_app_error(err: &AppError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code(),
                message: err.to_string(),
                hint: err.hint(),
            },
        }
    }
}
