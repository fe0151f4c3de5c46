/// Directory listing filtered by a glob pattern.
use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use globset::{GlobBuilder, GlobMatcher};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::errors::{AppError, PathKind};

/// Kind of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name (no directory part).
    pub name: String,
    pub kind: EntryKind,
    /// Size in bytes; `None` for directories.
    pub size: Option<u64>,
    /// Last modification time, if the platform reports one.
    pub modified: Option<DateTime<Local>>,
}

/// Compile a shell-style glob. `*` never crosses a `/`; `**` does.
///
/// # Errors
///
/// Returns [`AppError::InvalidPattern`] if the pattern does not parse.
pub fn compile_pattern(pattern: &str) -> Result<GlobMatcher, AppError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|g| g.compile_matcher())
        .map_err(|source| AppError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })
}

/// Whether `pattern` can match below the top level of the directory.
#[must_use]
pub fn is_recursive(pattern: &str) -> bool {
    pattern.contains('/') || pattern.contains("**")
}

/// List entries of `dir` matching `pattern`, sorted by name.
///
/// Plain patterns are matched against the names of direct children. A
/// pattern with a `/` or `**` is matched against paths relative to `dir`
/// over the whole tree; matches are still reported by their file name.
/// Files and directories are interleaved in name order. A pattern that
/// matches nothing yields an empty list.
///
/// # Errors
///
/// Returns `AppError` if the pattern is invalid, or the directory is
/// missing, unreadable, or not a directory.
pub fn list_dir(dir: &Path, pattern: &str) -> Result<Vec<DirEntry>, AppError> {
    debug!("Listing {} with pattern={pattern}", dir.display());
    let matcher = compile_pattern(pattern)?;

    let meta = fs::metadata(dir).map_err(|e| AppError::from_io(e, dir, PathKind::Directory))?;
    if !meta.is_dir() {
        return Err(AppError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut entries = if is_recursive(pattern) {
        walk_matches(dir, &matcher)
    } else {
        child_matches(dir, &matcher)?
    };

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("Found {} entries", entries.len());
    Ok(entries)
}

fn child_matches(dir: &Path, matcher: &GlobMatcher) -> Result<Vec<DirEntry>, AppError> {
    let read = fs::read_dir(dir).map_err(|e| AppError::from_io(e, dir, PathKind::Directory))?;

    let mut entries = Vec::new();
    for item in read {
        let item = item.map_err(|e| AppError::from_io(e, dir, PathKind::Directory))?;
        let name = item.file_name().to_string_lossy().into_owned();
        if matcher.is_match(&name) {
            entries.push(describe(&item.path(), name));
        }
    }
    Ok(entries)
}

fn walk_matches(dir: &Path, matcher: &GlobMatcher) -> Vec<DirEntry> {
    let mut entries = Vec::new();
    for item in WalkDir::new(dir).min_depth(1) {
        let item = match item {
            Ok(item) => item,
            Err(err) => {
                warn!("Skipping unreadable entry under {}: {err}", dir.display());
                continue;
            }
        };
        let Ok(relative) = item.path().strip_prefix(dir) else {
            continue;
        };
        if matcher.is_match(relative) {
            let name = item.file_name().to_string_lossy().into_owned();
            entries.push(describe(item.path(), name));
        }
    }
    entries
}

fn describe(path: &Path, name: String) -> DirEntry {
    // Follow symlinks like `stat`; fall back to the link itself when dangling.
    let meta = match fs::metadata(path).or_else(|_| fs::symlink_metadata(path)) {
        Ok(meta) => meta,
        Err(err) => {
            warn!("Cannot stat {}: {err}", path.display());
            return DirEntry {
                name,
                kind: EntryKind::File,
                size: None,
                modified: None,
            };
        }
    };

    let kind = if meta.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    };
    DirEntry {
        name,
        kind,
        size: (kind == EntryKind::File).then(|| meta.len()),
        modified: meta.modified().ok().map(DateTime::<Local>::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "hello").unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("c.rs"), "fn main() {}").unwrap();
        dir
    }

    #[test]
    fn test_lists_sorted_by_name() {
        let dir = fixture();
        let entries = list_dir(dir.path(), "*").unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b", "c.rs"]);
        assert_eq!(entries[0].size, Some(5));
        assert_eq!(entries[1].kind, EntryKind::Directory);
        assert_eq!(entries[1].size, None);
        assert!(entries[0].modified.is_some());
    }

    #[test]
    fn test_pattern_filters_names() {
        let dir = fixture();
        let entries = list_dir(dir.path(), "*.txt").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "a.txt");
    }

    #[test]
    fn test_no_match_is_empty() {
        let dir = fixture();
        assert!(list_dir(dir.path(), "*.zip").unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let dir = fixture();
        let err = list_dir(&dir.path().join("nope"), "*").unwrap_err();
        assert!(matches!(
            err,
            AppError::NotFound {
                kind: PathKind::Directory,
                ..
            }
        ));
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let dir = fixture();
        let err = list_dir(&dir.path().join("a.txt"), "*").unwrap_err();
        assert!(matches!(err, AppError::NotADirectory { .. }));
    }

    #[test]
    fn test_nested_pattern_matches_subdirectory() {
        let dir = fixture();
        fs::write(dir.path().join("b").join("x.txt"), "nested").unwrap();
        fs::write(dir.path().join("b").join("y.rs"), "").unwrap();

        let entries = list_dir(dir.path(), "b/*.txt").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "x.txt");
        assert_eq!(entries[0].size, Some(6));
    }

    #[test]
    fn test_double_star_includes_top_level() {
        let dir = fixture();
        fs::create_dir_all(dir.path().join("b").join("deep")).unwrap();
        fs::write(dir.path().join("b").join("deep").join("z.txt"), "z").unwrap();

        let entries = list_dir(dir.path(), "**/*.txt").unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "z.txt"]);
    }

    #[test]
    fn test_single_star_stays_at_top_level() {
        let dir = fixture();
        fs::write(dir.path().join("b").join("x.txt"), "nested").unwrap();
        let entries = list_dir(dir.path(), "*.txt").unwrap();
        assert_eq!(entries.len(), 1);
        assert!(!is_recursive("*.txt"));
        assert!(is_recursive("b/*.txt"));
    }

    #[test]
    fn test_invalid_pattern() {
        let dir = fixture();
        let err = list_dir(dir.path(), "[a-").unwrap_err();
        assert!(matches!(err, AppError::InvalidPattern { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
