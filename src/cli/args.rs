/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::files::Transform;

/// modcli — transform text files and list directories.
#[derive(Debug, Parser)]
#[command(
    name = "modcli",
    about = "Process files and list directories with readable output",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Emit debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply a case transform to files and write the results.
    Process(ProcessArgs),
    /// List directory contents as a table or JSON.
    List(ListArgs),
}

impl Command {
    /// Whether the command asked for JSON output.
    #[must_use]
    pub fn json(&self) -> bool {
        match self {
            Self::Process(args) => args.json,
            Self::List(args) => args.json,
        }
    }
}

/// Arguments for `modcli process`.
#[derive(Debug, Parser)]
pub struct ProcessArgs {
    /// Files to process.
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Transformation to apply.
    #[arg(short, long, value_name = "KIND", default_value = "upper")]
    pub transform: Transform,

    /// Output directory (default: current directory).
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Preview changes without writing.
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt for multiple files.
    #[arg(short, long)]
    pub yes: bool,

    /// Report results as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `modcli list`.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Directory to list (default: current directory).
    #[arg(value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Glob pattern matched against entry names.
    #[arg(short, long, value_name = "GLOB", default_value = "*")]
    pub pattern: String,

    /// Output as JSON (machine-readable).
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_defaults() {
        let cli = Cli::try_parse_from(["modcli", "process", "a.txt", "b.txt"]).unwrap();
        let Command::Process(args) = cli.command else {
            panic!("expected process");
        };
        assert_eq!(args.paths.len(), 2);
        assert_eq!(args.transform, Transform::Upper);
        assert!(args.output.is_none());
        assert!(!args.dry_run && !args.yes && !args.json);
    }

    #[test]
    fn test_process_flags() {
        let cli = Cli::try_parse_from([
            "modcli", "process", "a.txt", "-t", "lower", "-o", "out", "--dry-run", "-y",
        ])
        .unwrap();
        let Command::Process(args) = cli.command else {
            panic!("expected process");
        };
        assert_eq!(args.transform, Transform::Lower);
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert!(args.dry_run && args.yes);
    }

    #[test]
    fn test_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["modcli", "list", "--json", "-v"]).unwrap();
        assert!(cli.verbose);
        let Command::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.directory, PathBuf::from("."));
        assert_eq!(args.pattern, "*");
        assert!(args.json);
    }

    #[test]
    fn test_rejects_unknown_transform() {
        assert!(Cli::try_parse_from(["modcli", "process", "a", "-t", "title"]).is_err());
    }

    #[test]
    fn test_process_requires_paths() {
        assert!(Cli::try_parse_from(["modcli", "process"]).is_err());
    }
}
