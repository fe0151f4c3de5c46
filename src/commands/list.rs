/// `list` command: list directory entries matching a glob.
use std::fs;

use crate::cli::OutputCtx;
use crate::cli::args::ListArgs;
use crate::cli::output::write_entries;
use crate::files::{AppError, list_dir};

/// Run `modcli list`.
///
/// # Errors
///
/// Returns `AppError` if the pattern is invalid or the directory is missing
/// or unreadable. An empty match is not an error.
pub fn run(args: &ListArgs, ctx: &OutputCtx) -> Result<(), AppError> {
    let _t_list = ctx.timer("list_dir");
    let entries = list_dir(&args.directory, &args.pattern)?;
    drop(_t_list);

    let shown = fs::canonicalize(&args.directory).unwrap_or_else(|_| args.directory.clone());
    write_entries(&shown, &args.pattern, &entries, ctx);
    Ok(())
}
