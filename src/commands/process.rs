/// `process` command: case-convert files into an output directory.
use crate::cli::OutputCtx;
use crate::cli::args::ProcessArgs;
use crate::cli::output::write_results;
use crate::cli::progress::BatchProgress;
use crate::files::{AppError, ProcessOptions, confirm, confirm_batch, process_files};

/// Run `modcli process`.
///
/// Multi-file batches prompt for confirmation unless `--yes` or `--dry-run`
/// is given. Per-file failures are reported alongside successes.
///
/// # Errors
///
/// Returns `AppError::UserAbort` if the prompt is declined, and
/// `AppError::PartialFailure` if any file failed.
pub fn run(args: &ProcessArgs, ctx: &OutputCtx) -> Result<(), AppError> {
    let opts = ProcessOptions {
        transform: args.transform,
        output_dir: args.output.clone(),
        dry_run: args.dry_run,
        assume_yes: args.yes,
    };

    confirm_batch(args.paths.len(), &opts, |count| {
        eprintln!("About to process {count} files");
        confirm("Continue?")
    })?;

    let _t_process = ctx.timer("process_files");
    let progress = BatchProgress::new(args.paths.len(), ctx.json);
    let results = process_files(&args.paths, &opts, |result| progress.record(result));
    progress.finish();
    let results = results?;
    drop(_t_process);

    write_results(&results, ctx);

    let failed = results.iter().filter(|r| !r.is_success()).count();
    if failed > 0 {
        return Err(AppError::PartialFailure {
            failed,
            total: results.len(),
        });
    }
    Ok(())
}
