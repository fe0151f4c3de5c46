/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod list;
pub mod process;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::files::AppError;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `AppError` on any command failure.
pub fn dispatch(command: &Command, ctx: &OutputCtx) -> Result<(), AppError> {
    match command {
        Command::Process(args) => process::run(args, ctx),
        Command::List(args) => list::run(args, ctx),
    }
}
