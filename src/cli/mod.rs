/// CLI layer: argument parsing, logging setup, output formatting.
pub mod args;
pub mod logging;
pub mod output;
pub mod progress;

pub use args::Cli;
pub use output::{OutputCtx, write_error};
