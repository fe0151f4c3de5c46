#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! modcli — transform text files and list directories.

mod cli;
mod commands;
mod files;
mod types;

use clap::Parser;
use clap::error::ErrorKind;

use cli::{Cli, OutputCtx, write_error};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    cli::logging::init(cli.verbose);

    let ctx = OutputCtx::new(cli.command.json(), cli.verbose);

    if let Err(err) = commands::dispatch(&cli.command, &ctx) {
        write_error(&err, ctx.json);
        std::process::exit(err.exit_code());
    }
}
