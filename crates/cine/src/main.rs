//! Command-line entry point for `cine`.

use std::process::ExitCode;

use cine::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands,
    logging::init_tracing,
};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    // `init` must work even when an existing config file is broken.
    let ctx = if matches!(cli.command, Commands::Init(_)) {
        CommandContext::load_cwd_only()
    } else {
        CommandContext::load()
    };

    match ctx {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}
