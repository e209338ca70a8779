//! Implementation of `cine get`.

use std::process::ExitCode;

use crate::cli::{
    args::GetCommand,
    context::CommandContext,
    output::{print_json, print_record_detail},
};

/// Retrieves a single record by identifier.
pub fn run(ctx: &CommandContext, cmd: &GetCommand) -> ExitCode {
    let corpus = match ctx.corpus(&cmd.catalog) {
        Ok(corpus) => corpus,
        Err(code) => return code,
    };

    let record = match corpus.get(&cmd.id) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.json {
        return print_json(record);
    }

    print_record_detail(record);
    ExitCode::SUCCESS
}
