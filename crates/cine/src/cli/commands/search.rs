//! Implementation of `cine search`.

use std::process::ExitCode;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{output_search_results, print_pipeline_stats},
};

/// Searches the catalog and prints ranked movies.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let corpus = match ctx.corpus(&cmd.catalog) {
        Ok(corpus) => corpus,
        Err(code) => return code,
    };

    let query = cmd.query();
    let params = ctx.search_params(cmd.limit, cmd.min_score);
    let (hits, stats) = ctx.engine().search_with_stats(&query, &params, &corpus);

    if cmd.explain {
        print_pipeline_stats(&stats);
        return ExitCode::SUCCESS;
    }

    output_search_results(&query, &hits, &stats, &cmd.output)
}
