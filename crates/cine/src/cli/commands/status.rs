//! Implementation of `cine status`.

use std::process::ExitCode;

use cine_catalog::Corpus;
use cine_config::{ConfigWarning, discover_config_files, format_path_for_display};

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Shows configuration files, catalogs, search settings, and validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;

    let config_files = discover_config_files(cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("cine init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        println!("   {}", format_path_for_display(path, Some(cwd)));
    }
    println!();

    let config = &ctx.config;

    println!("{}", subheader("Catalogs:"));
    if config.catalog.paths.is_empty() {
        println!("   {}", dim("(none defined)"));
    }
    for path in &config.catalog.paths {
        let display_path = format_path_for_display(path, config.config_root.as_deref());
        if !path.is_file() {
            println!("   {display_path} {}", warning("[missing]"));
            continue;
        }
        match Corpus::load(path) {
            Ok(corpus) => println!(
                "   {display_path} {}",
                dim(&format!("({} records)", corpus.len()))
            ),
            Err(e) => println!("   {display_path} {}", warning(&format!("[{e}]"))),
        }
    }
    if config.catalog.dedupe_titles {
        println!("   {}", dim("duplicate titles are collapsed"));
    }
    println!();

    let search = &config.search;
    println!("{}", subheader("Search:"));
    println!(
        "   limit {} · min score {} · k-grams {} · correction threshold {} · word correction {}",
        search.limit,
        search.score_threshold,
        search.kgram_size,
        search.correction_threshold,
        if search.token_correction { "on" } else { "off" }
    );
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::NoCatalogDefined => {
                println!("{}", dim("Hint: add [catalog] path = \"movies.json\" to .cine.toml"));
            }
            ConfigWarning::CatalogMissing { .. } | ConfigWarning::CatalogNotFile { .. } => {
                println!(
                    "{}",
                    dim("Hint: catalog paths are relative to the config file declaring them")
                );
            }
            ConfigWarning::AllWeightsZero => {
                println!("{}", dim("Hint: give at least one field in [weights] a positive value"));
            }
            _ => {}
        }
    }
}
