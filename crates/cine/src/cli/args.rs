//! Clap argument definitions for the `cine` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "cine")]
#[command(about = "Search a movie catalog with typo-tolerant, field-weighted ranking")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Catalog selection shared by commands that read records.
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Catalog file to read instead of the configured one (repeatable)
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalogs: Vec<PathBuf>,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output a compact table of results
    #[arg(long, conflicts_with = "json")]
    pub list: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `cine search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query words; several words are joined with spaces
    #[arg(required = true)]
    pub queries: Vec<String>,

    /// Maximum results to return [default: 50]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Minimum review score in percent [default: 0]
    #[arg(short = 's', long, allow_negative_numbers = true)]
    pub min_score: Option<i64>,

    #[command(flatten)]
    /// Catalog overrides.
    pub catalog: CatalogArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,

    /// Show the corrected query and pipeline statistics
    #[arg(long)]
    pub explain: bool,
}

impl SearchCommand {
    /// Returns the query words joined into one query string.
    pub fn query(&self) -> String {
        self.queries.join(" ")
    }
}

/// Arguments for `cine get`.
#[derive(Args, Debug, Clone)]
pub struct GetCommand {
    /// Record identifier (Wikidata id)
    pub id: String,

    #[command(flatten)]
    /// Catalog overrides.
    pub catalog: CatalogArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `cine init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.cine.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `cine` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog and print ranked movies
    #[command(after_help = "\
QUERIES:
  Queries are matched against titles, cast, directors, descriptions,
  release dates, countries, composers and running times. Misspellings
  are corrected against the catalog before ranking.

EXAMPLES:
  cine search matrx
  cine search tom hanks -s 80
  cine search 'forrest gump' --json
  cine search wachowski --list -n 5")]
    Search(SearchCommand),

    /// Show a single movie by identifier
    Get(GetCommand),

    /// Initialize cine configuration in current directory
    Init(InitCommand),

    /// Show status and validate configuration
    Status,

    /// Show effective configuration settings
    Config,
}
