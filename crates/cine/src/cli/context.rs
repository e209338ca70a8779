//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use cine_catalog::{Corpus, Field};
use cine_config::Config;
use cine_rank::{FieldWeights, QueryCorrector, SearchEngine, SearchParams};
use tracing::{debug, info};

use crate::cli::args::CatalogArgs;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Returns the catalog files to read: command-line paths if given, else configured ones.
    pub fn catalog_paths(&self, args: &CatalogArgs) -> Vec<PathBuf> {
        if args.catalogs.is_empty() {
            self.config.catalog.paths.clone()
        } else {
            args.catalogs.iter().map(|p| self.cwd.join(p)).collect()
        }
    }

    /// Loads the corpus, applying title de-duplication when configured.
    pub fn corpus(&self, args: &CatalogArgs) -> Result<Corpus, ExitCode> {
        let paths = self.catalog_paths(args);
        if paths.is_empty() {
            eprintln!("error: no catalog configured");
            eprintln!(
                "Run 'cine init' and set [catalog] path, or pass --catalog PATH."
            );
            return Err(ExitCode::FAILURE);
        }

        let mut corpus = Corpus::load_all(&paths).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;

        if self.config.catalog.dedupe_titles {
            let removed = corpus.dedup_by_title();
            info!(removed, remaining = corpus.len(), "collapsed duplicate titles");
        }
        debug!(files = paths.len(), records = corpus.len(), "catalog ready");

        Ok(corpus)
    }

    /// Builds a search engine from the configured weights and correction settings.
    pub fn engine(&self) -> SearchEngine {
        let weights = FieldWeights::new(
            self.config
                .weights
                .pairs()
                .into_iter()
                .filter_map(|(name, weight)| name.parse::<Field>().ok().map(|f| (f, weight))),
        );
        let search = &self.config.search;
        SearchEngine::new(weights)
            .with_corrector(QueryCorrector::new(
                search.kgram_size,
                search.correction_threshold,
            ))
            .with_token_correction(search.token_correction)
    }

    /// Builds per-request parameters, preferring command-line overrides.
    pub fn search_params(&self, limit: Option<usize>, min_score: Option<i64>) -> SearchParams {
        SearchParams {
            score_threshold: min_score.unwrap_or(self.config.search.score_threshold),
            limit: limit.unwrap_or(self.config.search.limit),
        }
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
