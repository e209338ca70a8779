//! Configuration system for cine.
//!
//! cine uses TOML configuration files named `.cine.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.cine.toml` files
//! found, then loading `~/.cine.toml` as the global config with lowest precedence.
//!
//! A config names the catalog file(s) to search and tunes correction, filtering and field
//! weights. Every setting has a default, so an empty or missing config is valid; only the
//! catalog path has to come from somewhere (a config file or the command line).

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawCatalog, RawConfig, RawSearchSettings, RawWeights, parse_config_file, parse_config_str,
};
pub use resolve::{format_path_for_display, resolve_catalog_path};
use serde::Serialize;
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default maximum number of search results.
pub const DEFAULT_LIMIT: usize = 50;

/// Default minimum review score.
pub const DEFAULT_SCORE_THRESHOLD: i64 = 0;

/// Default character k-gram length for query correction.
pub const DEFAULT_KGRAM_SIZE: usize = 2;

/// Default minimum Jaccard similarity for query correction.
pub const DEFAULT_CORRECTION_THRESHOLD: f64 = 0.5;

/// Largest accepted field weight. A weight repeats the field's text that many
/// times in every indexed document.
pub const MAX_WEIGHT: u32 = 100;

/// Top-level merged configuration for cine.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Catalog location and load options.
    pub catalog: CatalogSettings,
    /// Search-related settings.
    pub search: SearchSettings,
    /// Per-field document weights.
    pub weights: WeightSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.cine.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML, in the layout of a `.cine.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, toml::ser::Error> {
        let serializable = SerializableSettings {
            catalog: &self.catalog,
            search: &self.search,
            weights: &self.weights,
        };
        toml::to_string_pretty(&serializable)
    }
}

/// Catalog location and load options.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogSettings {
    /// Resolved catalog files, loaded and concatenated in order.
    #[serde(rename = "path")]
    pub paths: Vec<PathBuf>,
    /// Collapse records sharing a title after loading.
    pub dedupe_titles: bool,
}

/// Search-related settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSettings {
    /// Maximum results to return.
    pub limit: usize,
    /// Minimum review score (inclusive).
    pub score_threshold: i64,
    /// Character k-gram length used for query correction.
    pub kgram_size: usize,
    /// Minimum Jaccard similarity for a correction.
    pub correction_threshold: f64,
    /// Fall back to per-word correction when the whole query matches nothing.
    pub token_correction: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            kgram_size: DEFAULT_KGRAM_SIZE,
            correction_threshold: DEFAULT_CORRECTION_THRESHOLD,
            token_correction: true,
        }
    }
}

/// How many times each field is repeated in a record's document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightSettings {
    /// Title weight.
    pub title: u32,
    /// Cast weight.
    pub cast: u32,
    /// Director weight.
    pub director: u32,
    /// Description weight.
    pub description: u32,
    /// Release date weight.
    pub release_date: u32,
    /// Country weight.
    pub country: u32,
    /// Music weight.
    pub music: u32,
    /// Duration weight.
    pub duration: u32,
}

impl WeightSettings {
    /// Returns `(field name, weight)` pairs in table order.
    pub fn pairs(&self) -> [(&'static str, u32); 8] {
        [
            ("title", self.title),
            ("cast", self.cast),
            ("director", self.director),
            ("description", self.description),
            ("release_date", self.release_date),
            ("country", self.country),
            ("music", self.music),
            ("duration", self.duration),
        ]
    }

    /// Returns a mutable slot for a field name, if the name is known.
    fn slot_mut(&mut self, field: &str) -> Option<&mut u32> {
        match field {
            "title" => Some(&mut self.title),
            "cast" => Some(&mut self.cast),
            "director" => Some(&mut self.director),
            "description" => Some(&mut self.description),
            "release_date" => Some(&mut self.release_date),
            "country" => Some(&mut self.country),
            "music" => Some(&mut self.music),
            "duration" => Some(&mut self.duration),
            _ => None,
        }
    }
}

impl Default for WeightSettings {
    fn default() -> Self {
        Self {
            title: 5,
            cast: 3,
            director: 3,
            description: 2,
            release_date: 2,
            country: 2,
            music: 1,
            duration: 1,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Catalog settings.
    catalog: &'a CatalogSettings,
    /// Search settings.
    search: &'a SearchSettings,
    /// Field weights.
    weights: &'a WeightSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_settings_defaults() {
        let search = SearchSettings::default();
        assert_eq!(search.limit, 50);
        assert_eq!(search.score_threshold, 0);
        assert_eq!(search.kgram_size, 2);
        assert!((search.correction_threshold - 0.5).abs() < f64::EPSILON);
        assert!(search.token_correction);
    }

    #[test]
    fn test_weight_defaults_in_table_order() {
        let pairs = WeightSettings::default().pairs();
        assert_eq!(
            pairs,
            [
                ("title", 5),
                ("cast", 3),
                ("director", 3),
                ("description", 2),
                ("release_date", 2),
                ("country", 2),
                ("music", 1),
                ("duration", 1),
            ]
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.catalog.paths.is_empty());
        assert!(!config.catalog.dedupe_titles);
        assert!(config.config_root.is_none());
    }

    #[test]
    fn test_settings_to_toml() {
        let mut config = Config::default();
        config.catalog.paths = vec![PathBuf::from("/srv/movies.json")];
        let toml = config.settings_to_toml().unwrap();

        assert!(toml.contains("[catalog]"));
        assert!(toml.contains("[search]"));
        assert!(toml.contains("[weights]"));
        assert!(toml.contains("limit = 50"));
        assert!(toml.contains("title = 5"));
        assert!(toml.contains("/srv/movies.json"));

        // The rendered settings must read back as a config file.
        let reparsed = parse_config_str(&toml, Path::new("rendered.toml")).unwrap();
        assert_eq!(reparsed.search.unwrap().limit, Some(50));
        assert_eq!(reparsed.weights.unwrap().title, Some(5));
    }
}
