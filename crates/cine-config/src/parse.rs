//! Configuration file parsing.
//!
//! Parses individual `.cine.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Catalog section.
    pub catalog: Option<RawCatalog>,
    /// Search section.
    pub search: Option<RawSearchSettings>,
    /// Field weight section.
    pub weights: Option<RawWeights>,
}

/// Raw catalog settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCatalog {
    /// Catalog file(s). Accepts a single string or an array of strings.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub path: Option<Vec<String>>,
    /// Collapse records sharing a title after loading.
    pub dedupe_titles: Option<bool>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Maximum results to return.
    pub limit: Option<usize>,
    /// Minimum review score (inclusive).
    pub score_threshold: Option<i64>,
    /// Character k-gram length used for query correction.
    pub kgram_size: Option<usize>,
    /// Minimum Jaccard similarity for a correction.
    pub correction_threshold: Option<f64>,
    /// Whether to fall back to per-word correction.
    pub token_correction: Option<bool>,
}

/// Raw field weights.
///
/// Values are signed so that negative weights can be reported with the file
/// they came from instead of as a bare TOML type error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawWeights {
    /// Title weight.
    pub title: Option<i64>,
    /// Cast weight.
    pub cast: Option<i64>,
    /// Director weight.
    pub director: Option<i64>,
    /// Description weight.
    pub description: Option<i64>,
    /// Release date weight.
    #[serde(alias = "release-date")]
    pub release_date: Option<i64>,
    /// Country weight.
    pub country: Option<i64>,
    /// Music weight.
    pub music: Option<i64>,
    /// Duration weight.
    pub duration: Option<i64>,
}

impl RawWeights {
    /// Returns `(field name, value)` for every weight set in this file.
    pub fn present(&self) -> impl Iterator<Item = (&'static str, i64)> {
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
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.catalog.is_none());
        assert!(config.search.is_none());
        assert!(config.weights.is_none());
    }

    #[test]
    fn test_parse_single_catalog_path() {
        let toml = r#"
[catalog]
path = "movies.json"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let catalog = config.catalog.unwrap();
        assert_eq!(catalog.path, Some(vec!["movies.json".to_string()]));
        assert!(catalog.dedupe_titles.is_none());
    }

    #[test]
    fn test_parse_multiple_catalog_paths() {
        let toml = r#"
[catalog]
path = ["classics.json", "~/films/new.json"]
dedupe_titles = true
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let catalog = config.catalog.unwrap();
        assert_eq!(
            catalog.path,
            Some(vec![
                "classics.json".to_string(),
                "~/films/new.json".to_string()
            ])
        );
        assert_eq!(catalog.dedupe_titles, Some(true));
    }

    #[test]
    fn test_parse_search_settings() {
        let toml = r#"
[search]
limit = 10
score_threshold = 65
kgram_size = 3
correction_threshold = 0.4
token_correction = false
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let search = config.search.unwrap();
        assert_eq!(search.limit, Some(10));
        assert_eq!(search.score_threshold, Some(65));
        assert_eq!(search.kgram_size, Some(3));
        assert_eq!(search.correction_threshold, Some(0.4));
        assert_eq!(search.token_correction, Some(false));
    }

    #[test]
    fn test_parse_partial_weights() {
        let toml = r#"
[weights]
title = 8
release-date = 0
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let weights = config.weights.unwrap();
        assert_eq!(weights.title, Some(8));
        assert_eq!(weights.release_date, Some(0));
        assert!(weights.cast.is_none());
        let present: Vec<_> = weights.present().collect();
        assert_eq!(present, vec![("title", 8), ("release_date", 0)]);
    }

    #[test]
    fn test_parse_unknown_weight_field_is_error() {
        let toml = r#"
[weights]
tagline = 2
"#;
        let err = parse_config_str(toml, Path::new("test.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_config_str("this is not valid toml [[[", Path::new("test.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }

    #[test]
    fn test_parse_root_flag() {
        let config = parse_config("root = true\n").unwrap();
        assert_eq!(config.root, Some(true));
    }
}
