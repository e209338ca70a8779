//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    CatalogSettings, Config, ConfigError, MAX_WEIGHT, SearchSettings, WeightSettings,
    parse::{RawConfig, RawSearchSettings},
    resolve::resolve_catalog_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory holding the config file, used to resolve relative paths.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings and individual weights: first defined value wins
/// - Catalog paths: the whole list comes from the first file that sets `catalog.path`,
///   resolved against that file's directory
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let catalog = merge_catalog(configs)?;
    let search = merge_search_settings(configs);
    let weights = merge_weights(configs)?;
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(Path::to_path_buf);

    Ok(Config {
        catalog,
        search,
        weights,
        config_root,
    })
}

/// Merges catalog settings.
fn merge_catalog(configs: &[ParsedConfig]) -> Result<CatalogSettings, ConfigError> {
    let mut result = CatalogSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(dedupe) = parsed.config.catalog.as_ref().and_then(|c| c.dedupe_titles) {
            result.dedupe_titles = dedupe;
        }
    }

    let declaring = configs.iter().find_map(|parsed| {
        let paths = parsed.config.catalog.as_ref()?.path.as_ref()?;
        Some((parsed, paths))
    });
    if let Some((parsed, paths)) = declaring {
        result.paths = paths
            .iter()
            .map(|path| resolve_catalog_path(path, parsed.dir()))
            .collect::<Result<_, _>>()?;
    }

    Ok(result)
}

/// Merges search settings.
fn merge_search_settings(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();

    // Lowest precedence first so higher precedence overwrites.
    for parsed in configs.iter().rev() {
        if let Some(ref search) = parsed.config.search {
            apply_raw_search(&mut result, search);
        }
    }

    result
}

/// Applies raw search settings to result.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
    if let Some(v) = raw.score_threshold {
        result.score_threshold = v;
    }
    if let Some(v) = raw.kgram_size {
        result.kgram_size = v;
    }
    if let Some(v) = raw.correction_threshold {
        result.correction_threshold = v;
    }
    if let Some(v) = raw.token_correction {
        result.token_correction = v;
    }
}

/// Merges field weights one field at a time, rejecting out-of-range values.
fn merge_weights(configs: &[ParsedConfig]) -> Result<WeightSettings, ConfigError> {
    let mut result = WeightSettings::default();

    for parsed in configs.iter().rev() {
        let Some(ref weights) = parsed.config.weights else {
            continue;
        };
        for (field, value) in weights.present() {
            let weight = u32::try_from(value)
                .ok()
                .filter(|weight| *weight <= MAX_WEIGHT)
                .ok_or_else(|| ConfigError::InvalidWeight {
                    path: parsed.path.clone(),
                    field: field.to_string(),
                    value,
                })?;
            if let Some(slot) = result.slot_mut(field) {
                *slot = weight;
            }
        }
    }

    Ok(result)
}
