//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// No catalog file is configured.
    NoCatalogDefined,
    /// A catalog path does not exist.
    CatalogMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// A catalog path exists but is not a file.
    CatalogNotFile {
        /// Path that is not a file.
        path: String,
    },
    /// Every field weight is zero, so every search scores zero.
    AllWeightsZero,
    /// The correction threshold is outside `[0, 1]`.
    ThresholdOutOfRange {
        /// The configured threshold.
        value: f64,
    },
    /// A k-gram size of zero disables fuzzy correction entirely.
    KgramSizeZero,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCatalogDefined => write!(f, "no catalog is defined in configuration"),
            Self::CatalogMissing { path } => write!(f, "catalog does not exist: {path}"),
            Self::CatalogNotFile { path } => write!(f, "catalog is not a file: {path}"),
            Self::AllWeightsZero => {
                write!(f, "all field weights are zero; every result will score 0")
            }
            Self::ThresholdOutOfRange { value } => {
                write!(f, "correction_threshold {value} is outside 0.0..=1.0")
            }
            Self::KgramSizeZero => {
                write!(f, "kgram_size is 0; only exact matches will be recognized")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.catalog.paths.is_empty() {
        warnings.push(ConfigWarning::NoCatalogDefined);
    }

    for path in &config.catalog.paths {
        let path_str = path.display().to_string();
        if !path.exists() {
            warnings.push(ConfigWarning::CatalogMissing { path: path_str });
        } else if !path.is_file() {
            warnings.push(ConfigWarning::CatalogNotFile { path: path_str });
        }
    }

    if config.weights.pairs().iter().all(|(_, w)| *w == 0) {
        warnings.push(ConfigWarning::AllWeightsZero);
    }

    let threshold = config.search.correction_threshold;
    if !(0.0..=1.0).contains(&threshold) {
        warnings.push(ConfigWarning::ThresholdOutOfRange { value: threshold });
    }

    if config.search.kgram_size == 0 {
        warnings.push(ConfigWarning::KgramSizeZero);
    }

    warnings
}
