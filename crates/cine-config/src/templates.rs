//! Configuration templates for `cine init`.
//!
//! Templates are stored as valid TOML files and returned as commented-out
//! example configurations.

/// Default local configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the local configuration template as a commented-out example.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Returns the global configuration template as a commented-out example.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Converts a valid TOML template into a commented-out example config.
///
/// Lines that are already comments are preserved as-is. Non-comment, non-empty
/// lines get a "# " prefix. Empty lines are preserved.
fn comment_template(template: &str) -> String {
    let mut result = String::with_capacity(template.len() + template.lines().count() * 2);
    for line in template.lines() {
        if !line.is_empty() && !line.starts_with('#') {
            result.push_str("# ");
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::{SearchSettings, merge::ParsedConfig, merge_configs, parse::parse_config};

    #[test]
    fn raw_templates_are_valid_config() {
        for (name, template) in [("local", LOCAL_TEMPLATE), ("global", GLOBAL_TEMPLATE)] {
            if let Err(e) = parse_config(template) {
                panic!("{name} template failed to parse: {e}");
            }
        }
    }

    #[test]
    fn local_template_documents_defaults() {
        let parsed = ParsedConfig {
            path: Path::new("/p/.cine.toml").to_path_buf(),
            config: parse_config(LOCAL_TEMPLATE).unwrap(),
        };
        let config = merge_configs(&[parsed]).unwrap();
        assert_eq!(config.search, SearchSettings::default());
        assert_eq!(config.weights, crate::WeightSettings::default());
    }

    #[test]
    fn rendered_templates_are_fully_commented() {
        for rendered in [local_template(), global_template()] {
            let config = parse_config(&rendered).unwrap();
            assert!(config.catalog.is_none());
            assert!(config.search.is_none());
        }
    }

    #[test]
    fn comment_template_prefixes_only_settings() {
        let cases = [
            ("# already a comment\n", "# already a comment\n"),
            ("limit = 5\n\nkgram_size = 3\n", "# limit = 5\n\n# kgram_size = 3\n"),
            ("[weights]\ntitle = 9\n", "# [weights]\n# title = 9\n"),
        ];
        for (input, expected) in cases {
            assert_eq!(comment_template(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn global_template_names_no_catalog() {
        assert!(!GLOBAL_TEMPLATE.contains("movies.json"));
        assert!(LOCAL_TEMPLATE.contains("path = \"movies.json\""));
    }
}
