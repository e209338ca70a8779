//! CLI integration tests for cine commands.
//!
//! These tests focus on exit codes and observable behavior, not exact
//! formatting which may change.

// Integration tests live outside cfg(test).
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// A small catalog written the way the scrapers emit it (hyphenated keys).
const CATALOG: &str = r#"[
  {
    "wikidata-id": "1",
    "title": "The Matrix",
    "cast": ["Keanu Reeves", "Carrie-Anne Moss"],
    "director": "Lana Wachowski",
    "release-date": "1999",
    "review-score": "80%"
  },
  {
    "wikidata-id": "2",
    "title": "Matrix Reloaded",
    "cast": "Keanu Reeves, Monica Bellucci",
    "review-score": "60%"
  },
  {
    "wikidata-id": "3",
    "title": "Forrest Gump",
    "cast": ["Tom Hanks", "Robin Wright"],
    "director": "Robert Zemeckis",
    "review-score": "70%"
  },
  {
    "wikidata-id": "4",
    "title": "Cast Away",
    "cast": ["Tom Hanks", "Helen Hunt"],
    "review-score": "unknown"
  }
]"#;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a cine command with HOME isolated to the provided directory.
fn cine(home: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("cine").unwrap();
    cmd.env("HOME", home).env_remove("CINE_LOG");
    cmd
}

/// Creates a directory with a `root = true` config pointing at the test catalog.
fn catalog_project() -> tempfile::TempDir {
    let dir = temp_dir();
    fs::write(dir.path().join("movies.json"), CATALOG).unwrap();
    fs::write(
        dir.path().join(".cine.toml"),
        "root = true\n\n[catalog]\npath = \"movies.json\"\n",
    )
    .unwrap();
    dir
}

/// Runs a command that must succeed and parses its stdout as JSON.
fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Extracts result ids from `search --json` output.
fn result_ids(json: &Value) -> Vec<String> {
    json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

/// Strips ANSI escape sequences from a string.
fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(ch);
        }
    }

    output
}

mod search {
    use super::*;

    #[test]
    fn corrects_misspelling_and_filters_by_score() {
        let dir = catalog_project();

        let json = json_output(
            cine(dir.path())
                .current_dir(dir.path())
                .args(["search", "matrx", "-s", "65", "-n", "10", "--json"]),
        );

        assert_eq!(result_ids(&json), vec!["1", "3"]);
        assert_eq!(json["total_matches"], 2);
        assert_eq!(json["correction"]["query"], "matrix");
        assert_eq!(json["correction"]["kind"], "tokens");
        let first = json["results"][0]["score"].as_f64().unwrap();
        let second = json["results"][1]["score"].as_f64().unwrap();
        assert!(first > second);
    }

    #[test]
    fn limit_truncates_to_best_hit() {
        let dir = catalog_project();

        let json = json_output(
            cine(dir.path())
                .current_dir(dir.path())
                .args(["search", "matrx", "-s", "65", "-n", "1", "--json"]),
        );

        assert_eq!(result_ids(&json), vec!["1"]);
    }

    #[test]
    fn unscored_movies_never_appear() {
        let dir = catalog_project();

        let json = json_output(
            cine(dir.path())
                .current_dir(dir.path())
                .args(["search", "cast", "away", "--json"]),
        );

        assert!(!result_ids(&json).contains(&"4".to_string()));
        assert_eq!(result_ids(&json).len(), 3);
    }

    #[test]
    fn config_supplies_threshold_and_limit() {
        let dir = catalog_project();
        fs::write(
            dir.path().join(".cine.toml"),
            "root = true\n[catalog]\npath = \"movies.json\"\n[search]\nscore_threshold = 65\nlimit = 1\n",
        )
        .unwrap();

        let json = json_output(
            cine(dir.path())
                .current_dir(dir.path())
                .args(["search", "tom", "hanks", "--json"]),
        );

        assert_eq!(result_ids(&json), vec!["3"]);
    }

    #[test]
    fn catalog_flag_overrides_config() {
        let dir = temp_dir();
        fs::write(dir.path().join("films.json"), CATALOG).unwrap();

        let json = json_output(
            cine(dir.path())
                .current_dir(dir.path())
                .args(["search", "forrest", "gump", "--catalog", "films.json", "--json"]),
        );

        assert_eq!(result_ids(&json)[0], "3");
    }

    #[test]
    fn list_prints_table() {
        let dir = catalog_project();

        cine(dir.path())
            .current_dir(dir.path())
            .args(["search", "matrix", "-s", "65", "--list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("The Matrix"))
            .stdout(predicate::str::contains("Forrest Gump"))
            .stdout(predicate::str::contains("Matrix Reloaded").not());
    }

    #[test]
    fn full_output_announces_correction() {
        let dir = catalog_project();

        let output = cine(dir.path())
            .current_dir(dir.path())
            .args(["search", "forest", "gump"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("Showing results for \"forrest gump\""));
        assert!(stdout.contains("─── Forrest Gump ───"));
    }

    #[test]
    fn explain_shows_pipeline_statistics() {
        let dir = catalog_project();

        let output = cine(dir.path())
            .current_dir(dir.path())
            .args(["search", "matrx", "-s", "65", "--explain"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("Catalog records:     4"));
        assert!(stdout.contains("After score filter:  2"));
        assert!(stdout.contains("matrx → matrix"));
    }

    #[test]
    fn no_results_is_success() {
        let dir = catalog_project();

        cine(dir.path())
            .current_dir(dir.path())
            .args(["search", "matrix", "-s", "101"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No results found."));
    }

    #[test]
    fn fails_without_catalog() {
        let dir = temp_dir();

        cine(dir.path())
            .current_dir(dir.path())
            .args(["search", "heat"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no catalog configured"));
    }

    #[test]
    fn fails_on_malformed_catalog() {
        let dir = temp_dir();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

        cine(dir.path())
            .current_dir(dir.path())
            .args(["search", "heat", "--catalog", "broken.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("broken.json"));
    }

    #[test]
    fn debug_logs_go_to_stderr() {
        let dir = catalog_project();

        let output = cine(dir.path())
            .current_dir(dir.path())
            .env("CINE_LOG", "debug")
            .args(["search", "matrx", "--json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("corrected query"));
        let json: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["correction"]["query"], "matrix");
    }
}

mod get {
    use super::*;

    #[test]
    fn prints_record_as_json() {
        let dir = catalog_project();

        let json = json_output(
            cine(dir.path())
                .current_dir(dir.path())
                .args(["get", "2", "--json"]),
        );

        assert_eq!(json["title"], "Matrix Reloaded");
        assert_eq!(json["cast"][1], "Monica Bellucci");
        assert_eq!(json["review_score"], "60%");
    }

    #[test]
    fn detail_view_links_wikipedia() {
        let dir = catalog_project();

        let output = cine(dir.path())
            .current_dir(dir.path())
            .args(["get", "3"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("Forrest Gump"));
        assert!(stdout.contains("https://en.wikipedia.org/wiki/Forrest_Gump"));
        assert!(stdout.contains("Robert Zemeckis"));
    }

    #[test]
    fn missing_record_fails() {
        let dir = catalog_project();

        cine(dir.path())
            .current_dir(dir.path())
            .args(["get", "Q404"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("record not found: Q404"));
    }
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let dir = temp_dir();

        cine(dir.path())
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .success();

        let contents = fs::read_to_string(dir.path().join(".cine.toml")).unwrap();
        assert!(contents.contains("# [catalog]"));
        assert!(contents.contains("# limit = 50"));
    }

    #[test]
    fn fails_if_config_exists() {
        let dir = temp_dir();
        fs::write(dir.path().join(".cine.toml"), "existing").unwrap();

        cine(dir.path())
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn force_overwrites_existing() {
        let dir = temp_dir();
        fs::write(dir.path().join(".cine.toml"), "old content").unwrap();

        cine(dir.path())
            .current_dir(dir.path())
            .args(["init", "--force"])
            .assert()
            .success();

        let contents = fs::read_to_string(dir.path().join(".cine.toml")).unwrap();
        assert!(contents.contains("# [search]"));
    }

    #[test]
    fn works_with_broken_existing_config() {
        let dir = temp_dir();
        fs::write(dir.path().join(".cine.toml"), "[[[ broken").unwrap();

        cine(dir.path())
            .current_dir(dir.path())
            .args(["init", "--force"])
            .assert()
            .success();
    }

    #[test]
    fn global_writes_to_home() {
        let home = temp_dir();
        let work = temp_dir();

        cine(home.path())
            .current_dir(work.path())
            .args(["init", "--global"])
            .assert()
            .success();

        assert!(home.path().join(".cine.toml").exists());
        assert!(!work.path().join(".cine.toml").exists());
    }
}

mod status {
    use super::*;

    #[test]
    fn without_config_suggests_init() {
        let dir = temp_dir();

        cine(dir.path())
            .current_dir(dir.path())
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("No configuration files found."));
    }

    #[test]
    fn healthy_config_reports_record_count() {
        let dir = catalog_project();

        let output = cine(dir.path())
            .current_dir(dir.path())
            .arg("status")
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("movies.json (4 records)"));
        assert!(stdout.contains("No issues found."));
    }

    #[test]
    fn missing_catalog_is_reported() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".cine.toml"),
            "root = true\n[catalog]\npath = \"gone.json\"\n",
        )
        .unwrap();

        let output = cine(dir.path())
            .current_dir(dir.path())
            .arg("status")
            .output()
            .unwrap();

        assert!(!output.status.success());
        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("[missing]"));
        assert!(stdout.contains("catalog does not exist"));
    }
}

mod config {
    use super::*;

    #[test]
    fn shows_effective_settings() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".cine.toml"),
            "root = true\n[search]\nlimit = 7\n[weights]\nmusic = 0\n",
        )
        .unwrap();

        let output = cine(dir.path())
            .current_dir(dir.path())
            .arg("config")
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("limit = 7"));
        assert!(stdout.contains("music = 0"));
        assert!(stdout.contains("title = 5"));
    }

    #[test]
    fn invalid_weight_fails() {
        for weight in ["-1", "4000000000"] {
            let dir = temp_dir();
            fs::write(
                dir.path().join(".cine.toml"),
                format!("root = true\n[weights]\ntitle = {weight}\n"),
            )
            .unwrap();

            cine(dir.path())
                .current_dir(dir.path())
                .arg("config")
                .assert()
                .failure()
                .stderr(predicate::str::contains(format!("invalid weight {weight}")));
        }
    }
}
