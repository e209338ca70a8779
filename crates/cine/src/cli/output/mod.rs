//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use cine_catalog::{Field, Record};
pub use cine_highlight::{dim, header, rule, subheader, warning};
use cine_highlight::emphasize_terms;
use cine_rank::{Correction, CorrectionKind, Hit, PipelineStats, tokenize};
use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;

use crate::cli::args::OutputArgs;

/// Width of separators between results.
const RULE_WIDTH: usize = 60;

/// A ranked record in JSON output.
#[derive(Serialize)]
struct JsonHit<'a> {
    /// Cosine similarity to the corrected query.
    score: f64,
    /// The record itself.
    #[serde(flatten)]
    record: &'a Record,
}

/// JSON output for `cine search`.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The query as typed.
    query: &'a str,
    /// How the query was corrected before ranking.
    correction: &'a Correction,
    /// Number of records returned.
    total_matches: usize,
    /// Ranked records, best first.
    results: Vec<JsonHit<'a>>,
}

/// Prints search results in the selected output mode.
pub fn output_search_results(
    query: &str,
    hits: &[Hit<'_>],
    stats: &PipelineStats,
    output: &OutputArgs,
) -> ExitCode {
    if output.json {
        let json_output = JsonSearchOutput {
            query,
            correction: &stats.correction,
            total_matches: hits.len(),
            results: hits
                .iter()
                .map(|hit| JsonHit {
                    score: hit.score,
                    record: hit.record,
                })
                .collect(),
        };
        return print_json(&json_output);
    }

    if stats.correction.is_rewrite() {
        println!(
            "{}",
            dim(&format!("Showing results for \"{}\"", stats.correction.query))
        );
        println!();
    }

    if hits.is_empty() {
        println!("{}", dim("No results found."));
        return ExitCode::SUCCESS;
    }

    let terms: Vec<String> = tokenize(&stats.correction.query).collect();
    if output.list {
        println!("{}", results_table(hits));
    } else {
        for hit in hits {
            print!("{}", format_hit(hit, &terms));
            println!();
        }
    }

    ExitCode::SUCCESS
}

/// Serializes a value as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Builds the compact `--list` table.
fn results_table(hits: &[Hit<'_>]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Title", "Released", "Review", "Score", "Id"]);
    for (rank, hit) in hits.iter().enumerate() {
        let record = hit.record;
        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(record.display_title()),
            Cell::new(record.release_date.as_deref().unwrap_or("")),
            Cell::new(record.review_score.as_deref().unwrap_or("")),
            Cell::new(format!("{:.3}", hit.score)).set_alignment(CellAlignment::Right),
            Cell::new(&record.id),
        ]);
    }
    table
}

/// Formats one hit for the default, full display.
fn format_hit(hit: &Hit<'_>, terms: &[String]) -> String {
    let record = hit.record;
    let mut output = String::new();

    let title = emphasize_terms(record.display_title(), terms);
    output.push_str(&format!("─── {title} ───\n"));

    let mut facts = vec![record.id.clone()];
    if let Some(date) = &record.release_date {
        facts.push(date.clone());
    }
    if let Some(score) = &record.review_score {
        facts.push(format!("reviews {score}"));
    }
    facts.push(format!("score {:.3}", hit.score));
    output.push_str(&format!("{}\n", dim(&facts.join(" · "))));

    for field in [Field::Director, Field::Cast] {
        if let Some(value) = record.text(field) {
            output.push_str(&format!(
                "{} {}\n",
                dim(&format!("{field}:")),
                emphasize_terms(&value, terms)
            ));
        }
    }

    if let Some(description) = &record.description {
        output.push('\n');
        output.push_str(&emphasize_terms(description, terms));
        output.push('\n');
    }

    output
}

/// Prints the full detail view of one record.
pub fn print_record_detail(record: &Record) {
    println!("{}", header(record.display_title()));
    println!("{}", rule(RULE_WIDTH));

    let mut rows: Vec<(&str, String)> = vec![("id", record.id.clone())];
    for field in Field::ALL {
        if field == Field::Title || field == Field::Description {
            continue;
        }
        if let Some(value) = record.text(field) {
            rows.push((field.name(), value.into_owned()));
        }
    }
    if let Some(score) = &record.review_score {
        rows.push(("review_score", score.clone()));
    }
    if let Some(id) = &record.rotten_tomatoes_id {
        rows.push(("rotten_tomatoes", id.clone()));
    }
    if let Some(id) = &record.freebase_id {
        rows.push(("freebase", id.clone()));
    }
    if let Some(url) = record.wikipedia_url() {
        rows.push(("wikipedia", url));
    }
    if let Some(url) = record.clickstream_url() {
        rows.push(("clickstream", url));
    }

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in rows {
        println!("{} {value}", dim(&format!("{label:<width$}")));
    }

    if let Some(description) = &record.description {
        println!();
        println!("{description}");
    }
}

/// Prints the correction decision and pipeline counters for `--explain`.
pub fn print_pipeline_stats(stats: &PipelineStats) {
    let correction = &stats.correction;

    println!("{}", subheader("Query:"));
    println!("   {}", correction.original);
    println!();

    println!("{}", subheader("Correction:"));
    println!("   {}", describe_correction(correction));
    println!("   corrected query = {:?}", correction.query);
    println!();

    println!("{}", subheader("Pipeline Statistics:"));
    println!("  Catalog records:     {}", stats.corpus_size);
    println!("  After score filter:  {}", stats.filtered_count);
    println!("  Vocabulary terms:    {}", stats.vocabulary_size);
    println!("  Results:             {}", stats.result_count);
    println!();
}

/// Describes how a query was corrected, in one line.
fn describe_correction(correction: &Correction) -> String {
    match &correction.kind {
        CorrectionKind::Exact => "exact match with a catalog value".to_string(),
        CorrectionKind::Fuzzy { similarity } => {
            format!("replaced by closest catalog value (similarity {similarity:.3})")
        }
        CorrectionKind::Tokens { replaced } => {
            let pairs: Vec<String> = replaced
                .iter()
                .map(|(from, to)| format!("{from} → {to}"))
                .collect();
            format!("corrected words: {}", pairs.join(", "))
        }
        CorrectionKind::Unchanged => "no similar catalog value; query kept".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record {
            title: Some("The Matrix".into()),
            director: Some("Lana Wachowski".into()),
            cast: vec!["Keanu Reeves".into(), "Carrie-Anne Moss".into()],
            release_date: Some("1999".into()),
            review_score: Some("88%".into()),
            ..Record::new("Q83495")
        }
    }

    #[test]
    fn hit_shows_title_facts_and_credits() {
        let record = record();
        let hit = Hit {
            record: &record,
            score: 0.5,
        };

        let text = format_hit(&hit, &[]);

        assert!(text.starts_with("─── The Matrix ───\n"));
        assert!(text.contains("Q83495"));
        assert!(text.contains("reviews 88%"));
        assert!(text.contains("score 0.500"));
        assert!(text.contains("Keanu Reeves, Carrie-Anne Moss"));
        assert!(text.contains("Lana Wachowski"));
    }

    #[test]
    fn table_has_one_row_per_hit() {
        let record = record();
        let hits = vec![
            Hit {
                record: &record,
                score: 0.9,
            },
            Hit {
                record: &record,
                score: 0.1,
            },
        ];

        let rendered = results_table(&hits).to_string();

        assert!(rendered.contains("Title"));
        assert_eq!(rendered.matches("The Matrix").count(), 2);
        assert!(rendered.contains("0.900"));
    }

    #[test]
    fn json_hit_flattens_record() {
        let record = record();
        let hit = JsonHit {
            score: 0.25,
            record: &record,
        };

        let value = serde_json::to_value(&hit).unwrap();

        assert_eq!(value["score"], 0.25);
        assert_eq!(value["id"], "Q83495");
        assert_eq!(value["title"], "The Matrix");
    }

    #[test]
    fn token_correction_is_described_with_pairs() {
        let correction = Correction {
            original: "matrx".into(),
            query: "matrix".into(),
            kind: CorrectionKind::Tokens {
                replaced: vec![("matrx".into(), "matrix".into())],
            },
        };
        assert_eq!(describe_correction(&correction), "corrected words: matrx → matrix");
    }
}
