//! Review-score eligibility filtering.

use cine_catalog::Record;

/// Review score value meaning "no score available".
pub const UNKNOWN_SCORE: &str = "unknown";

/// Parses a review score such as `"87%"` or `"87"` into an integer percentage.
///
/// Returns `None` for the `unknown` sentinel (any case) and for anything that is
/// not an integer once a trailing `%` is removed.
pub fn parse_review_score(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case(UNKNOWN_SCORE) {
        return None;
    }
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    number.parse().ok()
}

/// True when the record has a parseable review score of at least `threshold`.
pub fn is_eligible(record: &Record, threshold: i64) -> bool {
    record
        .review_score
        .as_deref()
        .and_then(parse_review_score)
        .is_some_and(|score| score >= threshold)
}

/// Keeps records whose review score is known and at least `threshold`.
///
/// Records with a missing or malformed score are silently excluded. Corpus
/// order is preserved.
pub fn filter_by_score<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    threshold: i64,
) -> Vec<&'a Record> {
    records
        .into_iter()
        .filter(|record| is_eligible(record, threshold))
        .collect()
}
