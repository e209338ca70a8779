//! Term extraction shared by indexing and query projection.

/// Minimum term length in characters; single characters are never indexed.
const MIN_TERM_CHARS: usize = 2;

/// Splits text into lowercase terms.
///
/// Any character that is neither alphanumeric nor `_` separates terms. No
/// stemming and no stop-word removal is applied.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !is_term_char(c))
        .filter(|s| s.chars().count() >= MIN_TERM_CHARS)
        .map(str::to_lowercase)
}

/// Collapses runs of whitespace into single spaces and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns true for characters that belong inside a term.
fn is_term_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
