//! Cosine-similarity ranking of records against a query.

use cine_catalog::Record;
use serde::Serialize;

use crate::VectorSpace;

/// Default maximum number of ranked results.
pub const DEFAULT_LIMIT: usize = 50;

/// A record paired with its similarity to the query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hit<'a> {
    /// The matching record.
    pub record: &'a Record,
    /// Cosine similarity in `[0, 1]`.
    pub score: f64,
}

/// Ranked hits, highest score first.
pub type SearchResult<'a> = Vec<Hit<'a>>;

/// Ranks records by cosine similarity between `query` and their documents.
///
/// `records[i]` must correspond to document `i` of `space`. Equal scores keep
/// corpus order. Records scoring zero are still returned, after every positive
/// score. At most `limit` hits are returned; an empty space or a zero limit
/// yields no hits.
pub fn rank<'a>(
    query: &str,
    space: &VectorSpace,
    records: &[&'a Record],
    limit: usize,
) -> SearchResult<'a> {
    if space.is_empty() || limit == 0 {
        return Vec::new();
    }
    debug_assert_eq!(space.num_documents(), records.len());

    let query_vector = space.project(query);
    let mut hits: Vec<Hit<'a>> = space
        .similarities(&query_vector)
        .into_iter()
        .zip(records)
        .map(|(score, record)| Hit { record, score })
        .collect();

    // Stable sort: ties stay in corpus order.
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits.truncate(limit);
    hits
}
