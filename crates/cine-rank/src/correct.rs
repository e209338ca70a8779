//! Fuzzy query correction against catalog field values.
//!
//! A query is compared to every candidate string in the (filtered) corpus using
//! Jaccard similarity over character k-grams. Candidates are the weighted fields
//! of each record in table order, with every cast member as its own candidate,
//! followed by the record's id and review score.
//!
//! Correction never fails: when nothing is similar enough the lower-cased query
//! is returned as-is.

use std::collections::{HashMap, HashSet};

use cine_catalog::{Field, Record};
use serde::Serialize;

use crate::{
    kgram::{jaccard, kgrams},
    tokenize::tokenize,
};

/// Default k-gram length.
pub const DEFAULT_KGRAM_SIZE: usize = 2;

/// Default minimum Jaccard similarity for a correction.
pub const DEFAULT_CORRECTION_THRESHOLD: f64 = 0.5;

/// How a query was rewritten.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorrectionKind {
    /// The query equals a field value; nothing to correct.
    Exact,
    /// The whole query was replaced by the most similar field value.
    Fuzzy {
        /// Jaccard similarity of the chosen candidate.
        similarity: f64,
    },
    /// Individual words were replaced by similar catalog words.
    Tokens {
        /// `(original, replacement)` pairs in query order.
        replaced: Vec<(String, String)>,
    },
    /// No candidate met the threshold.
    Unchanged,
}

/// The result of correcting a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Correction {
    /// The query as received.
    pub original: String,
    /// The corrected, lower-cased query.
    pub query: String,
    /// What kind of rewrite happened.
    #[serde(flatten)]
    pub kind: CorrectionKind,
}

impl Correction {
    /// True when the query text was changed beyond lower-casing.
    pub fn is_rewrite(&self) -> bool {
        matches!(
            self.kind,
            CorrectionKind::Fuzzy { .. } | CorrectionKind::Tokens { .. }
        )
    }
}

/// Corrects likely misspellings using k-gram Jaccard similarity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryCorrector {
    /// Length of the k-grams compared.
    pub k: usize,
    /// Minimum similarity a candidate must reach.
    pub threshold: f64,
}

impl Default for QueryCorrector {
    fn default() -> Self {
        Self {
            k: DEFAULT_KGRAM_SIZE,
            threshold: DEFAULT_CORRECTION_THRESHOLD,
        }
    }
}

impl QueryCorrector {
    /// Creates a corrector with the given k-gram length and threshold.
    pub fn new(k: usize, threshold: f64) -> Self {
        Self { k, threshold }
    }

    /// Returns the corrected query string.
    pub fn correct(&self, query: &str, records: &[&Record]) -> String {
        self.explain(query, records).query
    }

    /// Corrects the whole query and reports how.
    ///
    /// 1. An exact, case-insensitive match with any field value returns the
    ///    lower-cased query, regardless of threshold.
    /// 2. Otherwise the candidate with the highest similarity at or above the
    ///    threshold wins; the first one in corpus order, then table order, wins
    ///    ties.
    /// 3. Otherwise the lower-cased query is returned.
    pub fn explain(&self, query: &str, records: &[&Record]) -> Correction {
        let lowered = query.to_lowercase();

        if records.iter().any(|record| matches_exactly(record, &lowered)) {
            return Correction {
                original: query.to_string(),
                query: lowered,
                kind: CorrectionKind::Exact,
            };
        }

        let query_grams = kgrams(&lowered, self.k);
        if query_grams.is_empty() {
            return unchanged(query, lowered);
        }

        let mut best: Option<(String, f64)> = None;
        for record in records {
            for candidate in record.candidates() {
                let candidate = candidate.to_lowercase();
                let similarity = jaccard(&query_grams, &kgrams(&candidate, self.k));
                if similarity >= self.threshold
                    && best.as_ref().is_none_or(|(_, top)| similarity > *top)
                {
                    best = Some((candidate, similarity));
                }
            }
        }

        match best {
            Some((candidate, similarity)) => Correction {
                original: query.to_string(),
                query: candidate,
                kind: CorrectionKind::Fuzzy { similarity },
            },
            None => unchanged(query, lowered),
        }
    }

    /// Corrects each query word against the words of the weighted fields.
    ///
    /// Words already present in the catalog are kept. Others are replaced by
    /// the most similar catalog word at or above the threshold, first occurrence
    /// winning ties.
    pub fn correct_tokens(&self, query: &str, records: &[&Record]) -> Correction {
        let lowered = query.to_lowercase();
        let vocabulary = Vocabulary::collect(records, self.k);

        let mut replaced = Vec::new();
        let mut words = Vec::new();
        for token in tokenize(&lowered) {
            if vocabulary.contains(&token) {
                words.push(token);
                continue;
            }
            match vocabulary.closest(&token, self.k, self.threshold) {
                Some(word) => {
                    replaced.push((token, word.to_string()));
                    words.push(word.to_string());
                }
                None => words.push(token),
            }
        }

        if replaced.is_empty() {
            return unchanged(query, lowered);
        }

        Correction {
            original: query.to_string(),
            query: words.join(" "),
            kind: CorrectionKind::Tokens { replaced },
        }
    }
}

/// Corrects a query with explicit parameters.
///
/// Shorthand for [`QueryCorrector::correct`].
pub fn correct_query(query: &str, records: &[&Record], k: usize, threshold: f64) -> String {
    QueryCorrector::new(k, threshold).correct(query, records)
}

/// Builds a correction that only lower-cased the query.
fn unchanged(original: &str, lowered: String) -> Correction {
    Correction {
        original: original.to_string(),
        query: lowered,
        kind: CorrectionKind::Unchanged,
    }
}

/// True if the lower-cased query equals any field value of the record.
fn matches_exactly(record: &Record, lowered: &str) -> bool {
    record
        .candidates()
        .any(|value| value.to_lowercase() == lowered)
        || record
            .text(Field::Cast)
            .is_some_and(|cast| cast.to_lowercase() == lowered)
}

/// Distinct catalog words with their k-grams, in first-occurrence order.
struct Vocabulary {
    /// Words and their k-gram sets.
    words: Vec<(String, HashSet<String>)>,
    /// Word to position in `words`.
    positions: HashMap<String, usize>,
}

impl Vocabulary {
    /// Collects words from the weighted fields of the records.
    ///
    /// Identifiers and review scores are left out, so a word is never
    /// corrected into one.
    fn collect(records: &[&Record], k: usize) -> Self {
        let mut words = Vec::new();
        let mut positions = HashMap::new();
        for record in records {
            for (_, value) in record.field_values() {
                for word in tokenize(value) {
                    if !positions.contains_key(&word) {
                        positions.insert(word.clone(), words.len());
                        let grams = kgrams(&word, k);
                        words.push((word, grams));
                    }
                }
            }
        }
        Self { words, positions }
    }

    /// True if the word occurs in the catalog.
    fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    /// Returns the most similar word meeting the threshold.
    fn closest(&self, token: &str, k: usize, threshold: f64) -> Option<&str> {
        let grams = kgrams(token, k);
        if grams.is_empty() {
            return None;
        }

        let mut best: Option<(&str, f64)> = None;
        for (word, word_grams) in &self.words {
            let similarity = jaccard(&grams, word_grams);
            if similarity >= threshold && best.is_none_or(|(_, top)| similarity > top) {
                best = Some((word, similarity));
            }
        }
        best.map(|(word, _)| word)
    }
}
