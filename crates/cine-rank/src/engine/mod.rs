//! The search pipeline: filter, correct, index, rank.
//!
//! Each call is an independent linear pipeline over a read-only corpus. Nothing
//! is cached between calls: documents and the vector space live only for the
//! duration of one search, so concurrent searches over a shared corpus need no
//! locking.

use cine_catalog::Corpus;
use serde::Serialize;
use tracing::debug;

use crate::{
    Correction, CorrectionKind, FieldWeights, Indexer, QueryCorrector, SearchResult, TfIdfIndexer,
    document::build_documents,
    filter::filter_by_score,
    rank::{DEFAULT_LIMIT, rank},
};

/// Per-request search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Minimum review score (inclusive) a record needs to be considered.
    pub score_threshold: i64,
    /// Maximum number of results.
    pub limit: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            score_threshold: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Counters and decisions collected while running one search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineStats {
    /// Records in the corpus.
    pub corpus_size: usize,
    /// Records that passed the review-score filter.
    pub filtered_count: usize,
    /// How the query was corrected.
    pub correction: Correction,
    /// Distinct terms in the vector space.
    pub vocabulary_size: usize,
    /// Hits returned after truncation.
    pub result_count: usize,
}

/// Orchestrates correction and ranking with a fixed configuration.
#[derive(Debug, Clone)]
pub struct SearchEngine<I = TfIdfIndexer> {
    /// Field weights used to build documents.
    weights: FieldWeights,
    /// Whole-query and per-word corrector.
    corrector: QueryCorrector,
    /// Whether to fall back to per-word correction.
    token_correction: bool,
    /// Builds the vector space for each request.
    indexer: I,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(FieldWeights::default())
    }
}

impl SearchEngine {
    /// Creates an engine with the given weights and default correction settings.
    pub fn new(weights: FieldWeights) -> Self {
        Self::with_indexer(weights, TfIdfIndexer)
    }
}

impl<I: Indexer> SearchEngine<I> {
    /// Creates an engine with a custom indexer.
    pub fn with_indexer(weights: FieldWeights, indexer: I) -> Self {
        Self {
            weights,
            corrector: QueryCorrector::default(),
            token_correction: true,
            indexer,
        }
    }

    /// Replaces the corrector.
    pub fn with_corrector(mut self, corrector: QueryCorrector) -> Self {
        self.corrector = corrector;
        self
    }

    /// Enables or disables the per-word correction fallback.
    pub fn with_token_correction(mut self, enabled: bool) -> Self {
        self.token_correction = enabled;
        self
    }

    /// Returns the field weights.
    pub fn weights(&self) -> &FieldWeights {
        &self.weights
    }

    /// Returns the corrector.
    pub fn corrector(&self) -> &QueryCorrector {
        &self.corrector
    }

    /// Runs one search and returns the ranked hits.
    pub fn search<'a>(
        &self,
        raw_query: &str,
        params: &SearchParams,
        corpus: &'a Corpus,
    ) -> SearchResult<'a> {
        self.search_with_stats(raw_query, params, corpus).0
    }

    /// Runs one search, also returning pipeline statistics.
    pub fn search_with_stats<'a>(
        &self,
        raw_query: &str,
        params: &SearchParams,
        corpus: &'a Corpus,
    ) -> (SearchResult<'a>, PipelineStats) {
        let query = raw_query.trim();

        let filtered = filter_by_score(corpus, params.score_threshold);
        debug!(
            corpus = corpus.len(),
            filtered = filtered.len(),
            threshold = params.score_threshold,
            "filtered by review score"
        );

        let mut correction = self.corrector.explain(query, &filtered);
        if self.token_correction && correction.kind == CorrectionKind::Unchanged {
            correction = self.corrector.correct_tokens(query, &filtered);
        }
        debug!(original = query, corrected = %correction.query, "corrected query");

        let documents = build_documents(filtered.iter().copied(), &self.weights);
        let space = self.indexer.index(&documents);
        debug!(
            documents = space.num_documents(),
            terms = space.num_terms(),
            "built vector space"
        );

        let hits = rank(&correction.query, &space, &filtered, params.limit);

        let stats = PipelineStats {
            corpus_size: corpus.len(),
            filtered_count: filtered.len(),
            correction,
            vocabulary_size: space.num_terms(),
            result_count: hits.len(),
        };
        (hits, stats)
    }
}

/// Searches with the default weights and correction settings.
pub fn search<'a>(
    raw_query: &str,
    score_threshold: i64,
    limit: usize,
    corpus: &'a Corpus,
) -> SearchResult<'a> {
    SearchEngine::default().search(
        raw_query,
        &SearchParams {
            score_threshold,
            limit,
        },
        corpus,
    )
}
