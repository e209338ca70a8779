//! Query correction and TF-IDF ranking for cine.
//!
//! A search runs as one linear pipeline over a read-only [`Corpus`](cine_catalog::Corpus):
//!
//! 1. **Filter**: keep records whose review score is known and high enough
//! 2. **Correct**: repair likely misspellings by k-gram Jaccard similarity
//!    against the filtered records' field values
//! 3. **Index**: build one weighted document per record and a TF-IDF space over them
//! 4. **Rank**: score every document by cosine similarity to the corrected query,
//!    highest first, and truncate
//!
//! Field importance is expressed through a [`FieldWeights`] table: a field of weight
//! `w` is written `w` times into each document.
//!
//! # Example
//!
//! ```
//! use cine_catalog::{Corpus, Record};
//! use cine_rank::{SearchEngine, SearchParams};
//!
//! let corpus: Corpus = [("1", "The Matrix", "80%"), ("3", "Forrest Gump", "70%")]
//!     .into_iter()
//!     .map(|(id, title, score)| Record {
//!         title: Some(title.into()),
//!         review_score: Some(score.into()),
//!         ..Record::new(id)
//!     })
//!     .collect();
//!
//! let engine = SearchEngine::default();
//! let hits = engine.search("matrx", &SearchParams::default(), &corpus);
//! assert_eq!(hits[0].record.id, "1");
//! ```

#![warn(missing_docs)]

mod correct;
mod document;
mod engine;
mod filter;
mod kgram;
mod rank;
mod space;
mod tokenize;
mod weights;

pub use correct::{
    Correction, CorrectionKind, DEFAULT_CORRECTION_THRESHOLD, DEFAULT_KGRAM_SIZE, QueryCorrector,
    correct_query,
};
pub use document::{Document, build_document, build_documents};
pub use engine::{PipelineStats, SearchEngine, SearchParams, search};
pub use filter::{UNKNOWN_SCORE, filter_by_score, is_eligible, parse_review_score};
pub use kgram::{jaccard, kgrams};
pub use rank::{DEFAULT_LIMIT, Hit, SearchResult, rank};
pub use space::{Indexer, SparseVector, TfIdfIndexer, VectorSpace};
pub use tokenize::{normalize_whitespace, tokenize};
pub use weights::FieldWeights;
