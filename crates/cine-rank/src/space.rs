//! TF-IDF vector space built over one request's documents.
//!
//! Weighting follows the smoothed scheme: raw counts for term frequency and
//! `idf = ln((1 + n) / (1 + df)) + 1`, where `n` is the number of documents and
//! `df` the number of documents containing the term. Every document vector is
//! L2-normalized, so cosine similarity reduces to a dot product.

use std::collections::HashMap;

use crate::{Document, tokenize::tokenize};

/// A sparse vector of `(term index, weight)` pairs sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector(Vec<(usize, f64)>);

impl SparseVector {
    /// Builds a normalized vector from term counts.
    fn from_counts(counts: HashMap<usize, u32>, idf: &[f64]) -> Self {
        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(term, count)| (term, f64::from(count) * idf[term]))
            .collect();
        entries.sort_by_key(|(term, _)| *term);

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut entries {
                *weight /= norm;
            }
        }
        Self(entries)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.0.len() && j < other.0.len() {
            let (a, wa) = self.0[i];
            let (b, wb) = other.0[j];
            if a == b {
                sum += wa * wb;
                i += 1;
                j += 1;
            } else if a < b {
                i += 1;
            } else {
                j += 1;
            }
        }
        sum
    }

    /// True when the vector has no non-zero entries.
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.0.len()
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.0.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }
}

/// Term vocabulary, IDF weights, and one normalized vector per document.
#[derive(Debug, Clone, Default)]
pub struct VectorSpace {
    /// Term to index, assigned in first-occurrence order.
    vocabulary: HashMap<String, usize>,
    /// IDF weight per term index.
    idf: Vec<f64>,
    /// Normalized document vectors, in document order.
    vectors: Vec<SparseVector>,
}

impl VectorSpace {
    /// An empty space: zero terms and zero documents.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of indexed documents.
    pub fn num_documents(&self) -> usize {
        self.vectors.len()
    }

    /// Number of distinct terms.
    pub fn num_terms(&self) -> usize {
        self.vocabulary.len()
    }

    /// True when no documents were indexed.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Returns the IDF weight of a term, or `None` if it was never seen.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&index| self.idf[index])
    }

    /// Returns the vector of the document at `index`.
    pub fn document(&self, index: usize) -> Option<&SparseVector> {
        self.vectors.get(index)
    }

    /// Projects free text into this space.
    ///
    /// Terms never seen during indexing are ignored. The result is normalized,
    /// or zero if no term is known.
    pub fn project(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for term in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0) += 1;
            }
        }
        SparseVector::from_counts(counts, &self.idf)
    }

    /// Cosine similarity of the query vector against every document, in order.
    pub fn similarities(&self, query: &SparseVector) -> Vec<f64> {
        self.vectors.iter().map(|doc| doc.dot(query)).collect()
    }
}

/// Builds a vector space from documents.
///
/// This is the seam for replacing per-request indexing with a persistent or
/// incremental index; correction and ranking only see the resulting space.
pub trait Indexer {
    /// Indexes exactly the given documents. An empty slice yields an empty space.
    fn index(&self, documents: &[Document]) -> VectorSpace;
}

/// Builds a fresh TF-IDF space on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfIndexer;

impl Indexer for TfIdfIndexer {
    fn index(&self, documents: &[Document]) -> VectorSpace {
        if documents.is_empty() {
            return VectorSpace::empty();
        }

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<u32> = Vec::new();
        let mut counts: Vec<HashMap<usize, u32>> = Vec::with_capacity(documents.len());

        for document in documents {
            let mut doc_counts: HashMap<usize, u32> = HashMap::new();
            for term in tokenize(document.as_str()) {
                let next = vocabulary.len();
                let index = *vocabulary.entry(term).or_insert(next);
                if index == doc_freq.len() {
                    doc_freq.push(0);
                }
                *doc_counts.entry(index).or_insert(0) += 1;
            }
            for &index in doc_counts.keys() {
                doc_freq[index] += 1;
            }
            counts.push(doc_counts);
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + f64::from(df))).ln() + 1.0)
            .collect();

        let vectors = counts
            .into_iter()
            .map(|doc_counts| SparseVector::from_counts(doc_counts, &idf))
            .collect();

        VectorSpace {
            vocabulary,
            idf,
            vectors,
        }
    }
}
