//! Character k-grams and Jaccard similarity.
//!
//! Used by the query corrector to compare a possibly misspelled query against
//! catalog strings without any index structure.

use std::collections::HashSet;

/// Returns the set of contiguous `k`-character substrings of `text`.
///
/// Characters are Unicode scalar values, so multi-byte text is never split
/// mid-character. Text shorter than `k`, or `k == 0`, yields an empty set.
pub fn kgrams(text: &str, k: usize) -> HashSet<String> {
    if k == 0 {
        return HashSet::new();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .windows(k)
        .map(|window| window.iter().collect())
        .collect()
}

/// Jaccard similarity `|A ∩ B| / |A ∪ B|`.
///
/// Two empty sets have similarity 0.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}
