//! Weighted text documents built from records.
//!
//! Field importance is encoded by repetition: a field with weight `w` has its
//! value written `w` times, so its terms carry `w` times the term frequency.
//! Each contributing field is also prefixed once with its own name.

use cine_catalog::Record;

use crate::{FieldWeights, tokenize::normalize_whitespace};

/// The indexable text of one record, valid for a single search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document(String);

impl Document {
    /// Returns the document text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no field contributed any text.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Builds the weighted document for a record.
///
/// Fields are visited in table order. Missing or blank fields and fields with
/// weight 0 contribute nothing.
pub fn build_document(record: &Record, weights: &FieldWeights) -> Document {
    let mut parts: Vec<String> = Vec::new();

    for (field, weight) in weights.active() {
        let Some(value) = record.text(field) else {
            continue;
        };
        let value = normalize_whitespace(&value);
        if value.is_empty() {
            continue;
        }

        let mut part = String::with_capacity(field.name().len() + (value.len() + 1) * weight as usize);
        part.push_str(field.name());
        for _ in 0..weight {
            part.push(' ');
            part.push_str(&value);
        }
        parts.push(part);
    }

    Document(parts.join(" "))
}

/// Builds one document per record, preserving order.
pub fn build_documents<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    weights: &FieldWeights,
) -> Vec<Document> {
    records
        .into_iter()
        .map(|record| build_document(record, weights))
        .collect()
}
