//! The catalog record type and its JSON representation.
//!
//! Upstream scrapers emitted keys with both hyphens and underscores, stored cast
//! lists either as arrays or as a single comma-joined string, and used `null` or
//! empty strings for missing values. Deserialization folds all of these into a
//! fixed set of named slots where "missing" is always `None`.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};

use crate::Field;

/// Base URL for English Wikipedia articles.
const WIKIPEDIA_BASE: &str = "https://en.wikipedia.org/wiki/";

/// Base URL for the Wikipedia clickstream navigator.
const CLICKSTREAM_BASE: &str = "https://wikinav.toolforge.org/?language=en&title=";

/// One movie in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Stable unique key (the Wikidata entity id in scraped catalogs).
    #[serde(alias = "wikidata_id", alias = "wikidata-id")]
    pub id: String,
    /// Movie title.
    #[serde(
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    /// Cast members, one name per entry.
    #[serde(
        default,
        deserialize_with = "cast",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub cast: Vec<String>,
    /// Director credit.
    #[serde(
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub director: Option<String>,
    /// Composer credit.
    #[serde(
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub music: Option<String>,
    /// Plot description.
    #[serde(
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    /// Release date, verbatim.
    #[serde(
        default,
        alias = "release-date",
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub release_date: Option<String>,
    /// Country of origin.
    #[serde(
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub country: Option<String>,
    /// Running time, verbatim.
    #[serde(
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<String>,
    /// Aggregated review score such as `"87%"`, or `"unknown"`.
    #[serde(
        default,
        alias = "review-score",
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub review_score: Option<String>,
    /// Link to the English Wikipedia article.
    #[serde(
        default,
        alias = "wikipedia-link",
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub wikipedia_link: Option<String>,
    /// Rotten Tomatoes identifier.
    #[serde(
        default,
        alias = "rotten-tomatoes-id",
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotten_tomatoes_id: Option<String>,
    /// Freebase identifier.
    #[serde(
        default,
        alias = "freebase-id",
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub freebase_id: Option<String>,
}

impl Record {
    /// Creates a record with only an identifier set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Returns the value of a field as one string, or `None` if it is missing.
    ///
    /// The cast is joined with `", "`, which is the form used for weighting.
    pub fn text(&self, field: Field) -> Option<Cow<'_, str>> {
        match field {
            Field::Cast if self.cast.is_empty() => None,
            Field::Cast => Some(Cow::Owned(self.cast.join(", "))),
            other => self.scalar(other).map(Cow::Borrowed),
        }
    }

    /// Returns the values of the weighted fields, in table order.
    ///
    /// Each cast member is yielded separately.
    pub fn field_values(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().flat_map(move |field| {
            let values: Vec<&str> = match field {
                Field::Cast => self.cast.iter().map(String::as_str).collect(),
                other => self.scalar(other).into_iter().collect(),
            };
            values.into_iter().map(move |value| (field, value))
        })
    }

    /// Returns every string a query may be corrected to.
    ///
    /// The weighted fields come first in table order, then `id`, then
    /// `review_score`. Link metadata is not included.
    pub fn candidates(&self) -> impl Iterator<Item = &str> + '_ {
        self.field_values()
            .map(|(_, value)| value)
            .chain((!self.id.is_empty()).then_some(self.id.as_str()))
            .chain(self.review_score.as_deref())
    }

    /// Returns the title, or an empty string for untitled records.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Returns the Wikipedia article URL, building one from the title if none is stored.
    pub fn wikipedia_url(&self) -> Option<String> {
        if let Some(link) = &self.wikipedia_link {
            return Some(link.clone());
        }
        self.title
            .as_deref()
            .map(|title| format!("{WIKIPEDIA_BASE}{}", underscored(title)))
    }

    /// Returns the clickstream navigator URL for this title.
    pub fn clickstream_url(&self) -> Option<String> {
        self.title
            .as_deref()
            .map(|title| format!("{CLICKSTREAM_BASE}{}", underscored(title)))
    }

    /// Returns the slot backing a single-valued field.
    fn scalar(&self, field: Field) -> Option<&str> {
        let slot = match field {
            Field::Title => &self.title,
            Field::Director => &self.director,
            Field::Description => &self.description,
            Field::ReleaseDate => &self.release_date,
            Field::Country => &self.country,
            Field::Music => &self.music,
            Field::Duration => &self.duration,
            Field::Cast => return None,
        };
        slot.as_deref()
    }
}

/// Replaces spaces with underscores, as Wikipedia page names do.
fn underscored(title: &str) -> String {
    title.replace(' ', "_")
}

/// A scalar JSON value that may stand in for text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    /// A string value.
    Text(String),
    /// A numeric value, kept in its JSON spelling.
    Number(serde_json::Number),
    /// A boolean value.
    Bool(bool),
}

/// Deserializes an optional text slot, mapping null and blank values to `None`.
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.and_then(|scalar| {
        let raw = match scalar {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        };
        non_blank(&raw)
    }))
}

/// Cast as stored on disk: a list of names or one comma-joined string.
#[derive(Deserialize)]
#[serde(untagged)]
enum CastValue {
    /// Already split into members.
    Members(Vec<Option<String>>),
    /// Members joined with commas.
    Joined(String),
}

/// Deserializes the cast into trimmed, non-empty member names.
fn cast<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let members = match Option::<CastValue>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(CastValue::Members(names)) => names
            .into_iter()
            .flatten()
            .filter_map(|name| non_blank(&name))
            .collect(),
        Some(CastValue::Joined(joined)) => joined.split(',').filter_map(non_blank).collect(),
    };
    Ok(members)
}

/// Trims a value, returning `None` if nothing is left.
fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
