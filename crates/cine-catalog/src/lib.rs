//! Movie catalog data model for cine.
//!
//! The catalog is a JSON array of movie records produced by external scrapers.
//! This crate provides:
//! - [`Record`]: a fixed set of named, optional text slots per movie
//! - [`Field`]: the text fields that take part in ranking, in table order
//! - [`Corpus`]: an ordered, read-only snapshot with loading and id lookup
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use cine_catalog::{Corpus, Field};
//!
//! let json = r#"[{"wikidata_id": "Q83495", "title": "The Matrix", "cast": "Keanu Reeves, Carrie-Anne Moss"}]"#;
//! let corpus = Corpus::parse_str(json, Path::new("inline.json")).unwrap();
//! let record = corpus.get("Q83495").unwrap();
//! assert_eq!(record.cast.len(), 2);
//! assert_eq!(record.text(Field::Title).as_deref(), Some("The Matrix"));
//! ```

#![warn(missing_docs)]

mod corpus;
mod error;
mod field;
mod record;

pub use corpus::Corpus;
pub use error::CatalogError;
pub use field::{Field, UnknownField};
pub use record::Record;
