//! cine: movie catalog search.
//!
//! cine loads a JSON catalog of movies and answers free-text queries against it. A query
//! is first repaired against the catalog's own vocabulary (so `matrx` finds *The Matrix*),
//! then every movie with a high enough review score is ranked by TF-IDF cosine similarity,
//! with titles counting more than cast, cast more than descriptions, and so on.
//!
//! The ranking core lives in `cine-rank`; this crate is the command-line front end.

#![warn(missing_docs)]

pub mod cli;
