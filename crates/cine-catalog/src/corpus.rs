//! Loading and querying an ordered set of records.

use std::{
    collections::{HashMap, hash_map::Entry},
    fs,
    path::{Path, PathBuf},
    slice,
};

use tracing::debug;

use crate::{CatalogError, Record};

/// An ordered, read-only snapshot of catalog records.
///
/// Order carries no ranking meaning; it only breaks ties deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    /// Records in load order.
    records: Vec<Record>,
}

impl Corpus {
    /// Wraps already-loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Loads a corpus from a JSON file containing an array of records.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::parse_str(&contents, path)?;
        debug!(path = %path.display(), records = corpus.len(), "loaded catalog");
        Ok(corpus)
    }

    /// Loads several catalog files and concatenates them in the given order.
    pub fn load_all(paths: &[PathBuf]) -> Result<Self, CatalogError> {
        let mut records = Vec::new();
        for path in paths {
            records.extend(Self::load(path)?.records);
        }
        Ok(Self { records })
    }

    /// Parses a corpus from JSON text.
    ///
    /// The `path` parameter is used for error reporting.
    pub fn parse_str(contents: &str, path: &Path) -> Result<Self, CatalogError> {
        let records: Vec<Record> =
            serde_json::from_str(contents).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { records })
    }

    /// Returns the records in corpus order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterates over records in corpus order.
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the corpus holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by its identifier.
    ///
    /// Returns [`CatalogError::NotFound`] when no record has this id. When ids
    /// repeat, the first record in corpus order is returned.
    pub fn get(&self, id: &str) -> Result<&Record, CatalogError> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    /// Collapses records that share a title.
    ///
    /// The last record with a given title replaces the earlier ones but keeps the
    /// position of the first. Untitled records are never merged. Returns the number
    /// of records removed.
    pub fn dedup_by_title(&mut self) -> usize {
        let before = self.records.len();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut kept: Vec<Record> = Vec::with_capacity(before);

        for record in self.records.drain(..) {
            let Some(title) = record.title.clone() else {
                kept.push(record);
                continue;
            };
            match positions.entry(title) {
                Entry::Occupied(slot) => kept[*slot.get()] = record,
                Entry::Vacant(slot) => {
                    slot.insert(kept.len());
                    kept.push(record);
                }
            }
        }

        self.records = kept;
        let removed = before - self.records.len();
        if removed > 0 {
            debug!(removed, "collapsed duplicate titles");
        }
        removed
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Record> for Corpus {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}
