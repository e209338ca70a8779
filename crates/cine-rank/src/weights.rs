//! Per-field weight tables.

use cine_catalog::Field;

/// Ordered mapping from field to a non-negative integer weight.
///
/// Entry order is the order in which fields are written into a document. A
/// field that is absent or weighted 0 is excluded from every document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWeights {
    /// Entries in declaration order, at most one per field.
    entries: Vec<(Field, u32)>,
}

impl FieldWeights {
    /// Builds a table from `(field, weight)` pairs.
    ///
    /// A repeated field keeps its first position and takes the last weight.
    pub fn new(pairs: impl IntoIterator<Item = (Field, u32)>) -> Self {
        let mut entries: Vec<(Field, u32)> = Vec::new();
        for (field, weight) in pairs {
            match entries.iter_mut().find(|(f, _)| *f == field) {
                Some(entry) => entry.1 = weight,
                None => entries.push((field, weight)),
            }
        }
        Self { entries }
    }

    /// Returns the weight for a field, or 0 if the field is not in the table.
    pub fn get(&self, field: Field) -> u32 {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map_or(0, |(_, w)| *w)
    }

    /// Returns a copy of this table with one field re-weighted.
    pub fn with(mut self, field: Field, weight: u32) -> Self {
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = weight,
            None => self.entries.push((field, weight)),
        }
        self
    }

    /// Iterates over fields with a positive weight, in declaration order.
    pub fn active(&self) -> impl Iterator<Item = (Field, u32)> + '_ {
        self.entries.iter().copied().filter(|(_, w)| *w > 0)
    }

    /// True when no field has a positive weight.
    pub fn is_inert(&self) -> bool {
        self.active().next().is_none()
    }
}

impl Default for FieldWeights {
    /// The standard movie table: title dominates, then people, then context.
    fn default() -> Self {
        Self::new([
            (Field::Title, 5),
            (Field::Cast, 3),
            (Field::Director, 3),
            (Field::Description, 2),
            (Field::ReleaseDate, 2),
            (Field::Country, 2),
            (Field::Music, 1),
            (Field::Duration, 1),
        ])
    }
}
