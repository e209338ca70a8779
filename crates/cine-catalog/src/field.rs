//! Named text slots of a catalog record.

use std::{error::Error, fmt, str::FromStr};

/// A text-valued field of a [`Record`](crate::Record) that takes part in ranking.
///
/// The declaration order of [`Field::ALL`] is the canonical table order: documents
/// are assembled in this order and correction ties resolve in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Movie title.
    Title,
    /// Cast members.
    Cast,
    /// Director name(s).
    Director,
    /// Free-text plot description.
    Description,
    /// Release date as scraped.
    ReleaseDate,
    /// Country of origin.
    Country,
    /// Composer credit.
    Music,
    /// Running time as scraped.
    Duration,
}

impl Field {
    /// Every field, in table order.
    pub const ALL: [Self; 8] = [
        Self::Title,
        Self::Cast,
        Self::Director,
        Self::Description,
        Self::ReleaseDate,
        Self::Country,
        Self::Music,
        Self::Duration,
    ];

    /// Returns the snake_case name used in documents and configuration.
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Cast => "cast",
            Self::Director => "director",
            Self::Description => "description",
            Self::ReleaseDate => "release_date",
            Self::Country => "country",
            Self::Music => "music",
            Self::Duration => "duration",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a known field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field: {}", self.0)
    }
}

impl Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|field| field.name() == normalized)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_is_fixed() {
        let names: Vec<_> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "title",
                "cast",
                "director",
                "description",
                "release_date",
                "country",
                "music",
                "duration"
            ]
        );
    }

    #[test]
    fn parses_hyphenated_and_mixed_case_names() {
        assert_eq!("release-date".parse::<Field>(), Ok(Field::ReleaseDate));
        assert_eq!("Title".parse::<Field>(), Ok(Field::Title));
        assert!("budget".parse::<Field>().is_err());
    }
}
