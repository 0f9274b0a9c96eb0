//! Movie catalog
//!
//! Maps each film industry to its list of movies. Ships an embedded
//! catalog compiled into the binary; custom catalogs can be loaded from a
//! file via [`loader`].

mod embedded;
pub mod loader;

use std::fmt;

use rand::prelude::IndexedRandom;

use crate::core::MovieEntry;

/// The four film industries the game offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Industry {
    Hollywood,
    Bollywood,
    Tollywood,
    Kollywood,
}

impl Industry {
    /// All industries, in menu order
    pub const ALL: [Self; 4] = [
        Self::Hollywood,
        Self::Bollywood,
        Self::Tollywood,
        Self::Kollywood,
    ];

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hollywood => "Hollywood",
            Self::Bollywood => "Bollywood",
            Self::Tollywood => "Tollywood",
            Self::Kollywood => "Kollywood",
        }
    }

    /// Badge emoji shown next to the name
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Hollywood => "🎥",
            Self::Bollywood => "💃",
            Self::Tollywood => "🎤",
            Self::Kollywood => "🛕",
        }
    }

    /// Parse an industry from its name, case-insensitively
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|industry| industry.name().eq_ignore_ascii_case(name.trim()))
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error type for catalog lookup and parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A catalog line named an industry that does not exist
    UnknownIndustry(String),
    /// An industry ended up with no movies
    EmptyIndustry(Industry),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownIndustry(name) => write!(f, "Unknown industry '{name}'"),
            Self::EmptyIndustry(industry) => {
                write!(f, "Industry '{industry}' has no movies")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// A complete catalog: every industry maps to a non-empty movie list
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: [Vec<MovieEntry>; 4],
}

impl Catalog {
    /// The catalog compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use moviemoji::catalog::{Catalog, Industry};
    ///
    /// let catalog = Catalog::embedded();
    /// assert!(!catalog.movies(Industry::Hollywood).is_empty());
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            movies: embedded::TABLES.map(|table| {
                table
                    .iter()
                    .filter_map(|m| MovieEntry::new(m.title, m.emojis, m.hints).ok())
                    .collect()
            }),
        }
    }

    /// Build a catalog from per-industry entries
    ///
    /// # Errors
    /// Returns [`CatalogError::EmptyIndustry`] if any industry ends up with
    /// no movies.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Industry, MovieEntry)>,
    ) -> Result<Self, CatalogError> {
        let mut movies: [Vec<MovieEntry>; 4] = [const { Vec::new() }; 4];
        for (industry, entry) in entries {
            movies[industry.index()].push(entry);
        }

        for industry in Industry::ALL {
            if movies[industry.index()].is_empty() {
                return Err(CatalogError::EmptyIndustry(industry));
            }
        }

        Ok(Self { movies })
    }

    /// Movies for one industry
    #[inline]
    #[must_use]
    pub fn movies(&self, industry: Industry) -> &[MovieEntry] {
        &self.movies[industry.index()]
    }

    /// Pick a uniform-random movie for an industry
    ///
    /// No de-duplication across rounds: a title may repeat.
    ///
    /// # Panics
    /// Will not panic - construction guarantees every industry is
    /// non-empty.
    #[must_use]
    pub fn pick(&self, industry: Industry) -> &MovieEntry {
        self.movies(industry)
            .choose(&mut rand::rng())
            .expect("every industry is non-empty by construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HINT_COUNT;

    #[test]
    fn embedded_catalog_covers_every_industry() {
        let catalog = Catalog::embedded();
        for industry in Industry::ALL {
            assert!(
                !catalog.movies(industry).is_empty(),
                "Industry '{industry}' has no movies"
            );
        }
    }

    #[test]
    fn embedded_entries_have_full_hint_triples() {
        let catalog = Catalog::embedded();
        for industry in Industry::ALL {
            for movie in catalog.movies(industry) {
                assert_eq!(movie.hints().len(), HINT_COUNT);
                assert!(movie.hints().iter().all(|h| !h.is_empty()));
                assert!(!movie.title().is_empty());
                assert!(!movie.emojis().is_empty());
            }
        }
    }

    #[test]
    fn embedded_titles_unique_within_industry() {
        let catalog = Catalog::embedded();
        for industry in Industry::ALL {
            let movies = catalog.movies(industry);
            for (i, movie) in movies.iter().enumerate() {
                assert!(
                    movies[i + 1..].iter().all(|m| m.title() != movie.title()),
                    "Duplicate title '{}' in {industry}",
                    movie.title()
                );
            }
        }
    }

    #[test]
    fn pick_returns_movie_from_requested_industry() {
        let catalog = Catalog::embedded();
        for _ in 0..20 {
            let movie = catalog.pick(Industry::Tollywood);
            assert!(
                catalog
                    .movies(Industry::Tollywood)
                    .iter()
                    .any(|m| m == movie)
            );
        }
    }

    #[test]
    fn industry_from_name_case_insensitive() {
        assert_eq!(Industry::from_name("hollywood"), Some(Industry::Hollywood));
        assert_eq!(Industry::from_name("BOLLYWOOD"), Some(Industry::Bollywood));
        assert_eq!(Industry::from_name(" Kollywood "), Some(Industry::Kollywood));
        assert_eq!(Industry::from_name("nollywood"), None);
    }

    #[test]
    fn industry_all_order_is_stable() {
        let names: Vec<&str> = Industry::ALL.iter().map(|i| i.name()).collect();
        assert_eq!(
            names,
            ["Hollywood", "Bollywood", "Tollywood", "Kollywood"]
        );
    }

    #[test]
    fn from_entries_rejects_empty_industry() {
        let entry = MovieEntry::new("Frozen", "❄️", ["a", "b", "c"]).unwrap();
        let result = Catalog::from_entries([(Industry::Hollywood, entry)]);
        assert_eq!(result.unwrap_err(), CatalogError::EmptyIndustry(Industry::Bollywood));
    }
}
