//! Catalog loading utilities
//!
//! Loads a custom movie catalog from a text file. One movie per line:
//!
//! ```text
//! industry|title|emoji clue|hint 1|hint 2|hint 3
//! ```
//!
//! Blank lines and lines starting with `#` are skipped, as are lines with
//! the wrong field count or empty movie fields. An unknown industry name
//! is an error - it is almost always a typo worth surfacing.

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::catalog::{Catalog, CatalogError, Industry};
use crate::core::MovieEntry;

/// Load a catalog from a file
///
/// Every industry must end up with at least one movie.
///
/// # Errors
///
/// Returns an error if the file cannot be read, if a line names an unknown
/// industry, or if any industry ends up empty.
///
/// # Examples
/// ```no_run
/// use moviemoji::catalog::loader::load_from_file;
///
/// let catalog = load_from_file("my_movies.txt").unwrap();
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    Ok(parse_catalog(&content)?)
}

/// Parse catalog file content
///
/// # Errors
///
/// Returns [`CatalogError`] for unknown industry names and for industries
/// left without movies.
pub fn parse_catalog(content: &str) -> Result<Catalog, CatalogError> {
    let mut entries = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split('|').map(str::trim).collect();
        let &[industry, title, emojis, h1, h2, h3] = fields.as_slice() else {
            continue;
        };

        let industry = Industry::from_name(industry)
            .ok_or_else(|| CatalogError::UnknownIndustry(industry.to_string()))?;

        if let Ok(movie) = MovieEntry::new(title, emojis, [h1, h2, h3]) {
            entries.push((industry, movie));
        }
    }

    Catalog::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "\
# sample catalog
hollywood|Frozen|❄️👸🏰|Disney animated|Ice powers|Let it go
bollywood|Sholay|🤠🔫🐎|Classic western|Friendship|Jai and Veeru
tollywood|Baahubali|⚔️👑🏰|Epic drama|Kingdom war|Prabhas

kollywood|Vikram|🔍🔫👨‍💼|Action thriller|Kamal Haasan|Drug cartel
";

    #[test]
    fn parse_valid_catalog() {
        let catalog = parse_catalog(VALID).unwrap();
        assert_eq!(catalog.movies(Industry::Hollywood).len(), 1);
        assert_eq!(catalog.movies(Industry::Hollywood)[0].title(), "Frozen");
        assert_eq!(catalog.movies(Industry::Kollywood)[0].emojis(), "🔍🔫👨‍💼");
    }

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let catalog = parse_catalog(VALID).unwrap();
        let total: usize = Industry::ALL
            .iter()
            .map(|&i| catalog.movies(i).len())
            .sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn parse_skips_wrong_field_count() {
        let content = VALID.to_string() + "hollywood|Missing Fields|🎬\n";
        let catalog = parse_catalog(&content).unwrap();
        assert_eq!(catalog.movies(Industry::Hollywood).len(), 1);
    }

    #[test]
    fn parse_skips_empty_movie_fields() {
        let content = VALID.to_string() + "hollywood||🎬|a|b|c\n";
        let catalog = parse_catalog(&content).unwrap();
        assert_eq!(catalog.movies(Industry::Hollywood).len(), 1);
    }

    #[test]
    fn parse_rejects_unknown_industry() {
        let content = VALID.to_string() + "nollywood|Some Movie|🎬|a|b|c\n";
        assert_eq!(
            parse_catalog(&content).unwrap_err(),
            CatalogError::UnknownIndustry("nollywood".to_string())
        );
    }

    #[test]
    fn parse_rejects_missing_industry() {
        let content = "hollywood|Frozen|❄️|a|b|c\n";
        assert!(matches!(
            parse_catalog(content).unwrap_err(),
            CatalogError::EmptyIndustry(_)
        ));
    }

    #[test]
    fn parse_industry_names_case_insensitive() {
        let content = VALID.replace("hollywood", "HOLLYWOOD");
        let catalog = parse_catalog(&content).unwrap();
        assert_eq!(catalog.movies(Industry::Hollywood).len(), 1);
    }
}
