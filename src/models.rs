//! Domain model that mirrors the SQLite schema and gets passed throughout the
//! TUI. The intent is that the type stays a light-weight data holder so the
//! other layers can focus on presentation and persistence logic. The struct
//! also deserializes straight out of the bundled catalog asset, which is why
//! its field names double as the JSON keys.

use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
/// One catalog entry. Mirrors a row of the `movies` table minus the surrogate
/// id, which never leaves the persistence layer. The `title` doubles as the
/// navigation key for the detail screen; the dataset keeps it unique even
/// though the storage layer does not enforce that.
pub struct Movie {
    /// Key into the bundled poster-art table. Unknown keys fall back to a
    /// placeholder motif rather than failing.
    pub image: String,
    /// Title displayed on cards and used as the detail-screen route parameter.
    pub title: String,
    /// Display category used to cluster entries on the catalog screen. Not a
    /// modeled relationship, just a grouping label.
    pub category: String,
    /// One-or-two sentence description shown on the detail screen.
    pub synopsis: String,
    /// Title in the production's original language. Often identical to
    /// `title` for English-language entries.
    pub original_title: String,
    /// Free-text genre label.
    pub genre: String,
    /// Total episode count across all seasons.
    pub episodes: i64,
    /// First release year.
    pub year: i64,
    /// Country of origin.
    pub country: String,
    /// Director or principal creator.
    pub director: String,
    /// Comma-separated principal cast.
    pub cast: String,
    /// Licensing cutoff, kept as raw text. The value is display-only and is
    /// never parsed or validated.
    pub available_until: String,
}

impl Movie {
    /// Compose the `Title (year)` caption used underneath poster cards.
    pub fn headline(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }
}

impl fmt::Display for Movie {
    /// Write the movie title to any formatter so the type plays nicely with
    /// Ratatui widgets that consume strings implicitly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Find a movie in the session's in-memory list by its exact title. The
/// detail screen navigates by title string, so a blank or unknown title must
/// come back as `None` rather than an error.
pub fn find_by_title<'a>(title: &str, movies: &'a [Movie]) -> Option<&'a Movie> {
    if title.trim().is_empty() {
        return None;
    }
    movies.iter().find(|movie| movie.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(title: &str) -> Movie {
        Movie {
            image: "poster_sample".to_string(),
            title: title.to_string(),
            category: "Drama".to_string(),
            synopsis: "A sample entry.".to_string(),
            original_title: title.to_string(),
            genre: "Drama".to_string(),
            episodes: 10,
            year: 2020,
            country: "United States".to_string(),
            director: "Sample Director".to_string(),
            cast: "Sample Cast".to_string(),
            available_until: "2026-12-31".to_string(),
        }
    }

    #[test]
    fn find_by_title_matches_exact_title() {
        let movies = vec![sample("Alpha"), sample("Beta")];
        let found = find_by_title("Beta", &movies).expect("Beta should resolve");
        assert_eq!(found.title, "Beta");
    }

    #[test]
    fn find_by_title_misses_unknown_title() {
        let movies = vec![sample("Alpha")];
        assert!(find_by_title("Gamma", &movies).is_none());
    }

    #[test]
    fn find_by_title_rejects_blank_titles() {
        let movies = vec![sample("Alpha")];
        assert!(find_by_title("", &movies).is_none());
        assert!(find_by_title("   ", &movies).is_none());
    }

    #[test]
    fn headline_includes_year() {
        assert_eq!(sample("Alpha").headline(), "Alpha (2020)");
    }
}
