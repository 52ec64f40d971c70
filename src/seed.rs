//! Seed loader for the fixed demo catalog. Every cold start wipes the
//! `movies` table and re-inserts the bundled dataset, so the application
//! always comes up in the same state regardless of what a previous run left
//! behind. The catalog itself ships inside the binary as a JSON asset.

use anyhow::{Context, Result};
use rusqlite::Connection;
use thiserror::Error;
use tracing::debug;

use crate::db::{delete_all_movies, insert_movie};
use crate::models::Movie;

/// The catalog asset, embedded at compile time so the binary has no runtime
/// file dependency.
const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Problems with the bundled catalog asset. These indicate a broken build
/// rather than a runtime condition, so they get their own error type instead
/// of being folded into a storage failure.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("bundled catalog is not valid JSON: {0}")]
    MalformedCatalog(#[from] serde_json::Error),
    #[error("bundled catalog contains no movies")]
    EmptyCatalog,
}

/// Parse the embedded catalog asset into domain values.
pub fn bundled_catalog() -> Result<Vec<Movie>, SeedError> {
    let movies: Vec<Movie> = serde_json::from_str(CATALOG_JSON)?;
    if movies.is_empty() {
        return Err(SeedError::EmptyCatalog);
    }
    Ok(movies)
}

/// Wipe the table and insert the bundled catalog. Returns the number of rows
/// inserted so startup can log it. Running this twice in a row ends in the
/// same state as running it once.
pub fn reseed(conn: &Connection) -> Result<usize> {
    let wiped = delete_all_movies(conn)?;
    debug!(wiped, "cleared previous catalog rows");

    let catalog = bundled_catalog().context("failed to load bundled catalog")?;
    for movie in &catalog {
        insert_movie(conn, movie)?;
    }

    Ok(catalog.len())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::db::{fetch_movies, open_in_memory};

    #[test]
    fn bundled_catalog_has_fifteen_entries_across_three_categories() {
        let catalog = bundled_catalog().expect("bundled catalog must parse");
        assert_eq!(catalog.len(), 15);

        let categories: HashSet<&str> = catalog.iter().map(|m| m.category.as_str()).collect();
        assert_eq!(categories.len(), 3);
    }

    #[test]
    fn bundled_titles_are_unique() {
        // The detail screen routes by title, so the dataset has to keep
        // titles unique even though the schema never enforces it.
        let catalog = bundled_catalog().expect("bundled catalog must parse");
        let titles: HashSet<&str> = catalog.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles.len(), catalog.len());
    }

    #[test]
    fn reseed_populates_an_empty_store_sorted_by_title() {
        let conn = open_in_memory().expect("in-memory store");
        let seeded = reseed(&conn).expect("reseed");
        assert_eq!(seeded, 15);

        let movies = fetch_movies(&conn).expect("fetch");
        assert_eq!(movies.len(), seeded);
        let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
        let mut sorted = titles.clone();
        sorted.sort_unstable();
        assert_eq!(titles, sorted);
    }

    #[test]
    fn reseed_twice_ends_in_the_same_state() {
        let conn = open_in_memory().expect("in-memory store");
        reseed(&conn).expect("first reseed");
        reseed(&conn).expect("second reseed");

        let movies = fetch_movies(&conn).expect("fetch");
        assert_eq!(movies.len(), 15);
    }
}
