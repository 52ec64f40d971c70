use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::models::Movie;

/// Append one movie row. No validation or uniqueness check happens here; the
/// catalog trusts its seed data. The new rowid is returned for callers that
/// want it, though the seed loader simply discards it.
pub fn insert_movie(conn: &Connection, movie: &Movie) -> Result<i64> {
    conn.execute(
        "INSERT INTO movies (image, title, category, synopsis, original_title,
            genre, episodes, year, country, director, cast_members, available_until)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            movie.image,
            movie.title,
            movie.category,
            movie.synopsis,
            movie.original_title,
            movie.genre,
            movie.episodes,
            movie.year,
            movie.country,
            movie.director,
            movie.cast,
            movie.available_until,
        ],
    )
    .context("failed to insert movie")?;

    Ok(conn.last_insert_rowid())
}

/// Retrieve every movie ordered by title ascending. The query doubles as the
/// single source of truth for how entries are ordered in the UI; the grouped
/// catalog screen derives its category order from this sort.
pub fn fetch_movies(conn: &Connection) -> Result<Vec<Movie>> {
    let mut stmt = conn
        .prepare(
            "SELECT image, title, category, synopsis, original_title,
                    genre, episodes, year, country, director, cast_members, available_until
             FROM movies
             ORDER BY title",
        )
        .context("failed to prepare movie query")?;

    let movies = stmt
        .query_map([], |row| {
            Ok(Movie {
                image: row.get(0)?,
                title: row.get(1)?,
                category: row.get(2)?,
                synopsis: row.get(3)?,
                original_title: row.get(4)?,
                genre: row.get(5)?,
                episodes: row.get(6)?,
                year: row.get(7)?,
                country: row.get(8)?,
                director: row.get(9)?,
                cast: row.get(10)?,
                available_until: row.get(11)?,
            })
        })
        .context("failed to iterate movies")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect movies")?;

    Ok(movies)
}

/// Remove every movie row unconditionally, returning how many were deleted so
/// startup can log the wipe.
pub fn delete_all_movies(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM movies", [])
        .context("failed to delete movies")
}
