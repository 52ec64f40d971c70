use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use rusqlite::Connection;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".movie-shelf";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "movies.sqlite";

/// Ensure the database file exists, create the table if this is a first run,
/// and return a live connection. There is no further migration story: the
/// schema is a single table created lazily, which is all the catalog needs.
pub fn ensure_schema() -> Result<Connection> {
    let path = db_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    open_at(&path)
}

/// Open (or create) a catalog database at an explicit location. Split out of
/// [`ensure_schema`] so tests can point the store at a temporary directory
/// instead of the user's home.
pub fn open_at(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path).context("failed to open SQLite database")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Open a throwaway in-memory catalog with the schema applied. Only the test
/// suite uses this, but it lives here so every entry point shares the exact
/// same `CREATE TABLE` statement.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Resolve the absolute path to the SQLite database inside the user's home.
/// Exposed so startup can log where the store actually lives.
pub fn db_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}

/// Create the single `movies` table. Every column is text except the two
/// numeric ones, and `title` deliberately carries no UNIQUE constraint even
/// though the detail screen navigates by it; uniqueness is a property of the
/// seed dataset, not of the schema.
fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS movies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            image TEXT NOT NULL,
            title TEXT NOT NULL,
            category TEXT NOT NULL,
            synopsis TEXT NOT NULL,
            original_title TEXT NOT NULL,
            genre TEXT NOT NULL,
            episodes INTEGER NOT NULL,
            year INTEGER NOT NULL,
            country TEXT NOT NULL,
            director TEXT NOT NULL,
            cast_members TEXT NOT NULL,
            available_until TEXT NOT NULL
        )",
        [],
    )
    .context("failed to create movies table")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_at_creates_the_movies_table() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("movies.sqlite");
        let conn = open_at(&path).expect("open_at should bootstrap the store");

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'movies'",
                [],
                |row| row.get(0),
            )
            .expect("sqlite_master query");
        assert_eq!(count, 1);
        assert!(path.exists());
    }

    #[test]
    fn open_at_is_idempotent_across_reopens() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("movies.sqlite");
        drop(open_at(&path).expect("first open"));
        // A second open must tolerate the already-existing table.
        drop(open_at(&path).expect("second open"));
    }

    #[test]
    fn title_column_is_not_unique() {
        let conn = open_in_memory().expect("in-memory store");
        for _ in 0..2 {
            conn.execute(
                "INSERT INTO movies (image, title, category, synopsis, original_title,
                    genre, episodes, year, country, director, cast_members, available_until)
                 VALUES ('p', 'Twin', 'G', 's', 'o', 'g', 1, 2020, 'c', 'd', 'e', 'u')",
                [],
            )
            .expect("duplicate titles must be accepted");
        }
    }
}
