//! Persistence module split across logical submodules.

mod connection;
mod movies;

pub use connection::{db_path, ensure_schema, open_at, open_in_memory};
pub use movies::{delete_all_movies, fetch_movies, insert_movie};
