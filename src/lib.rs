//! Core library surface for the movie-shelf TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as potential external tooling can reuse the same
//! pieces: the SQLite-backed store, the domain model, the seed loader, and
//! the Ratatui front-end.

pub mod db;
pub mod models;
pub mod seed;
pub mod ui;

/// Convenience re-exports for the persistence layer. These functions are
/// typically used by `main.rs` to initialize the embedded SQLite store and
/// load the catalog.
pub use db::{db_path, ensure_schema, fetch_movies};

/// The domain type that other layers manipulate, plus the title lookup the
/// detail screen navigates with.
pub use models::{find_by_title, Movie};

/// The startup seeding pass that wipes and repopulates the catalog.
pub use seed::reseed;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
