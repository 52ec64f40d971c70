//! Binary entry point that glues the SQLite-backed catalog to the TUI. The
//! bootstrapping pipeline is the whole story: bring up the database, wipe and
//! re-seed the fixed catalog, fetch it back sorted, and drive the Ratatui
//! event loop until the user exits. All storage work happens here, before the
//! event loop starts; the UI never writes.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use movie_shelf::{db_path, ensure_schema, fetch_movies, reseed, run_app, App};

fn main() -> Result<()> {
    // Diagnostics go to stderr and are invisible while the alternate screen
    // is active; `RUST_LOG` widens or silences them.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("movie_shelf=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let conn = ensure_schema()?;
    info!(path = %db_path()?.display(), "opened catalog database");

    let seeded = reseed(&conn)?;
    info!(seeded, "seeded catalog");

    let movies = fetch_movies(&conn)?;

    let mut app = App::new(movies);
    run_app(&mut app)
}
