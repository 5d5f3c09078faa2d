//! Database initialization
//!
//! Creates the database on first run and brings the schema up to date.
//! All statements are idempotent so every binary start runs the same path.

use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Connection options apply to every pooled connection: SQLite pragmas
    // are per-connection, so they cannot be set with one-off queries.
    // WAL mode allows concurrent readers with one writer.
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_millis(5000));

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    initialize_schema(&pool).await?;

    Ok(pool)
}

/// Enable foreign keys and create all tables (idempotent - safe to call
/// multiple times). Split out so tests can run the schema against an
/// in-memory pool.
pub async fn initialize_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query("PRAGMA foreign_keys = ON").execute(pool).await?;

    create_contacts_table(pool).await?;
    create_venues_table(pool).await?;
    create_artists_table(pool).await?;
    create_shows_table(pool).await?;

    Ok(())
}

/// Create the contacts table
///
/// Shared contact sub-entity referenced by exactly one venue or artist.
/// City and state are required because the venue listing groups on them.
async fn create_contacts_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
            guid TEXT PRIMARY KEY,
            address TEXT,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            phone TEXT,
            website_link TEXT,
            facebook_link TEXT,
            image_link TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            CHECK (length(city) > 0),
            CHECK (length(state) > 0)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_contacts_region ON contacts(state, city)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Create the venues table
async fn create_venues_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venues (
            guid TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            genres TEXT NOT NULL DEFAULT '[]',
            contact_id TEXT NOT NULL REFERENCES contacts(guid) ON DELETE CASCADE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            CHECK (length(name) > 0)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_venues_name ON venues(name)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_venues_contact ON venues(contact_id)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Create the artists table
async fn create_artists_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            guid TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            genres TEXT NOT NULL DEFAULT '[]',
            contact_id TEXT NOT NULL REFERENCES contacts(guid) ON DELETE CASCADE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            CHECK (length(name) > 0)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_artists_name ON artists(name)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_artists_contact ON artists(contact_id)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Create the shows table
///
/// Join entity linking one artist and one venue at a start timestamp.
/// starts_at uses the canonical TEXT format so string comparison against
/// "now" is chronological.
async fn create_shows_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shows (
            guid TEXT PRIMARY KEY,
            artist_id TEXT NOT NULL REFERENCES artists(guid) ON DELETE CASCADE,
            venue_id TEXT NOT NULL REFERENCES venues(guid) ON DELETE CASCADE,
            starts_at TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            CHECK (length(starts_at) = 19)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_venue ON shows(venue_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_artist ON shows(artist_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_starts_at ON shows(starts_at)")
        .execute(pool)
        .await?;

    Ok(())
}
