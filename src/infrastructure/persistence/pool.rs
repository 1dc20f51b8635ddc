//! Connection pool construction and schema migrations.

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Migrations embedded from `./migrations` at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a pool for `database_url`, creating the database file if missing.
///
/// An in-memory database lives only as long as its connection, so it is
/// pinned to a single connection that is never recycled.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = SqlitePoolOptions::new().acquire_timeout(acquire_timeout);

    let pool_options = if database_url.contains(":memory:") {
        pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options.max_connections(max_connections)
    };

    pool_options.connect_with(options).await
}

/// Applies pending migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
