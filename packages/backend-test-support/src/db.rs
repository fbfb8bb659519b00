//! Throwaway databases for integration tests.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// A private in-memory SQLite database with every migration applied.
///
/// The pool is pinned to a single connection: each new connection to
/// `sqlite::memory:` would otherwise open its own empty database.
pub async fn fresh_sqlite_db() -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.min_connections(1)
        .max_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
