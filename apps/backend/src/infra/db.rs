use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

/// Connect using a URL built from the environment for `profile`/`owner`.
/// This function does NOT run any migrations.
pub async fn connect_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(profile, owner)?;
    connect_url(&database_url).await
}

/// Connect to an explicit database URL.
pub async fn connect_url(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(database_url);
    opt.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    // Every pooled connection to an in-memory SQLite database is its own database.
    if database_url.contains(":memory:") {
        opt.min_connections(1).max_connections(1);
    }

    let conn = Database::connect(opt).await?;
    info!(backend = ?conn.get_database_backend(), "database connected");
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn connect_and_migrate(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = connect_url(database_url).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
