pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Statement;
pub use sea_orm::{ConnectionTrait, DatabaseConnection};

mod m20250901_000001_init; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250901_000001_init::Migration)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl std::str::FromStr for MigrationCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "fresh" => Ok(Self::Fresh),
            "reset" => Ok(Self::Reset),
            "refresh" => Ok(Self::Refresh),
            "status" => Ok(Self::Status),
            other => Err(format!(
                "unknown command: {other}. Use: up | down | fresh | reset | refresh | status"
            )),
        }
    }
}

/// Run a migration command against an already-connected database.
/// Used by both the CLI and the test harness.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let before = diagnostics(db).await?;

    tracing::info!(
        cmd = ?command,
        backend = %before.backend,
        db = %before.name,
        defined = before.defined,
        applied = before.applied,
        "running migration command"
    );

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Reset => Migrator::reset(db).await,
        MigrationCommand::Refresh => Migrator::refresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    match result {
        Ok(()) => {
            if command != MigrationCommand::Status {
                let after = diagnostics(db).await?;
                tracing::info!(
                    cmd = ?command,
                    applied = after.applied,
                    "migration command finished"
                );
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(cmd = ?command, error = %e, "migration command failed");
            Err(e)
        }
    }
}

#[derive(Debug)]
struct Diagnostics {
    backend: String,
    name: String,
    applied: usize,
    defined: usize,
}

async fn diagnostics(db: &DatabaseConnection) -> Result<Diagnostics, DbErr> {
    let backend = db.get_database_backend();

    let sql = match backend {
        sea_orm::DatabaseBackend::Postgres => Some("select current_database() as name"),
        sea_orm::DatabaseBackend::Sqlite => {
            Some("SELECT file AS name FROM pragma_database_list WHERE name = 'main'")
        }
        _ => None,
    };

    let name = match sql {
        Some(sql) => {
            let stmt = Statement::from_string(backend, sql.to_string());
            match db.query_one(stmt).await? {
                Some(row) => match row.try_get::<String>("", "name") {
                    Ok(file) if file.is_empty() => ":memory:".to_string(),
                    Ok(name) => name,
                    Err(_) => "<unknown>".to_string(),
                },
                None => "<unknown>".to_string(),
            }
        }
        None => "<unsupported>".to_string(),
    };

    Ok(Diagnostics {
        backend: format!("{backend:?}"),
        name,
        applied: count_applied_migrations(db).await.unwrap_or(0),
        defined: Migrator::migrations().len(),
    })
}

/// Count the migrations applied to the database.
/// Returns 0 if the migration table doesn't exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0),
        Err(e) => Err(e),
    }
}
