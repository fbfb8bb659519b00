//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos and stores convert it into
//! `crate::errors::domain::DomainError` here, and services map
//! `DomainError` to `AppError`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract the first `table.column` from SQLite "UNIQUE constraint failed: ..." messages.
///
/// Composite keys are reported as a comma separated list; the first column is enough
/// to identify the index.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let prefix = "UNIQUE constraint failed: ";
    let start = error_msg.find(prefix)? + prefix.len();
    error_msg[start..]
        .split(|c: char| c == ',' || c.is_whitespace() || c == '"')
        .find(|s| !s.is_empty())
}

/// Map SQLite table.column format to domain-specific conflict errors.
fn map_sqlite_table_column_to_conflict(table_column: &str) -> Option<(ConflictKind, &'static str)> {
    match table_column {
        "scores.session_id" => Some((
            ConflictKind::DuplicateScore,
            "Score already recorded for this player and round",
        )),
        "game_players.game_id" => Some((
            ConflictKind::SeatOrderTaken,
            "Seat order already taken in this game",
        )),
        "sessions.game_id" => Some((
            ConflictKind::OpenSessionExists,
            "Game already has an incomplete session",
        )),
        _ => None,
    }
}

/// Map PostgreSQL constraint names to domain-specific conflict errors.
fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("ux_scores_session_player_round") {
        return Some((
            ConflictKind::DuplicateScore,
            "Score already recorded for this player and round",
        ));
    }
    if error_msg.contains("ux_game_players_game_order") {
        return Some((
            ConflictKind::SeatOrderTaken,
            "Seat order already taken in this game",
        ));
    }
    if error_msg.contains("ux_sessions_one_open_per_game") {
        return Some((
            ConflictKind::OpenSessionExists,
            "Game already has an incomplete session",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with a sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(raw_error = %error_msg, "Unique constraint violation");

        if let Some(table_column) = extract_sqlite_table_column(&error_msg) {
            if let Some((kind, detail)) = map_sqlite_table_column_to_conflict(table_column) {
                return DomainError::conflict(kind, detail);
            }
        }

        if let Some((kind, detail)) = map_postgres_constraint_to_conflict(&error_msg) {
            return DomainError::conflict(kind, detail);
        }

        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if mentions_sqlstate(&error_msg, "23514") || error_msg.contains("CHECK constraint failed") {
        warn!(raw_error = %error_msg, "Check constraint violation");
        return DomainError::validation_other("Check constraint violation");
    }

    if error_msg.contains("timeout")
        || error_msg.contains("pool")
        || error_msg.contains("unavailable")
    {
        warn!(raw_error = %error_msg, "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
