//! Session repository functions for domain layer.

use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::adapters::sessions_sea as sessions_adapter;
use crate::domain::model::Session;
use crate::entities::sessions;
use crate::errors::domain::{ConflictKind, DomainError};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: &str,
) -> Result<Option<Session>, DomainError> {
    let session = sessions_adapter::find_by_id(conn, session_id).await?;
    Ok(session.map(Session::from))
}

pub async fn find_open_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<Session>, DomainError> {
    let session = sessions_adapter::find_open_for_game(conn, game_id).await?;
    Ok(session.map(Session::from))
}

/// Sessions of a game, newest `played_at` first.
pub async fn find_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Vec<Session>, DomainError> {
    let sessions = sessions_adapter::find_by_game(conn, game_id).await?;
    Ok(sessions.into_iter().map(Session::from).collect())
}

/// Return the game's incomplete session, creating it when there is none.
///
/// Two writers racing here both miss on the read; the partial unique index
/// rejects the second insert and the loser re-reads the winner's row.
pub async fn find_or_create_open<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Session, DomainError> {
    if let Some(open) = find_open_for_game(conn, game_id).await? {
        debug!(game_id, session_id = %open.id, "Reusing open session");
        return Ok(open);
    }

    match sessions_adapter::create_session(conn, sessions_adapter::SessionCreate::new(game_id))
        .await
    {
        Ok(created) => {
            info!(game_id, session_id = %created.id, "Session created");
            Ok(Session::from(created))
        }
        Err(e) => {
            let err = DomainError::from(e);
            if !matches!(err, DomainError::Conflict(ConflictKind::OpenSessionExists, _)) {
                return Err(err);
            }
            debug!(game_id, "Lost open-session race, re-reading");
            find_open_for_game(conn, game_id).await?.ok_or(err)
        }
    }
}

/// Mark a session complete. Returns false when no such session exists.
pub async fn mark_complete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: &str,
) -> Result<bool, DomainError> {
    let updated = sessions_adapter::mark_complete(conn, session_id).await?;
    Ok(updated > 0)
}

pub async fn count_completed<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<u32, DomainError> {
    let n = sessions_adapter::count_completed(conn, game_id).await?;
    crate::repos::narrow(n, "completed session count")
}

impl From<sessions::Model> for Session {
    fn from(model: sessions::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            played_at: model.played_at,
            is_complete: model.is_complete,
            created_at: model.created_at,
        }
    }
}
