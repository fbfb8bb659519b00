//! Per-user summaries over the relational store.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::debug;

use crate::domain::model::Game;
use crate::error::AppError;
use crate::repos::{games, players, profiles, sessions, standings};

/// Name offered for the owner's seat when their profile has none.
pub const FALLBACK_OWNER_NAME: &str = "You";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardEntry {
    pub game: Game,
    pub completed_sessions: u32,
    /// The user's tricks over completed sessions.
    pub user_tricks: u32,
}

/// Every game the user holds a seat in, with their running total.
pub async fn user_dashboard<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Vec<DashboardEntry>, AppError> {
    let seats = players::find_by_user(conn, user_id).await?;

    let mut entries: Vec<DashboardEntry> = Vec::new();
    for seat in seats {
        if entries.iter().any(|e| e.game.id == seat.game_id) {
            continue;
        }
        let Some(game) = games::find_by_id(conn, &seat.game_id).await? else {
            continue;
        };

        let completed_sessions = sessions::count_completed(conn, &game.id).await?;
        let user_tricks = standings::find_by_game_player(conn, &seat.id)
            .await?
            .map_or(0, |s| s.total_tricks);

        entries.push(DashboardEntry {
            game,
            completed_sessions,
            user_tricks,
        });
    }

    debug!(user_id, games = entries.len(), "Dashboard loaded");
    Ok(entries)
}

/// Default name for the owner's seat in a new game.
pub async fn owner_display_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<String, AppError> {
    let name = profiles::first_name(conn, user_id)
        .await?
        .filter(|n| !n.trim().is_empty());
    Ok(name.unwrap_or_else(|| FALLBACK_OWNER_NAME.to_string()))
}
