//! Entity shapes shared by both score stores.
//!
//! These are the values the engine computes over. Remote rows are converted
//! into them by the repos layer; the local mirror serializes them directly.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub created_by: Option<String>,
}

/// A seat in a game. `player_order` is 0-based and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub game_id: String,
    pub user_id: Option<String>,
    pub player_name: String,
    pub player_order: u8,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub game_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub played_at: OffsetDateTime,
    /// Flips false → true once; never back.
    pub is_complete: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub id: String,
    pub session_id: String,
    pub game_player_id: String,
    pub round_number: u8,
    pub tricks_won: u16,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Upsert key plus value for a score write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWrite<'a> {
    pub session_id: &'a str,
    pub game_player_id: &'a str,
    pub round_number: u8,
    pub tricks_won: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionWithScores {
    #[serde(flatten)]
    pub session: Session,
    #[serde(default)]
    pub scores: Vec<Score>,
}

/// Cumulative result for one seat, counting completed sessions only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub game_id: String,
    pub game_player_id: String,
    pub player_name: String,
    pub user_id: Option<String>,
    pub total_tricks: u32,
    pub sessions_played: u32,
}
