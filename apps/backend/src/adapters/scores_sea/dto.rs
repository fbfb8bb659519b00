//! DTOs for scores_sea adapter.

/// DTO for writing one (session, player, round) score.
#[derive(Debug, Clone)]
pub struct ScoreUpsert {
    pub session_id: String,
    pub game_player_id: String,
    pub round_number: i16,
    pub tricks_won: i32,
}
