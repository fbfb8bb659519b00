//! DTOs for players_sea adapter.

/// DTO for seating a player in a game.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub game_id: String,
    pub user_id: Option<String>,
    pub player_name: String,
    pub player_order: i16,
}
