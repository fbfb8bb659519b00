//! DTOs for sessions_sea adapter.

use time::OffsetDateTime;

/// DTO for opening a session. `played_at` defaults to now.
#[derive(Debug, Clone)]
pub struct SessionCreate {
    pub game_id: String,
    pub played_at: Option<OffsetDateTime>,
}

impl SessionCreate {
    pub fn new(game_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            played_at: None,
        }
    }

    pub fn played_at(mut self, at: OffsetDateTime) -> Self {
        self.played_at = Some(at);
        self
    }
}
