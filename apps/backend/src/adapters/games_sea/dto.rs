//! DTOs for games_sea adapter.

/// DTO for creating a new game.
#[derive(Debug, Clone, Default)]
pub struct GameCreate {
    pub name: String,
    pub created_by: Option<String>,
}

impl GameCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_by: None,
        }
    }

    pub fn by(mut self, user_id: impl Into<String>) -> Self {
        self.created_by = Some(user_id.into());
        self
    }
}
