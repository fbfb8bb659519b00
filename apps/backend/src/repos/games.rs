//! Game repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::games_sea as games_adapter;
use crate::domain::model::Game;
use crate::entities::games;
use crate::errors::domain::DomainError;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id).await?;
    Ok(game.map(Game::from))
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    created_by: Option<&str>,
) -> Result<Game, DomainError> {
    let mut dto = games_adapter::GameCreate::new(name);
    if let Some(owner) = created_by {
        dto = dto.by(owner);
    }
    let game = games_adapter::create_game(conn, dto).await?;
    Ok(Game::from(game))
}

/// Returns whether a game was removed.
pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<bool, DomainError> {
    let removed = games_adapter::delete_game(conn, game_id).await?;
    Ok(removed > 0)
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            created_by: model.created_by,
        }
    }
}
