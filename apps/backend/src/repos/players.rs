//! Seat repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::players_sea as players_adapter;
use crate::domain::model::Player;
use crate::domain::roster::NewPlayer;
use crate::entities::game_players;
use crate::errors::domain::DomainError;
use crate::repos::narrow;

/// Seat a roster in order; `player_order` is the roster index.
///
/// The entry flagged as owner is linked to `owner`. Run inside a transaction
/// together with the game insert.
pub async fn create_roster<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    roster: &[NewPlayer],
    owner: Option<&str>,
) -> Result<Vec<Player>, DomainError> {
    let mut seated = Vec::with_capacity(roster.len());
    for (index, entry) in roster.iter().enumerate() {
        let dto = players_adapter::PlayerCreate {
            game_id: game_id.to_string(),
            user_id: if entry.is_owner {
                owner.map(str::to_string)
            } else {
                None
            },
            player_name: entry.name.clone(),
            player_order: narrow(index, "player_order")?,
        };
        let model = players_adapter::create_player(conn, dto).await?;
        seated.push(Player::try_from(model)?);
    }
    Ok(seated)
}

/// All seats of a game, by player_order.
pub async fn find_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Vec<Player>, DomainError> {
    let models = players_adapter::find_by_game(conn, game_id).await?;
    models.into_iter().map(Player::try_from).collect()
}

pub async fn find_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Vec<Player>, DomainError> {
    let models = players_adapter::find_by_user(conn, user_id).await?;
    models.into_iter().map(Player::try_from).collect()
}

impl TryFrom<game_players::Model> for Player {
    type Error = DomainError;

    fn try_from(model: game_players::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            player_order: narrow(model.player_order, "player_order")?,
            id: model.id,
            game_id: model.game_id,
            user_id: model.user_id,
            player_name: model.player_name,
            created_at: model.created_at,
        })
    }
}
