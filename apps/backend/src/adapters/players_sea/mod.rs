//! SeaORM adapter for game seats.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

use crate::entities::game_players;

pub mod dto;

pub use dto::PlayerCreate;

/// Seat one player. Callers insert a whole roster inside one transaction.
pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<game_players::Model, sea_orm::DbErr> {
    let player = game_players::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        game_id: Set(dto.game_id),
        user_id: Set(dto.user_id),
        player_name: Set(dto.player_name),
        player_order: Set(dto.player_order),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    player.insert(conn).await
}

/// All seats of a game, by player_order.
pub async fn find_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Vec<game_players::Model>, sea_orm::DbErr> {
    game_players::Entity::find()
        .filter(game_players::Column::GameId.eq(game_id))
        .order_by(game_players::Column::PlayerOrder, Order::Asc)
        .all(conn)
        .await
}

/// Seats held by a user across all games.
pub async fn find_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Vec<game_players::Model>, sea_orm::DbErr> {
    game_players::Entity::find()
        .filter(game_players::Column::UserId.eq(user_id))
        .order_by(game_players::Column::CreatedAt, Order::Desc)
        .all(conn)
        .await
}
