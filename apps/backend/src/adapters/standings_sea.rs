//! Reads from the `game_standings` view.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder};

use crate::entities::game_standings;

pub async fn find_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Vec<game_standings::Model>, sea_orm::DbErr> {
    game_standings::Entity::find()
        .filter(game_standings::Column::GameId.eq(game_id))
        .order_by(game_standings::Column::PlayerOrder, Order::Asc)
        .all(conn)
        .await
}

pub async fn find_by_game_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_player_id: &str,
) -> Result<Option<game_standings::Model>, sea_orm::DbErr> {
    game_standings::Entity::find()
        .filter(game_standings::Column::GamePlayerId.eq(game_player_id))
        .one(conn)
        .await
}
