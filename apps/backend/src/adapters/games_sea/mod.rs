//! SeaORM adapter for game repository - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::games;

pub mod dto;

pub use dto::GameCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::Id.eq(game_id))
        .one(conn)
        .await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let game = games::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(dto.name),
        created_at: Set(time::OffsetDateTime::now_utc()),
        created_by: Set(dto.created_by),
    };

    game.insert(conn).await
}

/// Delete a game; players, sessions and scores go with it via cascade.
pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<u64, sea_orm::DbErr> {
    let result = games::Entity::delete_many()
        .filter(games::Column::Id.eq(game_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
