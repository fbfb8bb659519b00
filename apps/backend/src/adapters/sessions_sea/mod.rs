//! SeaORM adapter for sessions.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::sessions;

pub mod dto;

pub use dto::SessionCreate;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: &str,
) -> Result<Option<sessions::Model>, sea_orm::DbErr> {
    sessions::Entity::find()
        .filter(sessions::Column::Id.eq(session_id))
        .one(conn)
        .await
}

/// The game's incomplete session, if any. At most one exists.
pub async fn find_open_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<sessions::Model>, sea_orm::DbErr> {
    sessions::Entity::find()
        .filter(sessions::Column::GameId.eq(game_id))
        .filter(sessions::Column::IsComplete.eq(false))
        .one(conn)
        .await
}

/// All sessions of a game, newest `played_at` first.
pub async fn find_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Vec<sessions::Model>, sea_orm::DbErr> {
    sessions::Entity::find()
        .filter(sessions::Column::GameId.eq(game_id))
        .order_by(sessions::Column::PlayedAt, Order::Desc)
        .all(conn)
        .await
}

/// Insert an incomplete session.
///
/// Fails with a unique violation on `ux_sessions_one_open_per_game` when the
/// game already has one.
pub async fn create_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: SessionCreate,
) -> Result<sessions::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let session = sessions::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        game_id: Set(dto.game_id),
        played_at: Set(dto.played_at.unwrap_or(now)),
        is_complete: Set(false),
        created_at: Set(now),
    };

    session.insert(conn).await
}

/// Set `is_complete`; returns rows affected (0 for an unknown id).
pub async fn mark_complete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: &str,
) -> Result<u64, sea_orm::DbErr> {
    let result = sessions::Entity::update_many()
        .col_expr(sessions::Column::IsComplete, Expr::val(true).into())
        .filter(sessions::Column::Id.eq(session_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn count_completed<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<u64, sea_orm::DbErr> {
    sessions::Entity::find()
        .filter(sessions::Column::GameId.eq(game_id))
        .filter(sessions::Column::IsComplete.eq(true))
        .count(conn)
        .await
}
