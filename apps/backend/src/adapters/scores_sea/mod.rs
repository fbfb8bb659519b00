//! SeaORM adapter for scores repository.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::entities::scores;

pub mod dto;

pub use dto::ScoreUpsert;

/// Insert or overwrite the score for one (session, player, round) triple.
///
/// A single `INSERT .. ON CONFLICT DO UPDATE` against
/// `ux_scores_session_player_round`; on conflict only `tricks_won` and
/// `updated_at` change, so the row keeps its id and `created_at`.
pub async fn upsert_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ScoreUpsert,
) -> Result<scores::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let score = scores::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        session_id: Set(dto.session_id.clone()),
        game_player_id: Set(dto.game_player_id.clone()),
        round_number: Set(dto.round_number),
        tricks_won: Set(dto.tricks_won),
        created_at: Set(now),
        updated_at: Set(now),
    };

    scores::Entity::insert(score)
        .on_conflict(
            OnConflict::columns([
                scores::Column::SessionId,
                scores::Column::GamePlayerId,
                scores::Column::RoundNumber,
            ])
            .update_columns([scores::Column::TricksWon, scores::Column::UpdatedAt])
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    find_by_triple(conn, &dto.session_id, &dto.game_player_id, dto.round_number)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Score not found after upsert".to_string()))
}

pub async fn find_by_triple<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: &str,
    game_player_id: &str,
    round_number: i16,
) -> Result<Option<scores::Model>, sea_orm::DbErr> {
    scores::Entity::find()
        .filter(scores::Column::SessionId.eq(session_id))
        .filter(scores::Column::GamePlayerId.eq(game_player_id))
        .filter(scores::Column::RoundNumber.eq(round_number))
        .one(conn)
        .await
}

/// All scores of a session, by round.
pub async fn find_by_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: &str,
) -> Result<Vec<scores::Model>, sea_orm::DbErr> {
    scores::Entity::find()
        .filter(scores::Column::SessionId.eq(session_id))
        .order_by(scores::Column::RoundNumber, Order::Asc)
        .all(conn)
        .await
}
