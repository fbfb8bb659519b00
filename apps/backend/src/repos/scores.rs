//! Scores repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::scores_sea as scores_adapter;
use crate::domain::model::{Score, ScoreWrite};
use crate::entities::scores;
use crate::errors::domain::DomainError;
use crate::repos::narrow;

/// Insert or overwrite the score for the write's triple. Safe to retry.
pub async fn upsert_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    write: ScoreWrite<'_>,
) -> Result<Score, DomainError> {
    let dto = scores_adapter::ScoreUpsert {
        session_id: write.session_id.to_string(),
        game_player_id: write.game_player_id.to_string(),
        round_number: i16::from(write.round_number),
        tricks_won: i32::from(write.tricks_won),
    };
    let model = scores_adapter::upsert_score(conn, dto).await?;
    Score::try_from(model)
}

/// All scores of a session, by round.
pub async fn find_by_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: &str,
) -> Result<Vec<Score>, DomainError> {
    let models = scores_adapter::find_by_session(conn, session_id).await?;
    models.into_iter().map(Score::try_from).collect()
}

impl TryFrom<scores::Model> for Score {
    type Error = DomainError;

    fn try_from(model: scores::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            round_number: narrow(model.round_number, "round_number")?,
            tricks_won: narrow(model.tricks_won, "tricks_won")?,
            id: model.id,
            session_id: model.session_id,
            game_player_id: model.game_player_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
