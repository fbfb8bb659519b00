//! Relational score store over a SeaORM connection.
//!
//! Nothing here caches: every read goes to the database and round state is
//! re-derived by the caller from the rows returned.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info, warn};

use crate::domain::model::{Game, Player, Score, ScoreWrite, Session, SessionWithScores, Standing};
use crate::domain::roster::NewPlayer;
use crate::errors::domain::DomainError;
use crate::repos::{games, players, scores, sessions, standings};
use crate::store::{ScoreStore, SeatedGame, SetupError};

#[derive(Debug, Clone)]
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Standings as the `game_standings` view reports them.
    pub async fn view_standings(&self, game_id: &str) -> Result<Vec<Standing>, DomainError> {
        standings::find_by_game(&self.db, game_id).await
    }
}

#[async_trait]
impl ScoreStore for SeaOrmStore {
    async fn game(&self, game_id: &str) -> Result<Option<Game>, DomainError> {
        games::find_by_id(&self.db, game_id).await
    }

    async fn players(&self, game_id: &str) -> Result<Vec<Player>, DomainError> {
        players::find_by_game(&self.db, game_id).await
    }

    async fn sessions(&self, game_id: &str) -> Result<Vec<SessionWithScores>, DomainError> {
        let found = sessions::find_by_game(&self.db, game_id).await?;
        let mut out = Vec::with_capacity(found.len());
        for session in found {
            let scores = scores::find_by_session(&self.db, &session.id).await?;
            out.push(SessionWithScores { session, scores });
        }
        Ok(out)
    }

    async fn session(&self, session_id: &str) -> Result<Option<Session>, DomainError> {
        sessions::find_by_id(&self.db, session_id).await
    }

    async fn scores(&self, session_id: &str) -> Result<Vec<Score>, DomainError> {
        scores::find_by_session(&self.db, session_id).await
    }

    async fn create_game(
        &self,
        name: &str,
        owner: Option<&str>,
        roster: &[NewPlayer],
    ) -> Result<SeatedGame, SetupError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SetupError::Game(e.into()))?;

        let game = games::create_game(&txn, name, owner)
            .await
            .map_err(SetupError::Game)?;

        let seated = match players::create_roster(&txn, &game.id, roster, owner).await {
            Ok(seated) => seated,
            Err(e) => {
                warn!(game_id = %game.id, error = %e, "Seating failed, rolling back game");
                if let Err(rb) = txn.rollback().await {
                    warn!(error = %rb, "Rollback failed");
                }
                return Err(SetupError::Players(e));
            }
        };

        txn.commit()
            .await
            .map_err(|e| SetupError::Players(e.into()))?;

        info!(game_id = %game.id, players = seated.len(), "Game created");
        Ok(SeatedGame {
            game,
            players: seated,
        })
    }

    async fn create_session(&self, game_id: &str) -> Result<Option<Session>, DomainError> {
        if games::find_by_id(&self.db, game_id).await?.is_none() {
            debug!(game_id, "create_session for unknown game");
            return Ok(None);
        }
        sessions::find_or_create_open(&self.db, game_id)
            .await
            .map(Some)
    }

    async fn record_score(&self, write: ScoreWrite<'_>) -> Result<Option<Score>, DomainError> {
        let score = scores::upsert_score(&self.db, write).await?;
        debug!(
            session_id = write.session_id,
            game_player_id = write.game_player_id,
            round = write.round_number,
            tricks = write.tricks_won,
            "Score saved"
        );
        Ok(Some(score))
    }

    async fn complete_session(&self, session_id: &str) -> Result<bool, DomainError> {
        let updated = sessions::mark_complete(&self.db, session_id).await?;
        if updated {
            info!(session_id, "Session completed");
        }
        Ok(updated)
    }

    async fn delete_game(&self, game_id: &str) -> Result<bool, DomainError> {
        let removed = games::delete_game(&self.db, game_id).await?;
        if removed {
            info!(game_id, "Game deleted");
        }
        Ok(removed)
    }
}
