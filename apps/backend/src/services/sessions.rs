//! Playing a session: opening it, scoring rounds, closing it.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::board::SessionBoard;
use crate::domain::model::{Score, ScoreWrite};
use crate::error::{AppError, WriteOp};
use crate::errors::ErrorCode;
use crate::store::ScoreStore;

pub struct SessionService {
    store: Arc<dyn ScoreStore>,
}

impl SessionService {
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self { store }
    }

    /// Board for the game's incomplete session, opening one if needed.
    ///
    /// `None` for an unknown game or a game without players.
    pub async fn open_session(&self, game_id: &str) -> Result<Option<SessionBoard>, AppError> {
        if self.store.game(game_id).await?.is_none() {
            return Ok(None);
        }
        let players = self.store.players(game_id).await?;
        if players.is_empty() {
            debug!(game_id, "Game has no players");
            return Ok(None);
        }

        let Some(session) = self
            .store
            .create_session(game_id)
            .await
            .map_err(|e| AppError::write_failed(WriteOp::CreateSession, e))?
        else {
            return Ok(None);
        };

        let scores = self.store.scores(&session.id).await?;
        let board = SessionBoard::new(&session.id, game_id, players, scores);
        debug!(
            game_id,
            session_id = %session.id,
            round = board.current_round(),
            "Session opened"
        );
        Ok(Some(board))
    }

    /// Board for a specific session of a game. `None` if either is missing
    /// or the session belongs to another game.
    pub async fn session_board(
        &self,
        game_id: &str,
        session_id: &str,
    ) -> Result<Option<SessionBoard>, AppError> {
        let Some(session) = self.store.session(session_id).await? else {
            return Ok(None);
        };
        if session.game_id != game_id {
            return Ok(None);
        }

        let players = self.store.players(game_id).await?;
        let scores = self.store.scores(session_id).await?;
        Ok(Some(SessionBoard::new(session_id, game_id, players, scores)))
    }

    /// Save one player's tricks for a round. Retrying the same call is safe.
    ///
    /// The round number is not checked against the schedule.
    pub async fn record_score(
        &self,
        session_id: &str,
        game_player_id: &str,
        round_number: u8,
        tricks_won: u16,
    ) -> Result<Option<Score>, AppError> {
        if session_id.is_empty() || game_player_id.is_empty() || round_number == 0 {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                "Missing required fields",
            ));
        }

        let write = ScoreWrite {
            session_id,
            game_player_id,
            round_number,
            tricks_won,
        };
        self.store
            .record_score(write)
            .await
            .map_err(|e| AppError::write_failed(WriteOp::SaveScore, e))
    }

    /// Close a session for good. Returns false for an unknown session.
    pub async fn complete_session(&self, session_id: &str) -> Result<bool, AppError> {
        let completed = self
            .store
            .complete_session(session_id)
            .await
            .map_err(|e| AppError::write_failed(WriteOp::CompleteSession, e))?;
        if completed {
            info!(session_id, "Session closed");
        }
        Ok(completed)
    }
}
