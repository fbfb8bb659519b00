//! Game setup and the game overview.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::domain::model::{Game, Player, SessionWithScores, Standing};
use crate::domain::roster::{generate_game_name, validate_roster, NewPlayer};
use crate::domain::standings::compute_standings;
use crate::error::{AppError, WriteOp};
use crate::store::{ScoreStore, SeatedGame, SetupError};

/// Everything shown on a game's page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOverview {
    pub game: Game,
    pub players: Vec<Player>,
    /// Newest `played_at` first.
    pub sessions: Vec<SessionWithScores>,
    pub standings: Vec<Standing>,
    pub incomplete_session: Option<SessionWithScores>,
}

pub struct GameService {
    store: Arc<dyn ScoreStore>,
}

impl GameService {
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self { store }
    }

    /// Validate the roster, name the game after its players and seat them.
    ///
    /// `owner` is recorded as creator and linked to the roster entry flagged
    /// as the owner.
    pub async fn create_game(
        &self,
        owner: Option<&str>,
        roster: &[NewPlayer],
    ) -> Result<SeatedGame, AppError> {
        validate_roster(roster)?;

        let names: Vec<&str> = roster.iter().map(|p| p.name.as_str()).collect();
        let name = generate_game_name(&names);

        let seated = self
            .store
            .create_game(&name, owner, roster)
            .await
            .map_err(|e| match e {
                SetupError::Game(source) => AppError::write_failed(WriteOp::CreateGame, source),
                SetupError::Players(source) => {
                    AppError::write_failed(WriteOp::AddPlayers, source)
                }
            })?;

        info!(game_id = %seated.game.id, name = %seated.game.name, "Game set up");
        Ok(seated)
    }

    /// `None` for an unknown game.
    pub async fn game_overview(&self, game_id: &str) -> Result<Option<GameOverview>, AppError> {
        let Some(game) = self.store.game(game_id).await? else {
            return Ok(None);
        };
        let players = self.store.players(game_id).await?;
        let sessions = self.store.sessions(game_id).await?;

        let standings = compute_standings(game_id, &players, &sessions);
        let incomplete_session = sessions.iter().find(|s| !s.session.is_complete).cloned();

        Ok(Some(GameOverview {
            game,
            players,
            sessions,
            standings,
            incomplete_session,
        }))
    }

    /// Returns false when the game did not exist.
    pub async fn delete_game(&self, game_id: &str) -> Result<bool, AppError> {
        self.store
            .delete_game(game_id)
            .await
            .map_err(|e| AppError::write_failed(WriteOp::DeleteGame, e))
    }
}
