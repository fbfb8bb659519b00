//! Score stores: one async interface, a relational and a local implementation.
//!
//! The engine (`domain::rounds`, `domain::standings`) never talks to storage.
//! Services load entities through [`ScoreStore`] and hand them to the pure
//! functions, so both modes share one set of rules.

use async_trait::async_trait;

use crate::domain::model::{Game, Player, Score, ScoreWrite, Session, SessionWithScores};
use crate::domain::roster::NewPlayer;
use crate::errors::domain::DomainError;

pub mod blob;
pub mod local;
pub mod remote;

pub use blob::{BlobError, BlobStorage, FileBlobStorage, MemoryBlobStorage};
pub use local::LocalStore;
pub use remote::SeaOrmStore;

/// Which half of game setup failed.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    Game(DomainError),
    Players(DomainError),
}

/// A game together with its seats, as returned by setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatedGame {
    pub game: Game,
    pub players: Vec<Player>,
}

#[async_trait]
pub trait ScoreStore: Send + Sync {
    async fn game(&self, game_id: &str) -> Result<Option<Game>, DomainError>;

    /// Seats of a game by `player_order`; empty for an unknown game.
    async fn players(&self, game_id: &str) -> Result<Vec<Player>, DomainError>;

    /// Sessions of a game with their scores, newest `played_at` first.
    async fn sessions(&self, game_id: &str) -> Result<Vec<SessionWithScores>, DomainError>;

    async fn session(&self, session_id: &str) -> Result<Option<Session>, DomainError>;

    async fn scores(&self, session_id: &str) -> Result<Vec<Score>, DomainError>;

    /// Create a game and seat its roster as one unit.
    async fn create_game(
        &self,
        name: &str,
        owner: Option<&str>,
        roster: &[NewPlayer],
    ) -> Result<SeatedGame, SetupError>;

    /// The game's incomplete session, created if needed. `None` for an unknown game.
    async fn create_session(&self, game_id: &str) -> Result<Option<Session>, DomainError>;

    /// Insert or overwrite one score. Idempotent.
    ///
    /// `None` when the store silently ignores the write (unknown session in
    /// the local store).
    async fn record_score(&self, write: ScoreWrite<'_>) -> Result<Option<Score>, DomainError>;

    /// Mark a session complete. Returns false for an unknown session.
    async fn complete_session(&self, session_id: &str) -> Result<bool, DomainError>;

    /// Returns false for an unknown game.
    async fn delete_game(&self, game_id: &str) -> Result<bool, DomainError>;
}
