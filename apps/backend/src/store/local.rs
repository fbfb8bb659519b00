//! In-process mirror for guest/offline play.
//!
//! All games live in one JSON document:
//! `{"games":[{...game, "players":[..], "sessions":[{...session, "scores":[..]}]}]}`
//! stored in a [`BlobStorage`] under a fixed key. The document is loaded once
//! at construction and rewritten after every mutation. Storage and parse
//! failures are logged and swallowed; a store that cannot load starts empty.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, error, info, warn};

use crate::config::local::LocalConfig;
use crate::domain::model::{Game, Player, Score, ScoreWrite, Session, SessionWithScores};
use crate::domain::roster::{validate_roster, NewPlayer};
use crate::errors::domain::DomainError;
use crate::store::blob::{BlobStorage, FileBlobStorage, MemoryBlobStorage};
use crate::store::{ScoreStore, SeatedGame, SetupError};
use crate::utils::local_id::generate_local_id;

/// A game with everything recorded under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalGame {
    #[serde(flatten)]
    pub game: Game,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub sessions: Vec<SessionWithScores>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LocalState {
    #[serde(default)]
    games: Vec<LocalGame>,
}

impl LocalState {
    fn game_mut(&mut self, game_id: &str) -> Option<&mut LocalGame> {
        self.games.iter_mut().find(|g| g.game.id == game_id)
    }

    /// Find a session, restricted to one game when `game_id` is given.
    fn session_mut(
        &mut self,
        game_id: Option<&str>,
        session_id: &str,
    ) -> Option<&mut SessionWithScores> {
        self.games
            .iter_mut()
            .filter(|g| game_id.map_or(true, |id| g.game.id == id))
            .flat_map(|g| g.sessions.iter_mut())
            .find(|s| s.session.id == session_id)
    }
}

pub struct LocalStore {
    storage: Arc<dyn BlobStorage>,
    storage_key: String,
    id_prefix: String,
    state: Mutex<LocalState>,
}

impl std::fmt::Debug for LocalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStore")
            .field("storage_key", &self.storage_key)
            .field("id_prefix", &self.id_prefix)
            .field("games", &self.state.lock().games.len())
            .finish()
    }
}

impl LocalStore {
    /// Store with default key and id prefix over `storage`.
    pub fn new(storage: Arc<dyn BlobStorage>) -> Self {
        Self::with_config(storage, &LocalConfig::default())
    }

    pub fn with_config(storage: Arc<dyn BlobStorage>, config: &LocalConfig) -> Self {
        let state = load_state(storage.as_ref(), &config.storage_key);
        Self {
            storage,
            storage_key: config.storage_key.clone(),
            id_prefix: config.id_prefix.clone(),
            state: Mutex::new(state),
        }
    }

    /// Pick the blob backend from config: a data directory when set, memory otherwise.
    pub fn from_config(config: &LocalConfig) -> Self {
        let storage: Arc<dyn BlobStorage> = match &config.data_dir {
            Some(dir) => Arc::new(FileBlobStorage::new(dir)),
            None => Arc::new(MemoryBlobStorage::new()),
        };
        Self::with_config(storage, config)
    }

    fn next_id(&self) -> String {
        generate_local_id(&self.id_prefix)
    }

    /// Apply `f` to the state and persist the result.
    fn mutate<R>(&self, f: impl FnOnce(&mut LocalState) -> R) -> R {
        let mut state = self.state.lock();
        let out = f(&mut state);
        self.persist(&state);
        out
    }

    fn persist(&self, state: &LocalState) {
        let json = match serde_json::to_string(state) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "Failed to serialize local games");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.storage_key, &json) {
            error!(key = %self.storage_key, error = %e, "Failed to save local games");
        }
    }

    /// Create a game with every player unlinked from any account.
    ///
    /// The roster is checked the same way the game service checks it, so
    /// seat orders are always distinct.
    pub fn create_game(&self, name: &str, roster: &[NewPlayer]) -> Result<LocalGame, DomainError> {
        validate_roster(roster)?;
        let game_id = self.next_id();
        let now = OffsetDateTime::now_utc();

        // At most MAX_PLAYERS seats after validation.
        let players = roster
            .iter()
            .zip(0u8..)
            .map(|(entry, player_order)| Player {
                id: self.next_id(),
                game_id: game_id.clone(),
                user_id: None,
                player_name: entry.name.clone(),
                player_order,
                created_at: now,
            })
            .collect();

        let game = LocalGame {
            game: Game {
                id: game_id,
                name: name.to_string(),
                created_at: now,
                created_by: None,
            },
            players,
            sessions: Vec::new(),
        };

        self.mutate(|state| state.games.push(game.clone()));
        info!(game_id = %game.game.id, players = game.players.len(), "Local game created");
        Ok(game)
    }

    pub fn game(&self, game_id: &str) -> Option<LocalGame> {
        self.state
            .lock()
            .games
            .iter()
            .find(|g| g.game.id == game_id)
            .cloned()
    }

    /// The game's incomplete session, or a new one. `None` for an unknown game.
    pub fn create_session(&self, game_id: &str) -> Option<Session> {
        let session_id = self.next_id();
        self.mutate(|state| {
            let game = state.game_mut(game_id)?;

            if let Some(open) = game.sessions.iter().find(|s| !s.session.is_complete) {
                debug!(game_id, session_id = %open.session.id, "Reusing open local session");
                return Some(open.session.clone());
            }

            let now = OffsetDateTime::now_utc();
            let session = Session {
                id: session_id,
                game_id: game_id.to_string(),
                played_at: now,
                is_complete: false,
                created_at: now,
            };
            game.sessions.push(SessionWithScores {
                session: session.clone(),
                scores: Vec::new(),
            });
            info!(game_id, session_id = %session.id, "Local session created");
            Some(session)
        })
    }

    pub fn session(&self, game_id: &str, session_id: &str) -> Option<SessionWithScores> {
        self.game(game_id)?
            .sessions
            .into_iter()
            .find(|s| s.session.id == session_id)
    }

    pub fn incomplete_session(&self, game_id: &str) -> Option<SessionWithScores> {
        self.game(game_id)?
            .sessions
            .into_iter()
            .find(|s| !s.session.is_complete)
    }

    /// Overwrite or insert one score. No-op for an unknown game or session.
    pub fn update_score(
        &self,
        game_id: &str,
        session_id: &str,
        game_player_id: &str,
        round_number: u8,
        tricks_won: u16,
    ) -> Option<Score> {
        let write = ScoreWrite {
            session_id,
            game_player_id,
            round_number,
            tricks_won,
        };
        self.write_score(Some(game_id), write)
    }

    /// No-op for an unknown game or session.
    pub fn complete_session(&self, game_id: &str, session_id: &str) -> bool {
        self.close_session(Some(game_id), session_id)
    }

    fn write_score(&self, game_id: Option<&str>, write: ScoreWrite<'_>) -> Option<Score> {
        let new_id = self.next_id();
        self.mutate(|state| {
            let session = state.session_mut(game_id, write.session_id)?;
            Some(upsert_in_session(session, new_id, write))
        })
    }

    fn close_session(&self, game_id: Option<&str>, session_id: &str) -> bool {
        let closed = self.mutate(|state| match state.session_mut(game_id, session_id) {
            Some(s) => {
                s.session.is_complete = true;
                true
            }
            None => false,
        });
        if closed {
            debug!(session_id, "Local session completed");
        }
        closed
    }

    pub fn delete_game(&self, game_id: &str) -> bool {
        let removed = self.mutate(|state| {
            let before = state.games.len();
            state.games.retain(|g| g.game.id != game_id);
            before != state.games.len()
        });
        if removed {
            info!(game_id, "Local game deleted");
        }
        removed
    }

    pub fn all_games(&self) -> Vec<LocalGame> {
        self.state.lock().games.clone()
    }

    /// Drop every local game.
    pub fn clear(&self) {
        self.mutate(|state| state.games.clear());
        info!("Local games cleared");
    }
}

fn load_state(storage: &dyn BlobStorage, key: &str) -> LocalState {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "No local games saved yet");
            return LocalState::default();
        }
        Err(e) => {
            error!(key, error = %e, "Failed to load local games");
            return LocalState::default();
        }
    };

    match serde_json::from_str::<LocalState>(&raw) {
        Ok(state) => {
            debug!(key, games = state.games.len(), "Local games loaded");
            state
        }
        Err(e) => {
            warn!(key, error = %e, "Discarding unreadable local games");
            LocalState::default()
        }
    }
}

fn upsert_in_session(session: &mut SessionWithScores, new_id: String, write: ScoreWrite<'_>) -> Score {
    let now = OffsetDateTime::now_utc();

    if let Some(existing) = session.scores.iter_mut().find(|s| {
        s.game_player_id == write.game_player_id && s.round_number == write.round_number
    }) {
        existing.tricks_won = write.tricks_won;
        existing.updated_at = now;
        return existing.clone();
    }

    let score = Score {
        id: new_id,
        session_id: session.session.id.clone(),
        game_player_id: write.game_player_id.to_string(),
        round_number: write.round_number,
        tricks_won: write.tricks_won,
        created_at: now,
        updated_at: now,
    };
    session.scores.push(score.clone());
    score
}

#[async_trait]
impl ScoreStore for LocalStore {
    async fn game(&self, game_id: &str) -> Result<Option<Game>, DomainError> {
        Ok(LocalStore::game(self, game_id).map(|g| g.game))
    }

    async fn players(&self, game_id: &str) -> Result<Vec<Player>, DomainError> {
        let mut players = LocalStore::game(self, game_id)
            .map(|g| g.players)
            .unwrap_or_default();
        players.sort_by_key(|p| p.player_order);
        Ok(players)
    }

    async fn sessions(&self, game_id: &str) -> Result<Vec<SessionWithScores>, DomainError> {
        let mut sessions = LocalStore::game(self, game_id)
            .map(|g| g.sessions)
            .unwrap_or_default();
        sessions.sort_by(|a, b| b.session.played_at.cmp(&a.session.played_at));
        Ok(sessions)
    }

    async fn session(&self, session_id: &str) -> Result<Option<Session>, DomainError> {
        let state = self.state.lock();
        Ok(state
            .games
            .iter()
            .flat_map(|g| g.sessions.iter())
            .find(|s| s.session.id == session_id)
            .map(|s| s.session.clone()))
    }

    async fn scores(&self, session_id: &str) -> Result<Vec<Score>, DomainError> {
        let state = self.state.lock();
        Ok(state
            .games
            .iter()
            .flat_map(|g| g.sessions.iter())
            .find(|s| s.session.id == session_id)
            .map(|s| s.scores.clone())
            .unwrap_or_default())
    }

    async fn create_game(
        &self,
        name: &str,
        _owner: Option<&str>,
        roster: &[NewPlayer],
    ) -> Result<SeatedGame, SetupError> {
        let created = LocalStore::create_game(self, name, roster).map_err(SetupError::Players)?;
        Ok(SeatedGame {
            game: created.game,
            players: created.players,
        })
    }

    async fn create_session(&self, game_id: &str) -> Result<Option<Session>, DomainError> {
        Ok(LocalStore::create_session(self, game_id))
    }

    async fn record_score(&self, write: ScoreWrite<'_>) -> Result<Option<Score>, DomainError> {
        Ok(self.write_score(None, write))
    }

    async fn complete_session(&self, session_id: &str) -> Result<bool, DomainError> {
        Ok(self.close_session(None, session_id))
    }

    async fn delete_game(&self, game_id: &str) -> Result<bool, DomainError> {
        Ok(LocalStore::delete_game(self, game_id))
    }
}
