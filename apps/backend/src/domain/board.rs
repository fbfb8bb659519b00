//! Optimistic draft of the session being scored.
//!
//! The board mirrors what the score store holds for one session and takes
//! edits before the store acknowledges them. Derived values (round entries,
//! total, completeness) are recomputed from the draft on every call.

use time::OffsetDateTime;

use crate::domain::model::{Player, Score};
use crate::domain::rounds::{self, RoundEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionBoard {
    session_id: Option<String>,
    game_id: Option<String>,
    players: Vec<Player>,
    scores: Vec<Score>,
    current_round: u8,
    is_saving: bool,
}

impl Default for SessionBoard {
    fn default() -> Self {
        Self {
            session_id: None,
            game_id: None,
            players: Vec::new(),
            scores: Vec::new(),
            current_round: 1,
            is_saving: false,
        }
    }
}

impl SessionBoard {
    pub fn new(session_id: &str, game_id: &str, players: Vec<Player>, scores: Vec<Score>) -> Self {
        let mut board = Self::default();
        board.initialize(session_id, game_id, players, scores);
        board
    }

    /// Load a session and position the board on its inferred round.
    pub fn initialize(
        &mut self,
        session_id: &str,
        game_id: &str,
        players: Vec<Player>,
        scores: Vec<Score>,
    ) {
        let current_round = rounds::current_round(&players, &scores);
        *self = Self {
            session_id: Some(session_id.to_owned()),
            game_id: Some(game_id.to_owned()),
            players,
            scores,
            current_round,
            is_saving: false,
        };
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn game_id(&self) -> Option<&str> {
        self.game_id.as_deref()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn current_round(&self) -> u8 {
        self.current_round
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    /// Move the viewed round. No bounds check; callers stay within 1..=7.
    pub fn set_round(&mut self, round_number: u8) {
        self.current_round = round_number;
    }

    /// Record an unconfirmed edit.
    ///
    /// Overwrites the draft row for `(player, round)` in place, keeping its
    /// id and timestamps, or appends a `temp-{player}-{round}` row. Ignored
    /// on a board with no session loaded.
    pub fn update_score(&mut self, game_player_id: &str, round_number: u8, tricks_won: u16) {
        let Some(session_id) = self.session_id.as_deref() else {
            return;
        };

        if let Some(existing) = self
            .scores
            .iter_mut()
            .find(|s| s.game_player_id == game_player_id && s.round_number == round_number)
        {
            existing.tricks_won = tricks_won;
            return;
        }

        let now = OffsetDateTime::now_utc();
        self.scores.push(Score {
            id: format!("temp-{game_player_id}-{round_number}"),
            session_id: session_id.to_owned(),
            game_player_id: game_player_id.to_owned(),
            round_number,
            tricks_won,
            created_at: now,
            updated_at: now,
        });
    }

    pub fn round_scores(&self) -> Vec<RoundEntry> {
        rounds::round_scores(&self.players, &self.scores, self.current_round)
    }

    pub fn round_total(&self) -> u32 {
        rounds::round_total(&self.round_scores())
    }

    pub fn is_round_complete(&self) -> bool {
        rounds::is_round_total_complete(self.current_round, self.round_total())
    }

    pub fn set_saving(&mut self, is_saving: bool) {
        self.is_saving = is_saving;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
