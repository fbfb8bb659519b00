//! Roster rules applied when a game is set up.

use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::domain::{DomainError, ValidationKind};

/// One entry of the roster submitted at game creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub name: String,
    /// Seat belongs to the user creating the game.
    pub is_owner: bool,
}

impl NewPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_owner: false,
        }
    }

    pub fn owner(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_owner: true,
        }
    }
}

pub fn validate_roster(roster: &[NewPlayer]) -> Result<(), DomainError> {
    if roster.len() < MIN_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::TooFewPlayers,
            "At least 2 players are required",
        ));
    }
    if roster.len() > MAX_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::TooManyPlayers,
            "Maximum 7 players allowed",
        ));
    }
    if let Some(pos) = roster.iter().position(|p| p.name.trim().is_empty()) {
        return Err(DomainError::validation(
            ValidationKind::EmptyPlayerName,
            format!("Player {} has no name", pos + 1),
        ));
    }
    Ok(())
}

/// Default game name: "", "A", "A & B", "A, B & C".
pub fn generate_game_name<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_owned(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} & {}", head.join(", "), last.as_ref())
        }
    }
}
