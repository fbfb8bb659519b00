//! Error codes surfaced by the service layer.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Fewer than two players on a roster
    TooFewPlayers,
    /// More than seven players on a roster
    TooManyPlayers,
    /// Blank player name
    EmptyPlayerName,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// A row missing where the store expected one
    NotFound,

    // Conflicts
    OpenSessionExists,
    SeatOrderTaken,
    DuplicateScore,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // Categorized write failures
    SaveScoreFailed,
    CreateSessionFailed,
    CompleteSessionFailed,
    CreateGameFailed,
    AddPlayersFailed,
    DeleteGameFailed,

    // System Errors
    DbUnavailable,
    DbTimeout,
    DataCorruption,
    ConfigError,
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TooFewPlayers => "TOO_FEW_PLAYERS",
            Self::TooManyPlayers => "TOO_MANY_PLAYERS",
            Self::EmptyPlayerName => "EMPTY_PLAYER_NAME",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::NotFound => "NOT_FOUND",

            Self::OpenSessionExists => "OPEN_SESSION_EXISTS",
            Self::SeatOrderTaken => "SEAT_ORDER_TAKEN",
            Self::DuplicateScore => "DUPLICATE_SCORE",
            Self::Conflict => "CONFLICT",

            Self::SaveScoreFailed => "SAVE_SCORE_FAILED",
            Self::CreateSessionFailed => "CREATE_SESSION_FAILED",
            Self::CompleteSessionFailed => "COMPLETE_SESSION_FAILED",
            Self::CreateGameFailed => "CREATE_GAME_FAILED",
            Self::AddPlayersFailed => "ADD_PLAYERS_FAILED",
            Self::DeleteGameFailed => "DELETE_GAME_FAILED",

            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
