//! Domain layer: score-tracking types and the pure rules over them.

pub mod board;
pub mod model;
pub mod roster;
pub mod rounds;
pub mod rules;
pub mod standings;

#[cfg(test)]
mod test_prelude;

// Re-exports for ergonomics
pub use board::SessionBoard;
pub use model::{Game, Player, Score, ScoreWrite, Session, SessionWithScores, Standing};
pub use roster::{generate_game_name, validate_roster, NewPlayer};
pub use rounds::{current_round, is_round_advance_complete, RoundEntry};
pub use rules::{cards_for_round, CARDS_PER_ROUND, TOTAL_ROUNDS};
pub use standings::compute_standings;
