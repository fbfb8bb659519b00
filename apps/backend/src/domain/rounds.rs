//! Round progression inferred from the scores recorded for one session.
//!
//! Nothing stores "the current round". It is re-derived from the score set
//! on every read:
//! - no scores: round 1
//! - otherwise the highest round with any score, advanced by one when that
//!   round is advance-complete, capped at the last round
//!
//! Advance-complete requires one row per seated player *and* the deal's trick
//! count. The board's round-complete check (`is_round_total_complete`) only
//! looks at the total and treats missing players as zero.

use crate::domain::model::{Player, Score};
use crate::domain::rules::{cards_for_round, TOTAL_ROUNDS};

/// Tricks entered for one player in one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundEntry {
    pub game_player_id: String,
    pub tricks_won: u16,
}

/// Row count and trick total recorded for `round_number`.
fn round_tally(scores: &[Score], round_number: u8) -> (usize, u32) {
    scores
        .iter()
        .filter(|s| s.round_number == round_number)
        .fold((0, 0), |(rows, total), s| {
            (rows + 1, total + u32::from(s.tricks_won))
        })
}

/// Whether play may move past `round_number`.
///
/// Rounds outside the schedule are never complete.
pub fn is_round_advance_complete(round_number: u8, player_count: usize, scores: &[Score]) -> bool {
    let Some(cards) = cards_for_round(round_number) else {
        return false;
    };
    let (rows, total) = round_tally(scores, round_number);
    rows == player_count && total == u32::from(cards)
}

pub fn current_round(players: &[Player], scores: &[Score]) -> u8 {
    let Some(max_round) = scores.iter().map(|s| s.round_number).max() else {
        return 1;
    };

    if is_round_advance_complete(max_round, players.len(), scores) {
        (max_round + 1).min(TOTAL_ROUNDS)
    } else {
        max_round
    }
}

/// Materialize `round_number` for every seated player, defaulting to 0.
///
/// Seated players come first in seat order. Rows for ids not in `players`
/// are kept after them so totals match what was recorded. When a player has
/// more than one row for the round the last one wins.
pub fn round_scores(players: &[Player], scores: &[Score], round_number: u8) -> Vec<RoundEntry> {
    let in_round: Vec<&Score> = scores
        .iter()
        .filter(|s| s.round_number == round_number)
        .collect();

    let mut seated: Vec<&Player> = players.iter().collect();
    seated.sort_by_key(|p| p.player_order);

    let mut entries: Vec<RoundEntry> = seated
        .iter()
        .map(|p| RoundEntry {
            game_player_id: p.id.clone(),
            tricks_won: in_round
                .iter()
                .rev()
                .find(|s| s.game_player_id == p.id)
                .map_or(0, |s| s.tricks_won),
        })
        .collect();

    for score in &in_round {
        if players.iter().any(|p| p.id == score.game_player_id) {
            continue;
        }
        match entries
            .iter_mut()
            .find(|e| e.game_player_id == score.game_player_id)
        {
            Some(existing) => existing.tricks_won = score.tricks_won,
            None => entries.push(RoundEntry {
                game_player_id: score.game_player_id.clone(),
                tricks_won: score.tricks_won,
            }),
        }
    }

    entries
}

pub fn round_total(entries: &[RoundEntry]) -> u32 {
    entries.iter().map(|e| u32::from(e.tricks_won)).sum()
}

/// UI gating: the entered tricks add up to the deal. Missing rows count as 0.
pub fn is_round_total_complete(round_number: u8, total: u32) -> bool {
    cards_for_round(round_number).is_some_and(|cards| total == u32::from(cards))
}
