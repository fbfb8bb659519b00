use std::ops::RangeInclusive;

pub const TOTAL_ROUNDS: u8 = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 7;

// Cards dealt per round: 7 → 6 → ... → 1
pub const CARDS_PER_ROUND: [u8; TOTAL_ROUNDS as usize] = [7, 6, 5, 4, 3, 2, 1];

/// Cards dealt in `round_no` (1-based), `None` outside the session.
pub fn cards_for_round(round_no: u8) -> Option<u8> {
    if round_no == 0 || round_no > TOTAL_ROUNDS {
        return None;
    }
    Some(CARDS_PER_ROUND[usize::from(round_no - 1)])
}

pub fn rounds() -> RangeInclusive<u8> {
    1..=TOTAL_ROUNDS
}
