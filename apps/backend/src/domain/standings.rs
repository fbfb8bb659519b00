use std::collections::HashSet;

use crate::domain::model::{Player, SessionWithScores, Standing};

/// Per-player totals over the game's completed sessions, in seat order.
///
/// Every seated player appears, with zeros when nothing qualifies.
pub fn compute_standings(
    game_id: &str,
    players: &[Player],
    sessions: &[SessionWithScores],
) -> Vec<Standing> {
    let mut seated: Vec<&Player> = players.iter().collect();
    seated.sort_by_key(|p| p.player_order);

    seated
        .into_iter()
        .map(|player| {
            let mut total_tricks = 0u32;
            let mut played: HashSet<&str> = HashSet::new();

            for score in sessions
                .iter()
                .filter(|s| s.session.is_complete)
                .flat_map(|s| s.scores.iter())
                .filter(|score| score.game_player_id == player.id)
            {
                total_tricks += u32::from(score.tricks_won);
                played.insert(score.session_id.as_str());
            }

            Standing {
                game_id: game_id.to_owned(),
                game_player_id: player.id.clone(),
                player_name: player.player_name.clone(),
                user_id: player.user_id.clone(),
                total_tricks,
                sessions_played: u32::try_from(played.len()).unwrap_or(u32::MAX),
            }
        })
        .collect()
}

/// Number of completed sessions in `sessions`.
pub fn completed_session_count(sessions: &[SessionWithScores]) -> u32 {
    let n = sessions.iter().filter(|s| s.session.is_complete).count();
    u32::try_from(n).unwrap_or(u32::MAX)
}
