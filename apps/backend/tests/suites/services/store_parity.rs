//! The same play script driven through both stores must yield the same
//! rounds and standings.

use std::sync::Arc;

use whist_backend::{AppError, GameService, ScoreStore, SessionService};

use crate::support::{local_store, remote_store, roster};

/// Observable outcome of a script: board rounds after each step, then
/// `(name, total, sessions_played)` per seat.
type Outcome = (Vec<u8>, Vec<(String, u32, u32)>);

/// Each session is a list of `(seat, round, tricks)`; a trailing `true`
/// closes it.
const SCRIPT: &[(&[(usize, u8, u16)], bool)] = &[
    (&[(0, 1, 3), (1, 1, 2), (2, 1, 2), (0, 2, 6)], true),
    (&[(0, 1, 7), (1, 1, 0), (2, 1, 0), (1, 2, 6), (2, 2, 0)], true),
    (&[(0, 1, 2), (1, 1, 2)], false),
];

async fn play(store: Arc<dyn ScoreStore>) -> Result<Outcome, AppError> {
    let games = GameService::new(store.clone());
    let sessions = SessionService::new(store);

    let seated = games
        .create_game(None, &roster(&["Alice", "Bob", "Carol"]))
        .await?;
    let game_id = seated.game.id.clone();

    let mut rounds = Vec::new();
    for (writes, close) in SCRIPT {
        let board = sessions.open_session(&game_id).await?.expect("board");
        let session_id = board.session_id().expect("session id").to_string();
        rounds.push(board.current_round());

        for &(seat, round, tricks) in writes.iter() {
            sessions
                .record_score(&session_id, &seated.players[seat].id, round, tricks)
                .await?;
            let board = sessions
                .session_board(&game_id, &session_id)
                .await?
                .expect("board");
            rounds.push(board.current_round());
        }
        if *close {
            sessions.complete_session(&session_id).await?;
        }
    }

    let overview = games.game_overview(&game_id).await?.expect("overview");
    let standings = overview
        .standings
        .into_iter()
        .map(|s| (s.player_name, s.total_tricks, s.sessions_played))
        .collect();
    Ok((rounds, standings))
}

#[tokio::test]
async fn both_stores_agree() -> Result<(), AppError> {
    let remote = play(Arc::new(remote_store().await?)).await?;
    let local = play(Arc::new(local_store())).await?;

    assert_eq!(remote, local);

    let (rounds, standings) = remote;
    assert_eq!(rounds, [1, 1, 1, 2, 2, 1, 1, 1, 2, 2, 2, 1, 1, 1]);
    assert_eq!(
        standings,
        [
            ("Alice".to_string(), 16, 2),
            ("Bob".to_string(), 8, 2),
            ("Carol".to_string(), 2, 2),
        ]
    );
    Ok(())
}

/// Trick counts past the old small-integer range are stored as given.
async fn record_large_tally(store: Arc<dyn ScoreStore>) -> Result<(u16, u32), AppError> {
    let games = GameService::new(store.clone());
    let sessions = SessionService::new(store);

    let seated = games.create_game(None, &roster(&["Alice", "Bob"])).await?;
    let board = sessions
        .open_session(&seated.game.id)
        .await?
        .expect("board");
    let session_id = board.session_id().expect("session id").to_string();

    let saved = sessions
        .record_score(&session_id, &seated.players[0].id, 1, 40_000)
        .await?
        .expect("score saved");
    sessions.complete_session(&session_id).await?;

    let overview = games
        .game_overview(&seated.game.id)
        .await?
        .expect("overview");
    Ok((saved.tricks_won, overview.standings[0].total_tricks))
}

#[tokio::test]
async fn large_trick_counts_are_accepted_by_both_stores() -> Result<(), AppError> {
    let remote = record_large_tally(Arc::new(remote_store().await?)).await?;
    let local = record_large_tally(Arc::new(local_store())).await?;

    assert_eq!(remote, local);
    assert_eq!(remote, (40_000, 40_000));
    Ok(())
}
