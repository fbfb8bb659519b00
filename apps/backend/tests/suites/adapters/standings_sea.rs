use whist_backend::domain::{compute_standings, ScoreWrite};
use whist_backend::repos::standings;
use whist_backend::{AppError, ScoreStore};

use crate::support::{remote_store, seed_game};

#[tokio::test]
async fn open_session_scores_stay_out_of_the_view() -> Result<(), AppError> {
    let store = remote_store().await?;
    let (_, seated) = seed_game(&store, &["Alice", "Bob"]).await?;
    let game_id = &seated.game.id;
    let alice = &seated.players[0];

    let done = store.create_session(game_id).await?.expect("session");
    store
        .record_score(ScoreWrite {
            session_id: &done.id,
            game_player_id: &alice.id,
            round_number: 1,
            tricks_won: 10,
        })
        .await?;
    store.complete_session(&done.id).await?;

    let open = store.create_session(game_id).await?.expect("session");
    assert_ne!(open.id, done.id);
    store
        .record_score(ScoreWrite {
            session_id: &open.id,
            game_player_id: &alice.id,
            round_number: 1,
            tricks_won: 99,
        })
        .await?;

    let view = store.view_standings(game_id).await?;
    assert_eq!(view.len(), 2);
    assert_eq!(view[0].player_name, "Alice");
    assert_eq!(view[0].total_tricks, 10);
    assert_eq!(view[0].sessions_played, 1);
    assert_eq!(view[1].player_name, "Bob");
    assert_eq!(view[1].total_tricks, 0);
    assert_eq!(view[1].sessions_played, 0);

    let single = standings::find_by_game_player(store.connection(), &alice.id)
        .await?
        .expect("standing row");
    assert_eq!(single.total_tricks, 10);
    Ok(())
}

#[tokio::test]
async fn view_agrees_with_in_process_aggregation() -> Result<(), AppError> {
    let store = remote_store().await?;
    let (_, seated) = seed_game(&store, &["Alice", "Bob", "Carol"]).await?;
    let game_id = &seated.game.id;

    // Three sessions: two completed, the last left open.
    let plays: [&[(usize, u8, u16)]; 3] = [
        &[(0, 1, 3), (1, 1, 2), (2, 1, 2), (0, 2, 6)],
        &[(1, 1, 7), (2, 3, 5)],
        &[(0, 1, 4), (2, 1, 3)],
    ];
    for (i, writes) in plays.iter().enumerate() {
        let session = store.create_session(game_id).await?.expect("session");
        for &(p, round_number, tricks_won) in writes.iter() {
            store
                .record_score(ScoreWrite {
                    session_id: &session.id,
                    game_player_id: &seated.players[p].id,
                    round_number,
                    tricks_won,
                })
                .await?;
        }
        if i < 2 {
            store.complete_session(&session.id).await?;
        }
    }

    let players = store.players(game_id).await?;
    let sessions = store.sessions(game_id).await?;
    let computed = compute_standings(game_id, &players, &sessions);
    let view = store.view_standings(game_id).await?;

    assert_eq!(view, computed);
    let totals: Vec<u32> = view.iter().map(|s| s.total_tricks).collect();
    assert_eq!(totals, [9, 9, 7]);
    let played: Vec<u32> = view.iter().map(|s| s.sessions_played).collect();
    assert_eq!(played, [1, 2, 2]);
    Ok(())
}
