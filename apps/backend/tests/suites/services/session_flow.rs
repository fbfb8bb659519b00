use std::sync::Arc;

use whist_backend::domain::cards_for_round;
use whist_backend::{AppError, ErrorCode, GameService, ScoreStore, SessionService};

use crate::support::{remote_store, roster};

async fn seated_services(
    names: &[&str],
) -> Result<(GameService, SessionService, String, Vec<String>), AppError> {
    let store: Arc<dyn ScoreStore> = Arc::new(remote_store().await?);
    let games = GameService::new(store.clone());
    let sessions = SessionService::new(store);

    let seated = games.create_game(Some("user-1"), &roster(names)).await?;
    let ids = seated.players.iter().map(|p| p.id.clone()).collect();
    Ok((games, sessions, seated.game.id, ids))
}

#[tokio::test]
async fn partial_round_keeps_the_board_on_it() -> Result<(), AppError> {
    let (_, sessions, game_id, p) = seated_services(&["Alice", "Bob", "Carol"]).await?;
    let board = sessions.open_session(&game_id).await?.expect("board");
    let session_id = board.session_id().expect("session id").to_string();
    assert_eq!(board.current_round(), 1);

    sessions.record_score(&session_id, &p[0], 1, 3).await?;
    sessions.record_score(&session_id, &p[1], 1, 2).await?;

    let board = sessions.open_session(&game_id).await?.expect("board");
    assert_eq!(board.session_id(), Some(session_id.as_str()));
    assert_eq!(board.current_round(), 1);
    assert_eq!(board.round_total(), 5);
    assert!(!board.is_round_complete());
    Ok(())
}

#[tokio::test]
async fn full_round_advances_the_board() -> Result<(), AppError> {
    let (_, sessions, game_id, p) = seated_services(&["Alice", "Bob", "Carol"]).await?;
    let board = sessions.open_session(&game_id).await?.expect("board");
    let session_id = board.session_id().expect("session id").to_string();

    for (player, tricks) in p.iter().zip([3u16, 2, 2]) {
        sessions.record_score(&session_id, player, 1, tricks).await?;
    }

    let board = sessions
        .session_board(&game_id, &session_id)
        .await?
        .expect("board");
    assert_eq!(board.current_round(), 2);
    assert_eq!(board.round_total(), 0);
    Ok(())
}

#[tokio::test]
async fn last_round_does_not_overflow() -> Result<(), AppError> {
    let (_, sessions, game_id, p) = seated_services(&["Alice", "Bob"]).await?;
    let board = sessions.open_session(&game_id).await?.expect("board");
    let session_id = board.session_id().expect("session id").to_string();

    for round in 1..=7u8 {
        let cards = u16::from(cards_for_round(round).expect("scheduled round"));
        sessions.record_score(&session_id, &p[0], round, cards).await?;
        sessions.record_score(&session_id, &p[1], round, 0).await?;
    }

    let board = sessions
        .session_board(&game_id, &session_id)
        .await?
        .expect("board");
    assert_eq!(board.current_round(), 7);
    assert!(board.is_round_complete());
    Ok(())
}

#[tokio::test]
async fn completed_session_counts_and_a_new_one_opens() -> Result<(), AppError> {
    let (games, sessions, game_id, p) = seated_services(&["Alice", "Bob"]).await?;
    let board = sessions.open_session(&game_id).await?.expect("board");
    let first = board.session_id().expect("session id").to_string();

    sessions.record_score(&first, &p[0], 1, 10).await?;
    assert!(sessions.complete_session(&first).await?);

    let board = sessions.open_session(&game_id).await?.expect("board");
    let second = board.session_id().expect("session id").to_string();
    assert_ne!(first, second);
    assert_eq!(board.current_round(), 1);
    sessions.record_score(&second, &p[0], 1, 99).await?;

    let overview = games.game_overview(&game_id).await?.expect("overview");
    assert_eq!(overview.sessions.len(), 2);
    assert_eq!(
        overview.incomplete_session.map(|s| s.session.id),
        Some(second)
    );
    assert_eq!(overview.standings[0].total_tricks, 10);
    assert_eq!(overview.standings[0].sessions_played, 1);
    assert_eq!(overview.standings[1].sessions_played, 0);
    Ok(())
}

#[tokio::test]
async fn missing_fields_are_rejected() -> Result<(), AppError> {
    let (_, sessions, game_id, p) = seated_services(&["Alice", "Bob"]).await?;
    let board = sessions.open_session(&game_id).await?.expect("board");
    let session_id = board.session_id().expect("session id").to_string();

    for (sid, pid, round) in [
        ("", p[0].as_str(), 1u8),
        (session_id.as_str(), "", 1),
        (session_id.as_str(), p[0].as_str(), 0),
    ] {
        let err = sessions.record_score(sid, pid, round, 1).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert_eq!(err.to_string(), "Validation error: Missing required fields");
    }
    Ok(())
}

#[tokio::test]
async fn store_failures_surface_as_save_errors() -> Result<(), AppError> {
    let (_, sessions, _, p) = seated_services(&["Alice", "Bob"]).await?;

    let err = sessions
        .record_score("no-such-session", &p[0], 1, 1)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::SaveScoreFailed);
    assert_eq!(err.to_string(), "failed to save score");
    Ok(())
}

#[tokio::test]
async fn unknown_or_mismatched_targets_give_no_board() -> Result<(), AppError> {
    let (games, sessions, game_id, _) = seated_services(&["Alice", "Bob"]).await?;
    let other = games
        .create_game(None, &roster(&["Carol", "Dan"]))
        .await?
        .game
        .id;

    assert!(sessions.open_session("no-such-game").await?.is_none());
    assert!(sessions
        .session_board(&game_id, "no-such-session")
        .await?
        .is_none());

    let board = sessions.open_session(&game_id).await?.expect("board");
    let session_id = board.session_id().expect("session id");
    assert!(sessions.session_board(&other, session_id).await?.is_none());
    assert!(!sessions.complete_session("no-such-session").await?);
    Ok(())
}
