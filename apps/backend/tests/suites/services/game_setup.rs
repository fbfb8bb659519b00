use std::sync::Arc;

use whist_backend::{AppError, ErrorCode, GameService, NewPlayer, ScoreStore};

use crate::support::{local_store, remote_store, roster};

#[tokio::test]
async fn remote_game_is_named_after_its_players() -> Result<(), AppError> {
    let store = Arc::new(remote_store().await?);
    let service = GameService::new(store.clone());

    let seated = service
        .create_game(Some("user-1"), &roster(&["Alice", "Bob", "Carol"]))
        .await?;

    assert_eq!(seated.game.name, "Alice, Bob & Carol");
    assert_eq!(seated.game.created_by.as_deref(), Some("user-1"));
    assert_eq!(seated.players.len(), 3);
    assert_eq!(seated.players[0].user_id.as_deref(), Some("user-1"));

    let overview = service
        .game_overview(&seated.game.id)
        .await?
        .expect("overview for new game");
    assert!(overview.sessions.is_empty());
    assert!(overview.incomplete_session.is_none());
    assert_eq!(overview.standings.len(), 3);
    assert!(overview.standings.iter().all(|s| s.total_tricks == 0));
    Ok(())
}

#[tokio::test]
async fn roster_limits_are_enforced_before_touching_the_store() -> Result<(), AppError> {
    let store = Arc::new(remote_store().await?);
    let service = GameService::new(store.clone());

    let err = service
        .create_game(None, &[NewPlayer::owner("Alice")])
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::TooFewPlayers);
    assert_eq!(err.to_string(), "Validation error: At least 2 players are required");

    let eight: Vec<NewPlayer> = (1..=8).map(|i| NewPlayer::new(format!("P{i}"))).collect();
    let err = service.create_game(None, &eight).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::TooManyPlayers);
    assert_eq!(err.to_string(), "Validation error: Maximum 7 players allowed");

    let seen = whist_backend::repos::players::find_by_user(store.connection(), "user-1").await?;
    assert!(seen.is_empty());
    Ok(())
}

#[tokio::test]
async fn local_games_never_link_accounts() -> Result<(), AppError> {
    let service = GameService::new(Arc::new(local_store()));

    let seated = service
        .create_game(Some("user-1"), &roster(&["Alice", "Bob"]))
        .await?;

    assert_eq!(seated.game.name, "Alice & Bob");
    assert!(seated.game.id.starts_with("local_"));
    assert!(seated.game.created_by.is_none());
    assert!(seated.players.iter().all(|p| p.user_id.is_none()));
    assert!(seated.players.iter().all(|p| p.id.starts_with("local_")));
    Ok(())
}

#[tokio::test]
async fn deleting_reports_whether_anything_went() -> Result<(), AppError> {
    let store: Arc<dyn ScoreStore> = Arc::new(remote_store().await?);
    let service = GameService::new(store.clone());
    let seated = service.create_game(None, &roster(&["Alice", "Bob"])).await?;

    assert!(service.delete_game(&seated.game.id).await?);
    assert!(!service.delete_game(&seated.game.id).await?);
    assert!(service.game_overview(&seated.game.id).await?.is_none());
    assert!(store.players(&seated.game.id).await?.is_empty());
    Ok(())
}
