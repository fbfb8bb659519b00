use time::macros::datetime;
use whist_backend::adapters::sessions_sea::{self, SessionCreate};
use whist_backend::errors::domain::{ConflictKind, DomainError};
use whist_backend::repos::sessions;
use whist_backend::{AppError, ScoreStore};

use crate::support::{remote_store, seed_game};

#[tokio::test]
async fn open_session_is_reused_until_completed() -> Result<(), AppError> {
    let store = remote_store().await?;
    let (_, seated) = seed_game(&store, &["Alice", "Bob"]).await?;
    let db = store.connection();

    let first = sessions::find_or_create_open(db, &seated.game.id).await?;
    let again = sessions::find_or_create_open(db, &seated.game.id).await?;
    assert_eq!(first.id, again.id);
    assert!(!first.is_complete);

    assert!(sessions::mark_complete(db, &first.id).await?);
    let next = sessions::find_or_create_open(db, &seated.game.id).await?;
    assert_ne!(next.id, first.id);

    let reloaded = sessions::find_by_id(db, &first.id).await?.expect("session row");
    assert!(reloaded.is_complete);
    Ok(())
}

#[tokio::test]
async fn second_open_session_is_rejected_by_the_index() -> Result<(), AppError> {
    let store = remote_store().await?;
    let (_, seated) = seed_game(&store, &["Alice", "Bob"]).await?;
    let db = store.connection();

    sessions_sea::create_session(db, SessionCreate::new(&seated.game.id)).await?;
    let err = sessions_sea::create_session(db, SessionCreate::new(&seated.game.id))
        .await
        .map_err(DomainError::from)
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::OpenSessionExists, _)
    ));
    Ok(())
}

#[tokio::test]
async fn completing_is_permanent_and_repeatable() -> Result<(), AppError> {
    let store = remote_store().await?;
    let (_, seated) = seed_game(&store, &["Alice", "Bob"]).await?;
    let session = store.create_session(&seated.game.id).await?.expect("session");

    assert!(store.complete_session(&session.id).await?);
    assert!(store.complete_session(&session.id).await?);
    assert!(!store.complete_session("no-such-session").await?);

    let reloaded = store.session(&session.id).await?.expect("session");
    assert!(reloaded.is_complete);
    Ok(())
}

#[tokio::test]
async fn sessions_list_newest_first() -> Result<(), AppError> {
    let store = remote_store().await?;
    let (_, seated) = seed_game(&store, &["Alice", "Bob"]).await?;
    let db = store.connection();
    let game_id = &seated.game.id;

    let older = sessions_sea::create_session(
        db,
        SessionCreate::new(game_id).played_at(datetime!(2025-01-01 20:00 UTC)),
    )
    .await?;
    sessions_sea::mark_complete(db, &older.id).await?;
    let newer = sessions_sea::create_session(
        db,
        SessionCreate::new(game_id).played_at(datetime!(2025-02-01 20:00 UTC)),
    )
    .await?;

    let listed = sessions::find_by_game(db, game_id).await?;
    let ids: Vec<&str> = listed.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, [newer.id.as_str(), older.id.as_str()]);
    assert_eq!(sessions::count_completed(db, game_id).await?, 1);
    Ok(())
}

#[tokio::test]
async fn unknown_game_gets_no_session() -> Result<(), AppError> {
    let store = remote_store().await?;
    assert!(store.create_session("no-such-game").await?.is_none());
    Ok(())
}
