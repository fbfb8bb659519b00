use sea_orm::{EntityTrait, PaginatorTrait};
use whist_backend::adapters::players_sea::{self, PlayerCreate};
use whist_backend::domain::ScoreWrite;
use whist_backend::entities::{GamePlayers, Scores, Sessions};
use whist_backend::errors::domain::{ConflictKind, DomainError};
use whist_backend::repos::{games, players, scores, sessions};
use whist_backend::AppError;

use crate::support::{remote_store, roster};

#[tokio::test]
async fn roster_is_seated_in_order_with_owner_linked() -> Result<(), AppError> {
    let store = remote_store().await?;
    let db = store.connection();

    let game = games::create_game(db, "Alice, Bob & Carol", Some("user-1")).await?;
    players::create_roster(db, &game.id, &roster(&["Alice", "Bob", "Carol"]), Some("user-1"))
        .await?;

    let seated = players::find_by_game(db, &game.id).await?;
    let names: Vec<&str> = seated.iter().map(|p| p.player_name.as_str()).collect();
    let orders: Vec<u8> = seated.iter().map(|p| p.player_order).collect();

    assert_eq!(names, ["Alice", "Bob", "Carol"]);
    assert_eq!(orders, [0, 1, 2]);
    assert_eq!(seated[0].user_id.as_deref(), Some("user-1"));
    assert!(seated[1..].iter().all(|p| p.user_id.is_none()));

    let found = games::find_by_id(db, &game.id).await?.expect("game row");
    assert_eq!(found.created_by.as_deref(), Some("user-1"));
    assert_eq!(found.name, "Alice, Bob & Carol");

    let mine = players::find_by_user(db, "user-1").await?;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].game_id, game.id);
    Ok(())
}

#[tokio::test]
async fn duplicate_seat_order_is_a_conflict() -> Result<(), AppError> {
    let store = remote_store().await?;
    let db = store.connection();

    let game = games::create_game(db, "Alice & Bob", None).await?;
    let seat = |name: &str| PlayerCreate {
        game_id: game.id.clone(),
        user_id: None,
        player_name: name.to_string(),
        player_order: 0,
    };

    players_sea::create_player(db, seat("Alice")).await?;
    let err = players_sea::create_player(db, seat("Bob"))
        .await
        .map_err(DomainError::from)
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::SeatOrderTaken, _)
    ));
    Ok(())
}

#[tokio::test]
async fn deleting_a_game_removes_everything_under_it() -> Result<(), AppError> {
    let store = remote_store().await?;
    let db = store.connection();

    let game = games::create_game(db, "Alice & Bob", None).await?;
    let seated =
        players::create_roster(db, &game.id, &roster(&["Alice", "Bob"]), None).await?;
    let session = sessions::find_or_create_open(db, &game.id).await?;
    scores::upsert_score(
        db,
        ScoreWrite {
            session_id: &session.id,
            game_player_id: &seated[0].id,
            round_number: 1,
            tricks_won: 4,
        },
    )
    .await?;

    assert!(games::delete_game(db, &game.id).await?);
    assert!(!games::delete_game(db, &game.id).await?);

    assert!(games::find_by_id(db, &game.id).await?.is_none());
    assert_eq!(GamePlayers::find().count(db).await?, 0);
    assert_eq!(Sessions::find().count(db).await?, 0);
    assert_eq!(Scores::find().count(db).await?, 0);
    Ok(())
}
