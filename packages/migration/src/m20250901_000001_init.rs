use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Profiles {
    Table,
    Id,
    FirstName,
    CreatedAt,
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
    Name,
    CreatedAt,
    CreatedBy,
}

#[derive(Iden)]
enum GamePlayers {
    Table,
    Id,
    GameId,
    UserId,
    PlayerName,
    PlayerOrder,
    CreatedAt,
}

#[derive(Iden)]
enum Sessions {
    Table,
    Id,
    GameId,
    PlayedAt,
    IsComplete,
    CreatedAt,
}

#[derive(Iden)]
enum Scores {
    Table,
    Id,
    SessionId,
    GamePlayerId,
    RoundNumber,
    TricksWon,
    CreatedAt,
    UpdatedAt,
}

// Portable across Postgres and SQLite (>= 3.23 for the boolean literal).
const CREATE_ONE_OPEN_SESSION_INDEX: &str = "CREATE UNIQUE INDEX ux_sessions_one_open_per_game \
     ON sessions (game_id) WHERE is_complete = false";

const CREATE_STANDINGS_VIEW: &str = "CREATE VIEW game_standings AS
SELECT
    gp.game_id AS game_id,
    gp.id AS game_player_id,
    gp.player_name AS player_name,
    gp.user_id AS user_id,
    gp.player_order AS player_order,
    COALESCE(SUM(CASE WHEN s.is_complete THEN sc.tricks_won ELSE 0 END), 0) AS total_tricks,
    COUNT(DISTINCT CASE WHEN s.is_complete THEN sc.session_id END) AS sessions_played
FROM game_players gp
LEFT JOIN scores sc ON sc.game_player_id = gp.id
LEFT JOIN sessions s ON s.id = sc.session_id
GROUP BY gp.game_id, gp.id, gp.player_name, gp.user_id, gp.player_order";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // profiles
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Profiles::FirstName).string().not_null())
                    .col(
                        ColumnDef::new(Profiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Games::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Games::Name).string().not_null())
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Games::CreatedBy).string().null())
                    .to_owned(),
            )
            .await?;

        // game_players
        manager
            .create_table(
                Table::create()
                    .table(GamePlayers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GamePlayers::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GamePlayers::GameId).string().not_null())
                    .col(ColumnDef::new(GamePlayers::UserId).string().null())
                    .col(ColumnDef::new(GamePlayers::PlayerName).string().not_null())
                    .col(
                        ColumnDef::new(GamePlayers::PlayerOrder)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GamePlayers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_players_game_id")
                            .from(GamePlayers::Table, GamePlayers::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_game_players_game_order")
                    .table(GamePlayers::Table)
                    .col(GamePlayers::GameId)
                    .col(GamePlayers::PlayerOrder)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_game_players_user_id")
                    .table(GamePlayers::Table)
                    .col(GamePlayers::UserId)
                    .to_owned(),
            )
            .await?;

        // sessions
        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sessions::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sessions::GameId).string().not_null())
                    .col(
                        ColumnDef::new(Sessions::PlayedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sessions::IsComplete)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Sessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessions_game_id")
                            .from(Sessions::Table, Sessions::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_sessions_game_id")
                    .table(Sessions::Table)
                    .col(Sessions::GameId)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(CREATE_ONE_OPEN_SESSION_INDEX)
            .await?;

        // scores
        manager
            .create_table(
                Table::create()
                    .table(Scores::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Scores::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Scores::SessionId).string().not_null())
                    .col(ColumnDef::new(Scores::GamePlayerId).string().not_null())
                    .col(
                        ColumnDef::new(Scores::RoundNumber)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Scores::TricksWon)
                            .integer()
                            .not_null()
                            .check(Expr::col(Scores::TricksWon).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Scores::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Scores::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scores_session_id")
                            .from(Scores::Table, Scores::SessionId)
                            .to(Sessions::Table, Sessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scores_game_player_id")
                            .from(Scores::Table, Scores::GamePlayerId)
                            .to(GamePlayers::Table, GamePlayers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Conflict target for score upserts.
        manager
            .create_index(
                Index::create()
                    .name("ux_scores_session_player_round")
                    .table(Scores::Table)
                    .col(Scores::SessionId)
                    .col(Scores::GamePlayerId)
                    .col(Scores::RoundNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_scores_game_player_id")
                    .table(Scores::Table)
                    .col(Scores::GamePlayerId)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(CREATE_STANDINGS_VIEW)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order; the view depends on every table below
        manager
            .get_connection()
            .execute_unprepared("DROP VIEW IF EXISTS game_standings")
            .await?;

        manager
            .drop_table(Table::drop().table(Scores::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sessions::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(GamePlayers::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
