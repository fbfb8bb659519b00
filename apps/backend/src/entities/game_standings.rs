//! Read-only mapping of the `game_standings` view.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_standings")]
pub struct Model {
    #[sea_orm(column_name = "game_id")]
    pub game_id: String,
    #[sea_orm(primary_key, auto_increment = false, column_name = "game_player_id")]
    pub game_player_id: String,
    #[sea_orm(column_name = "player_name")]
    pub player_name: String,
    #[sea_orm(column_name = "user_id")]
    pub user_id: Option<String>,
    #[sea_orm(column_name = "player_order", column_type = "SmallInteger")]
    pub player_order: i16,
    #[sea_orm(column_name = "total_tricks")]
    pub total_tricks: i64,
    #[sea_orm(column_name = "sessions_played")]
    pub sessions_played: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
