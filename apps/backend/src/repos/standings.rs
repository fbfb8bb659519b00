//! Standings as computed by the `game_standings` view.

use sea_orm::ConnectionTrait;

use crate::adapters::standings_sea as standings_adapter;
use crate::domain::model::Standing;
use crate::entities::game_standings;
use crate::errors::domain::DomainError;
use crate::repos::narrow;

/// View rows for a game, in seat order.
pub async fn find_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Vec<Standing>, DomainError> {
    let rows = standings_adapter::find_by_game(conn, game_id).await?;
    rows.into_iter().map(Standing::try_from).collect()
}

pub async fn find_by_game_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_player_id: &str,
) -> Result<Option<Standing>, DomainError> {
    standings_adapter::find_by_game_player(conn, game_player_id)
        .await?
        .map(Standing::try_from)
        .transpose()
}

impl TryFrom<game_standings::Model> for Standing {
    type Error = DomainError;

    fn try_from(row: game_standings::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            total_tricks: narrow(row.total_tricks, "total_tricks")?,
            sessions_played: narrow(row.sessions_played, "sessions_played")?,
            game_id: row.game_id,
            game_player_id: row.game_player_id,
            player_name: row.player_name,
            user_id: row.user_id,
        })
    }
}
