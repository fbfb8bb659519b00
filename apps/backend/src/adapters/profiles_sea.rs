use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::entities::profiles;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Option<profiles::Model>, sea_orm::DbErr> {
    profiles::Entity::find()
        .filter(profiles::Column::Id.eq(user_id))
        .one(conn)
        .await
}
