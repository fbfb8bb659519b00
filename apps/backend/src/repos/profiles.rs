use sea_orm::ConnectionTrait;

use crate::adapters::profiles_sea as profiles_adapter;
use crate::errors::domain::DomainError;

/// First name on the user's profile, if one was set up.
pub async fn first_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Option<String>, DomainError> {
    let profile = profiles_adapter::find_by_id(conn, user_id).await?;
    Ok(profile.map(|p| p.first_name))
}
