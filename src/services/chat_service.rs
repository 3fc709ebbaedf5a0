use sqlx::SqlitePool;

use crate::database::interest_repo;
use crate::error::AppError;
use crate::models::ProfileRow;
use crate::services::encounter_service::require_id;

/// Profiles of every user `p` with `user_id -> p` and `p -> user_id` both
/// recorded as interested. Pure Interest Ledger query, independent of the
/// ranking pipeline.
pub async fn chat_peers(pool: &SqlitePool, user_id: &str) -> Result<Vec<ProfileRow>, AppError> {
    require_id(user_id)?;
    Ok(interest_repo::chat_peers(pool, user_id).await?)
}
