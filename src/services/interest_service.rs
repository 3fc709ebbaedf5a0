use sqlx::SqlitePool;

use crate::database::interest_repo;
use crate::error::AppError;
use crate::models::Disposition;
use crate::services::encounter_service::require_id;

/// Records one interested/not-interested decision. Idempotent: if any
/// decision already exists for this ordered pair the call succeeds without
/// writing a second row.
pub async fn record_decision(
    pool: &SqlitePool,
    from: &str,
    to: &str,
    disposition: Disposition,
) -> Result<(), AppError> {
    require_id(from)?;
    require_id(to)?;
    Ok(interest_repo::record_decision(pool, from, to, disposition).await?)
}
