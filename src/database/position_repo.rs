use sqlx::SqlitePool;

use crate::models::PositionRow;

// Storage time stamps the record; MAX keeps observed_at monotonic even if
// concurrent upserts for the same user land out of order.
const SQL_UPSERT_POSITION: &str = r#"
INSERT INTO positions (user_id, latitude, longitude, observed_at)
VALUES (?1, ?2, ?3, CAST(strftime('%s', 'now') AS INTEGER))
ON CONFLICT(user_id) DO UPDATE SET
  latitude = excluded.latitude,
  longitude = excluded.longitude,
  observed_at = MAX(positions.observed_at, excluded.observed_at)
"#;

// Freshness is measured against each candidate's own timestamp, window
// inclusive.
const SQL_FRESH_POSITIONS: &str = r#"
SELECT user_id, latitude, longitude, observed_at
FROM positions
WHERE user_id != ?1
  AND observed_at >= CAST(strftime('%s', 'now') AS INTEGER) - ?2
ORDER BY user_id
"#;

pub async fn upsert(
    pool: &SqlitePool,
    user_id: &str,
    latitude: f64,
    longitude: f64,
) -> sqlx::Result<()> {
    sqlx::query(SQL_UPSERT_POSITION)
        .bind(user_id)
        .bind(latitude)
        .bind(longitude)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn fresh_positions(
    pool: &SqlitePool,
    exclude_user_id: &str,
    max_age_secs: i64,
) -> sqlx::Result<Vec<PositionRow>> {
    sqlx::query_as::<_, PositionRow>(SQL_FRESH_POSITIONS)
        .bind(exclude_user_id)
        .bind(max_age_secs)
        .fetch_all(pool)
        .await
}
