use sqlx::SqlitePool;

use crate::models::{Disposition, ProfileRow};

// Decisions are permanent: a second decision for the same ordered pair is a
// no-op regardless of its disposition.
const SQL_RECORD_DECISION: &str = r#"
INSERT INTO interest_decisions (id_from, id_to, disposition, created_at)
VALUES (?1, ?2, ?3, CAST(strftime('%s', 'now') AS INTEGER))
ON CONFLICT(id_from, id_to) DO NOTHING
"#;

const SQL_IS_MUTUAL_INTEREST: &str = r#"
SELECT EXISTS (
  SELECT 1 FROM interest_decisions
  WHERE id_from = ?1 AND id_to = ?2 AND disposition = 'interested'
) AND EXISTS (
  SELECT 1 FROM interest_decisions
  WHERE id_from = ?2 AND id_to = ?1 AND disposition = 'interested'
)
"#;

const SQL_EXCLUDED_CANDIDATES: &str = r#"
SELECT id_to
FROM interest_decisions
WHERE id_from = ?1
"#;

const SQL_CHAT_PEERS: &str = r#"
SELECT p.user_id, p.name, p.age, p.bio, p.pfp
FROM profiles p
JOIN interest_decisions outgoing
  ON outgoing.id_to = p.user_id
WHERE outgoing.id_from = ?1
  AND outgoing.disposition = 'interested'
  AND outgoing.id_to != ?1
  AND EXISTS (
    SELECT 1 FROM interest_decisions incoming
    WHERE incoming.id_from = outgoing.id_to
      AND incoming.id_to = ?1
      AND incoming.disposition = 'interested'
  )
ORDER BY p.user_id
"#;

pub async fn record_decision(
    pool: &SqlitePool,
    from: &str,
    to: &str,
    disposition: Disposition,
) -> sqlx::Result<()> {
    sqlx::query(SQL_RECORD_DECISION)
        .bind(from)
        .bind(to)
        .bind(disposition.as_str())
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn is_mutual_interest(pool: &SqlitePool, a: &str, b: &str) -> sqlx::Result<bool> {
    sqlx::query_scalar::<_, bool>(SQL_IS_MUTUAL_INTEREST)
        .bind(a)
        .bind(b)
        .fetch_one(pool)
        .await
}

/// Every id `user_id` has already decided upon, either disposition. This is
/// the suppression set for the matcher.
pub async fn excluded_candidates(pool: &SqlitePool, user_id: &str) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(SQL_EXCLUDED_CANDIDATES)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

/// Profiles of every user with mutual interest in `user_id`, the requester
/// excluded.
pub async fn chat_peers(pool: &SqlitePool, user_id: &str) -> sqlx::Result<Vec<ProfileRow>> {
    sqlx::query_as::<_, ProfileRow>(SQL_CHAT_PEERS)
        .bind(user_id)
        .fetch_all(pool)
        .await
}
