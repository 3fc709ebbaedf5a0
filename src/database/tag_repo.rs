use sqlx::SqlitePool;

// rowid order is the tag's insertion order; the matcher depends on it for a
// deterministic candidate discovery order.
const SQL_TAGS_FOR_USER: &str = r#"
SELECT tag
FROM tags
WHERE user_id = ?1
ORDER BY rowid
"#;

const SQL_HOLDERS_OF_TAG: &str = r#"
SELECT user_id
FROM tags
WHERE tag = ?1 AND user_id != ?2
ORDER BY user_id
"#;

pub async fn tags_for_user(pool: &SqlitePool, user_id: &str) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(SQL_TAGS_FOR_USER)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

/// Posting list for one tag, excluding the querying user.
pub async fn holders_of_tag(
    pool: &SqlitePool,
    tag: &str,
    exclude_user_id: &str,
) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(SQL_HOLDERS_OF_TAG)
        .bind(tag)
        .bind(exclude_user_id)
        .fetch_all(pool)
        .await
}
