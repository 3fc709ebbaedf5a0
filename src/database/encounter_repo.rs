use sqlx::SqlitePool;

// Single-statement upsert so concurrent increments for the same pair never
// lose updates.
const SQL_INCREMENT_PAIR: &str = r#"
INSERT INTO encounters (user_a, user_b, count)
VALUES (?1, ?2, 1)
ON CONFLICT(user_a, user_b) DO UPDATE SET count = count + 1
RETURNING count
"#;

const SQL_TOTAL_FOR: &str = r#"
SELECT COALESCE(SUM(count), 0)
FROM encounters
WHERE user_a = ?1 OR user_b = ?1
"#;

const SQL_COUNT_FOR_PAIR: &str = r#"
SELECT count
FROM encounters
WHERE user_a = ?1 AND user_b = ?2
"#;

// Smaller id first, so either query order hits the same row.
fn normalize<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Records one co-presence detection for the unordered pair `{a, b}` and
/// returns the count after the increment. Callers keep self-pairs out of
/// the sweep; a self-pair here would only die on the table's CHECK.
pub async fn increment(pool: &SqlitePool, a: &str, b: &str) -> sqlx::Result<i64> {
    debug_assert_ne!(a, b, "encounter pair requires two distinct users");
    let (lo, hi) = normalize(a, b);
    sqlx::query_scalar::<_, i64>(SQL_INCREMENT_PAIR)
        .bind(lo)
        .bind(hi)
        .fetch_one(pool)
        .await
}

/// Sum of all encounter counts involving `user_id`, zero when there are none.
pub async fn total_for(pool: &SqlitePool, user_id: &str) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_TOTAL_FOR)
        .bind(user_id)
        .fetch_one(pool)
        .await
}

/// Count for one specific unordered pair, zero when absent.
pub async fn count_for(pool: &SqlitePool, a: &str, b: &str) -> sqlx::Result<i64> {
    let (lo, hi) = normalize(a, b);
    let count = sqlx::query_scalar::<_, i64>(SQL_COUNT_FOR_PAIR)
        .bind(lo)
        .bind(hi)
        .fetch_optional(pool)
        .await?;
    Ok(count.unwrap_or(0))
}
