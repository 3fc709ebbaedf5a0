use sqlx::SqlitePool;

use crate::models::ProfileRow;

const SQL_FIND_PROFILE: &str = r#"
SELECT user_id, name, age, bio, pfp
FROM profiles
WHERE user_id = ?1
"#;

pub async fn find(pool: &SqlitePool, user_id: &str) -> sqlx::Result<Option<ProfileRow>> {
    sqlx::query_as::<_, ProfileRow>(SQL_FIND_PROFILE)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}
