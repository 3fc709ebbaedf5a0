use sqlx::SqlitePool;

/// Tables the engine owns (`positions`, `encounters`, `interest_decisions`)
/// plus the read-only collaborator tables (`profiles`, `tags`) it consumes.
/// The encounter key is normalized so `{a,b}` and `{b,a}` share one row.
const SCHEMA_STATEMENTS: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS positions (
  user_id     TEXT PRIMARY KEY,
  latitude    REAL NOT NULL,
  longitude   REAL NOT NULL,
  observed_at INTEGER NOT NULL
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS encounters (
  user_a TEXT NOT NULL,
  user_b TEXT NOT NULL,
  count  INTEGER NOT NULL DEFAULT 0,
  PRIMARY KEY (user_a, user_b),
  CHECK (user_a < user_b)
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS interest_decisions (
  id_from     TEXT NOT NULL,
  id_to       TEXT NOT NULL,
  disposition TEXT NOT NULL CHECK (disposition IN ('interested', 'not_interested')),
  created_at  INTEGER NOT NULL,
  PRIMARY KEY (id_from, id_to)
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS tags (
  user_id TEXT NOT NULL,
  tag     TEXT NOT NULL,
  PRIMARY KEY (user_id, tag)
)
"#,
    r#"
CREATE INDEX IF NOT EXISTS idx_tags_tag ON tags (tag)
"#,
    r#"
CREATE TABLE IF NOT EXISTS profiles (
  user_id TEXT PRIMARY KEY,
  name    TEXT NOT NULL,
  age     INTEGER NOT NULL,
  bio     TEXT NOT NULL DEFAULT '',
  pfp     TEXT NOT NULL DEFAULT ''
)
"#,
];

pub async fn init(pool: &SqlitePool) -> sqlx::Result<()> {
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
