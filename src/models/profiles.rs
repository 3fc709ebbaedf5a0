use serde::Serialize;

/// Profile records are owned by the profile collaborator; the engine only
/// reads them to materialize ranked/peer lists.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProfileRow {
    pub user_id: String,
    pub name: String,
    pub age: i64,
    pub bio: String,
    pub pfp: String,
}
