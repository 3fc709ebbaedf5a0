/// Latest known position of one user. One row per user; `observed_at` is
/// unix seconds stamped by the storage layer and never goes backwards.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PositionRow {
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub observed_at: i64,
}
