use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::EngineConfig;

/// Shared per-request state: the storage pool and the engine policy knobs,
/// owned by main and handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub engine: Arc<EngineConfig>,
}
