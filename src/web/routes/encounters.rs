use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::AppError;
use crate::services::encounter_service;
use crate::web::state::AppState;

#[derive(Debug, Serialize)]
pub struct TotalEncountersResponse {
    pub user_id: String,
    pub total: i64,
}

pub async fn total_encounters_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<TotalEncountersResponse>, AppError> {
    let total = encounter_service::total_encounters(&state.pool, &user_id).await?;
    Ok(Json(TotalEncountersResponse { user_id, total }))
}
