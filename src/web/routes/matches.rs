use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppError;
use crate::models::ProfileRow;
use crate::services::match_service;
use crate::web::state::AppState;

pub async fn matches_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ProfileRow>>, AppError> {
    let profiles = match_service::rank(&state.pool, &state.engine, &user_id).await?;
    Ok(Json(profiles))
}
