use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppError;
use crate::models::ProfileRow;
use crate::services::chat_service;
use crate::web::state::AppState;

pub async fn chat_peers_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ProfileRow>>, AppError> {
    let peers = chat_service::chat_peers(&state.pool, &user_id).await?;
    Ok(Json(peers))
}
