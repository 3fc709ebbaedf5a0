use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::services::encounter_service;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdatePositionBody {
    pub user_id: String,
    pub lat: f64,
    pub long: f64,
}

#[derive(Debug, Serialize)]
pub struct UpdatePositionResponse {
    pub user_id: String,
    pub encounters: usize,
}

pub async fn update_position_handler(
    State(state): State<AppState>,
    Json(body): Json<UpdatePositionBody>,
) -> Result<Json<UpdatePositionResponse>, AppError> {
    let encounters = encounter_service::record_position(
        &state.pool,
        &state.engine,
        &body.user_id,
        body.lat,
        body.long,
    )
    .await?;

    Ok(Json(UpdatePositionResponse {
        user_id: body.user_id,
        encounters,
    }))
}
