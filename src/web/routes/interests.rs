use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::Disposition;
use crate::services::interest_service;
use crate::web::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct InterestBody {
    pub from: String,
    pub to: String,
    pub disposition: Disposition,
}

pub async fn record_interest_handler(
    State(state): State<AppState>,
    Json(body): Json<InterestBody>,
) -> Result<Json<InterestBody>, AppError> {
    interest_service::record_decision(&state.pool, &body.from, &body.to, body.disposition).await?;
    Ok(Json(body))
}
