use sqlx::SqlitePool;
use tracing::debug;

use crate::config::EngineConfig;
use crate::database::{encounter_repo, position_repo};
use crate::error::AppError;

/// Records the caller's position, then sweeps every other fresh position
/// for co-presence and bumps the pair counter for each hit. Returns the
/// number of encounters detected by this update.
///
/// The sweep runs inline on every update rather than as a periodic batch:
/// presence is only as fresh as the last ping from each side. If the sweep
/// fails partway the position write stands and already-applied increments
/// are kept.
pub async fn record_position(
    pool: &SqlitePool,
    engine: &EngineConfig,
    user_id: &str,
    lat: f64,
    long: f64,
) -> Result<usize, AppError> {
    validate(user_id, lat, long)?;

    position_repo::upsert(pool, user_id, lat, long).await?;

    let nearby = position_repo::fresh_positions(pool, user_id, engine.freshness_window_secs).await?;

    let mut detected = 0;
    for other in nearby {
        let distance_m = haversine_m(lat, long, other.latitude, other.longitude);
        if distance_m <= engine.proximity_radius_m {
            let count = encounter_repo::increment(pool, user_id, &other.user_id).await?;
            debug!(user_id, other = %other.user_id, distance_m, count, "encounter recorded");
            detected += 1;
        }
    }

    Ok(detected)
}

pub async fn total_encounters(pool: &SqlitePool, user_id: &str) -> Result<i64, AppError> {
    require_id(user_id)?;
    Ok(encounter_repo::total_for(pool, user_id).await?)
}

fn validate(user_id: &str, lat: f64, long: f64) -> Result<(), AppError> {
    require_id(user_id)?;
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(AppError::InvalidInput(format!(
            "latitude out of range: {lat}"
        )));
    }
    if !long.is_finite() || !(-180.0..=180.0).contains(&long) {
        return Err(AppError::InvalidInput(format!(
            "longitude out of range: {long}"
        )));
    }
    Ok(())
}

pub(crate) fn require_id(user_id: &str) -> Result<(), AppError> {
    if user_id.trim().is_empty() {
        return Err(AppError::InvalidInput("user_id is required".to_string()));
    }
    Ok(())
}

/// Great-circle distance in meters.
pub fn haversine_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let to_rad = |deg: f64| deg.to_radians();
    let dlat = to_rad(lat2 - lat1);
    let dlon = to_rad(lon2 - lon1);
    let a = (dlat / 2.0).sin().powi(2)
        + to_rad(lat1).cos() * to_rad(lat2).cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    6_371_000.0 * c
}
