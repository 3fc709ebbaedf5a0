use std::{env, fmt::Display, str::FromStr};

use tracing::info;

/// Policy knobs for the encounter/matching engine. The radius and freshness
/// window define co-presence; the weights and cap drive the ranker.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub proximity_radius_m: f64,
    pub freshness_window_secs: i64,
    pub tag_weight: f64,
    pub encounter_weight: f64,
    pub max_matches: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            proximity_radius_m: 50.0,
            freshness_window_secs: 30,
            tag_weight: 0.5,
            encounter_weight: 0.5,
            max_matches: 10,
        }
    }
}

pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub request_timeout_secs: u64,
    pub engine: EngineConfig,
}

impl Config {
    pub fn load() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: try_load("PORT", "8080"),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            request_timeout_secs: try_load("REQUEST_TIMEOUT_SECS", "10"),
            engine: EngineConfig {
                proximity_radius_m: try_load("PROXIMITY_RADIUS_M", "50"),
                freshness_window_secs: try_load("FRESHNESS_WINDOW_SECS", "30"),
                tag_weight: try_load("TAG_WEIGHT", "0.5"),
                encounter_weight: try_load("ENCOUNTER_WEIGHT", "0.5"),
                max_matches: try_load("MAX_MATCHES", "10"),
            },
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .unwrap_or_else(|e| panic!("invalid {key} value {raw}: {e}"))
}
