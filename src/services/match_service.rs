use std::collections::{HashMap, HashSet};

use sqlx::SqlitePool;
use tracing::warn;

use crate::config::EngineConfig;
use crate::database::{encounter_repo, interest_repo, profile_repo, tag_repo};
use crate::error::AppError;
use crate::models::ProfileRow;
use crate::services::encounter_service::require_id;

/// One match candidate: shares at least one tag with the requester and has
/// not been decided upon yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub user_id: String,
    pub shared_tags: i64,
}

/// Inverted-index join over shared tags. The requester's tags are scanned
/// in stored order and each posting list is ordered by user id, so the
/// output order (a candidate's first appearance) is deterministic; the
/// ranker's stable sort relies on that for tie-breaking. The suppression
/// set is applied before accumulation, so decided users never accumulate.
pub async fn find_candidates(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<Candidate>, AppError> {
    require_id(user_id)?;

    let tags = tag_repo::tags_for_user(pool, user_id).await?;
    if tags.is_empty() {
        return Ok(Vec::new());
    }

    let excluded: HashSet<String> = interest_repo::excluded_candidates(pool, user_id)
        .await?
        .into_iter()
        .collect();

    let mut candidates: Vec<Candidate> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for tag in &tags {
        for holder in tag_repo::holders_of_tag(pool, tag, user_id).await? {
            if excluded.contains(&holder) {
                continue;
            }
            match index.get(&holder) {
                Some(&i) => candidates[i].shared_tags += 1,
                None => {
                    index.insert(holder.clone(), candidates.len());
                    candidates.push(Candidate {
                        user_id: holder,
                        shared_tags: 1,
                    });
                }
            }
        }
    }

    Ok(candidates)
}

/// Scores every candidate, ranks descending and returns profiles for the
/// top entries. The encounter ratio is the fraction of *all* the
/// requester's encounters spent with this candidate, zero when the
/// requester has none. The raw tag count and the 0..1 ratio are combined
/// on deliberately mismatched scales; the weights live in config so the
/// policy can change without a redesign.
pub async fn rank(
    pool: &SqlitePool,
    engine: &EngineConfig,
    user_id: &str,
) -> Result<Vec<ProfileRow>, AppError> {
    let candidates = find_candidates(pool, user_id).await?;
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let total = encounter_repo::total_for(pool, user_id).await?;

    let mut scored: Vec<(Candidate, f64)> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let ratio = if total > 0 {
            let met = encounter_repo::count_for(pool, user_id, &candidate.user_id).await?;
            met as f64 / total as f64
        } else {
            0.0
        };
        let score = engine.tag_weight * candidate.shared_tags as f64 + engine.encounter_weight * ratio;
        scored.push((candidate, score));
    }

    // Stable sort: equal scores keep their discovery order.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut profiles = Vec::new();
    for (candidate, _) in scored.into_iter().take(engine.max_matches) {
        match profile_repo::find(pool, &candidate.user_id).await {
            Ok(Some(profile)) => profiles.push(profile),
            Ok(None) => {}
            Err(e) => {
                warn!(candidate = %candidate.user_id, error = %e, "profile fetch failed, skipping candidate");
            }
        }
    }

    Ok(profiles)
}
