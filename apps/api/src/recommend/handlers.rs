use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::recommend::completeness::{profile_completeness, SUFFICIENT_THRESHOLD};
use crate::recommend::engine::ScoredJob;
use crate::state::AppState;
use crate::store::profiles::{fetch_excluded_job_ids, fetch_profile, fetch_recent_history};

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    pub recommendations: Vec<ScoredJob>,
    pub profile_completeness: u8,
    pub total_matches: usize,
    pub has_sufficient_profile: bool,
}

/// GET /api/v1/recommendations
///
/// 404 when the seeker has no profile yet. An incomplete profile (below
/// the completeness threshold) gets an empty list and a flag telling the
/// frontend to prompt for more detail instead of an error.
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let profile = fetch_profile(&state.db, params.user_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("Complete your job seeker profile to get recommendations".to_string())
        })?;

    let completeness = profile_completeness(&profile);
    if completeness < SUFFICIENT_THRESHOLD {
        return Ok(Json(RecommendationsResponse {
            success: true,
            recommendations: Vec::new(),
            profile_completeness: completeness,
            total_matches: 0,
            has_sufficient_profile: false,
        }));
    }

    let skills = profile.normalized_skills();
    let history = fetch_recent_history(&state.db, params.user_id).await?;
    let excluded = fetch_excluded_job_ids(&state.db, params.user_id).await?;

    let recommendations = state
        .engine
        .recommend(&profile, &skills, &history, &excluded)
        .await;

    Ok(Json(RecommendationsResponse {
        success: true,
        total_matches: recommendations.len(),
        recommendations,
        profile_completeness: completeness,
        has_sufficient_profile: true,
    }))
}
