use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{ApplicationHistoryEntry, SeekerProfileRow};

/// Fetches the seeker profile for a user, if one exists.
pub async fn fetch_profile(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<SeekerProfileRow>, AppError> {
    let profile = sqlx::query_as::<_, SeekerProfileRow>(
        "SELECT * FROM job_seeker_profiles WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(profile)
}

/// The 10 most recent applications, reduced to preference tuples.
pub async fn fetch_recent_history(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<ApplicationHistoryEntry>, AppError> {
    let history = sqlx::query_as::<_, ApplicationHistoryEntry>(
        r#"
        SELECT j.category, j.employment_type, j.location_type
        FROM applications a
        JOIN jobs j ON j.id = a.job_id
        WHERE a.user_id = $1
        ORDER BY a.created_at DESC
        LIMIT 10
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(history)
}

/// Jobs the user has already applied to or saved. These are never
/// recommended again.
pub async fn fetch_excluded_job_ids(pool: &PgPool, user_id: Uuid) -> Result<Vec<i64>, AppError> {
    let ids = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT job_id FROM applications WHERE user_id = $1
        UNION
        SELECT job_id FROM saved_jobs WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(ids)
}
