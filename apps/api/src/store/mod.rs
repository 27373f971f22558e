//! Job store boundary. Strategies describe what they want as a structured
//! `JobQuery`; only this layer knows how that turns into SQL.

pub mod profiles;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::job::{EducationLevel, ExperienceBand, JobRow};

/// Predicate half of a retrieval query. A closed enum so a strategy can
/// never smuggle raw SQL past this boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum JobFilter {
    /// Case-insensitive containment of any skill in title, requirements,
    /// or responsibilities.
    SkillsText { skills: Vec<String> },
    /// State/city fuzzy match, or remote-friendly postings.
    Location { state: String, city: Option<String> },
    /// Education exact-or-'any' match OR experience band exact-or-'any'
    /// match. At least one side is always present.
    Background {
        education: Option<EducationLevel>,
        experience: Option<ExperienceBand>,
    },
    /// No predicate beyond the implicit active/non-expired/non-excluded.
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOrder {
    Newest,
    Trending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobQuery {
    pub filter: JobFilter,
    pub order: JobOrder,
    pub limit: i64,
}

/// Read-only access to active job postings.
///
/// Every implementation must restrict results to `status = 'active'`
/// postings whose deadline has not passed, and must omit the excluded ids.
/// Held in the engine as `Arc<dyn JobStore>` so tests can swap in a stub.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn fetch_jobs(&self, query: &JobQuery, excluded: &[i64]) -> Result<Vec<JobRow>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres implementation
// ────────────────────────────────────────────────────────────────────────────

pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Applied to every retrieval. `$1` is always the excluded-id array.
const BASE_FILTER: &str = "status = 'active' \
     AND (application_deadline IS NULL OR application_deadline > NOW()) \
     AND NOT (id = ANY($1))";

fn order_clause(order: JobOrder) -> &'static str {
    match order {
        JobOrder::Newest => "created_at DESC",
        JobOrder::Trending => "views_count DESC, created_at DESC",
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn fetch_jobs(&self, query: &JobQuery, excluded: &[i64]) -> Result<Vec<JobRow>, AppError> {
        let order = order_clause(query.order);
        let rows = match &query.filter {
            JobFilter::SkillsText { skills } => {
                let patterns: Vec<String> = skills.iter().map(|s| format!("%{s}%")).collect();
                let sql = format!(
                    "SELECT * FROM jobs WHERE {BASE_FILTER} \
                     AND (title ILIKE ANY($2) \
                       OR requirements ILIKE ANY($2) \
                       OR responsibilities ILIKE ANY($2)) \
                     ORDER BY {order} LIMIT $3"
                );
                sqlx::query_as::<_, JobRow>(&sql)
                    .bind(excluded)
                    .bind(&patterns)
                    .bind(query.limit)
                    .fetch_all(&self.pool)
                    .await?
            }
            JobFilter::Location { state, city } => {
                let state_pattern = format!("%{state}%");
                let city_pattern = city.as_ref().map(|c| format!("%{c}%"));
                let sql = format!(
                    "SELECT * FROM jobs WHERE {BASE_FILTER} \
                     AND (is_remote_friendly \
                       OR state ILIKE $2 \
                       OR ($3::text IS NOT NULL AND city ILIKE $3)) \
                     ORDER BY {order} LIMIT $4"
                );
                sqlx::query_as::<_, JobRow>(&sql)
                    .bind(excluded)
                    .bind(&state_pattern)
                    .bind(&city_pattern)
                    .bind(query.limit)
                    .fetch_all(&self.pool)
                    .await?
            }
            JobFilter::Background {
                education,
                experience,
            } => {
                // An absent side binds an empty list, which matches nothing.
                let education_levels: Vec<String> = education
                    .map(|e| vec!["any".to_string(), e.as_str().to_string()])
                    .unwrap_or_default();
                let experience_levels: Vec<String> = experience
                    .map(|b| vec!["any".to_string(), b.as_str().to_string()])
                    .unwrap_or_default();
                let sql = format!(
                    "SELECT * FROM jobs WHERE {BASE_FILTER} \
                     AND (education_level = ANY($2) OR experience_level = ANY($3)) \
                     ORDER BY {order} LIMIT $4"
                );
                sqlx::query_as::<_, JobRow>(&sql)
                    .bind(excluded)
                    .bind(&education_levels)
                    .bind(&experience_levels)
                    .bind(query.limit)
                    .fetch_all(&self.pool)
                    .await?
            }
            JobFilter::Any => {
                let sql = format!(
                    "SELECT * FROM jobs WHERE {BASE_FILTER} ORDER BY {order} LIMIT $2"
                );
                sqlx::query_as::<_, JobRow>(&sql)
                    .bind(excluded)
                    .bind(query.limit)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(rows)
    }
}
