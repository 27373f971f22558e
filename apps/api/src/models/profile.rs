use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Job seeker profile. Every optional field may legitimately be empty;
/// scoring degrades rather than erroring when a field is missing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SeekerProfileRow {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Raw comma-separated skills text as entered by the user.
    pub skills: Option<String>,
    pub years_of_experience: Option<f64>,
    pub education_level: Option<String>,
    pub current_state: Option<String>,
    pub current_city: Option<String>,
    pub job_status: Option<String>,
    pub salary_expectation_min: Option<i64>,
    pub salary_expectation_max: Option<i64>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SeekerProfileRow {
    /// Splits the raw skills string into a lower-cased, trimmed,
    /// de-duplicated list. Empty segments are dropped.
    pub fn normalized_skills(&self) -> Vec<String> {
        let mut skills: Vec<String> = Vec::new();
        if let Some(raw) = &self.skills {
            for part in raw.split(',') {
                let skill = part.trim().to_lowercase();
                if !skill.is_empty() && !skills.contains(&skill) {
                    skills.push(skill);
                }
            }
        }
        skills
    }
}

/// One past application, reduced to the preference signals we keep.
/// Part of the engine's input contract; not yet weighted by any strategy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationHistoryEntry {
    pub category: Option<String>,
    pub employment_type: Option<String>,
    pub location_type: Option<String>,
}
