use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A job posting as stored. The engine never mutates these rows.
///
/// `experience_level` and `education_level` are stored as free text and
/// parsed into the closed enums below at scoring time; unparseable values
/// simply never earn the corresponding bonus.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: i64,
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    pub category: Option<String>,
    pub employment_type: Option<String>,
    pub location_type: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_period: Option<String>,
    pub experience_level: Option<String>,
    pub education_level: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub is_urgent: bool,
    pub is_remote_friendly: bool,
    pub created_at: DateTime<Utc>,
    pub application_deadline: Option<DateTime<Utc>>,
    pub views_count: i64,
    pub applications_count: i64,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
}

/// Candidate seniority band derived from years of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceBand {
    Entry,
    Mid,
    Senior,
    Executive,
}

impl ExperienceBand {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "entry" => Some(ExperienceBand::Entry),
            "mid" => Some(ExperienceBand::Mid),
            "senior" => Some(ExperienceBand::Senior),
            "executive" => Some(ExperienceBand::Executive),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceBand::Entry => "entry",
            ExperienceBand::Mid => "mid",
            ExperienceBand::Senior => "senior",
            ExperienceBand::Executive => "executive",
        }
    }
}

/// Nigerian qualification ladder, ordered. `rank` drives the
/// meets-or-exceeds comparison against a job's required level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    Ssce,
    Ond,
    Hnd,
    Bsc,
    Msc,
    Phd,
}

impl EducationLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ssce" => Some(EducationLevel::Ssce),
            "ond" => Some(EducationLevel::Ond),
            "hnd" => Some(EducationLevel::Hnd),
            "bsc" => Some(EducationLevel::Bsc),
            "msc" => Some(EducationLevel::Msc),
            "phd" => Some(EducationLevel::Phd),
            _ => None,
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            EducationLevel::Ssce => 1,
            EducationLevel::Ond => 2,
            EducationLevel::Hnd => 3,
            EducationLevel::Bsc => 4,
            EducationLevel::Msc => 5,
            EducationLevel::Phd => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EducationLevel::Ssce => "ssce",
            EducationLevel::Ond => "ond",
            EducationLevel::Hnd => "hnd",
            EducationLevel::Bsc => "bsc",
            EducationLevel::Msc => "msc",
            EducationLevel::Phd => "phd",
        }
    }
}
