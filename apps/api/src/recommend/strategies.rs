//! Retrieval strategy builders. Each strategy is a pure function from
//! profile inputs to a `JobQuery`; a strategy whose inputs are missing
//! returns `None` and is skipped by the engine.

use crate::models::job::EducationLevel;
use crate::models::profile::SeekerProfileRow;
use crate::recommend::scoring::experience_band;
use crate::store::{JobFilter, JobOrder, JobQuery};

pub const SKILLS_LIMIT: i64 = 20;
pub const LOCATION_LIMIT: i64 = 15;
pub const BACKGROUND_LIMIT: i64 = 15;
pub const TRENDING_LIMIT: i64 = 10;

/// Flat scores assigned to jobs no earlier strategy touched.
pub const LOCATION_FLAT_SCORE: f64 = 25.0;
pub const BACKGROUND_FLAT_SCORE: f64 = 20.0;
pub const TRENDING_FLAT_SCORE: f64 = 15.0;

pub const LOCATION_REASON: &str = "Location preference";
pub const BACKGROUND_REASON: &str = "Experience & education match";
pub const TRENDING_REASON: &str = "Trending opportunity";

/// Strategy 1: text containment of any normalized skill.
pub fn skills_query(skills: &[String]) -> Option<JobQuery> {
    if skills.is_empty() {
        return None;
    }
    Some(JobQuery {
        filter: JobFilter::SkillsText {
            skills: skills.to_vec(),
        },
        order: JobOrder::Newest,
        limit: SKILLS_LIMIT,
    })
}

/// Strategy 2: same state or city, or remote-friendly. Needs a known state.
pub fn location_query(profile: &SeekerProfileRow) -> Option<JobQuery> {
    let state = profile.current_state.as_deref()?.trim();
    if state.is_empty() {
        return None;
    }
    Some(JobQuery {
        filter: JobFilter::Location {
            state: state.to_string(),
            city: profile
                .current_city
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        },
        order: JobOrder::Newest,
        limit: LOCATION_LIMIT,
    })
}

/// Strategy 3: education or experience band match. Skipped when neither
/// side of the candidate's background is known.
pub fn background_query(profile: &SeekerProfileRow) -> Option<JobQuery> {
    let education = profile
        .education_level
        .as_deref()
        .and_then(EducationLevel::parse);
    let experience = profile
        .years_of_experience
        .map(|years| experience_band(Some(years)));
    if education.is_none() && experience.is_none() {
        return None;
    }
    Some(JobQuery {
        filter: JobFilter::Background {
            education,
            experience,
        },
        order: JobOrder::Newest,
        limit: BACKGROUND_LIMIT,
    })
}

/// Strategy 4: most-viewed postings. Always runs, as the discovery floor.
pub fn trending_query() -> JobQuery {
    JobQuery {
        filter: JobFilter::Any,
        order: JobOrder::Trending,
        limit: TRENDING_LIMIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::ExperienceBand;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_profile() -> SeekerProfileRow {
        SeekerProfileRow {
            user_id: Uuid::new_v4(),
            first_name: "Tunde".to_string(),
            last_name: "Ade".to_string(),
            skills: None,
            years_of_experience: None,
            education_level: None,
            current_state: None,
            current_city: None,
            job_status: None,
            salary_expectation_min: None,
            salary_expectation_max: None,
            bio: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_skills_query_skipped_without_skills() {
        assert!(skills_query(&[]).is_none());
        let query = skills_query(&["php".to_string()]).unwrap();
        assert_eq!(query.limit, SKILLS_LIMIT);
        assert_eq!(query.order, JobOrder::Newest);
        assert_eq!(
            query.filter,
            JobFilter::SkillsText {
                skills: vec!["php".to_string()]
            }
        );
    }

    #[test]
    fn test_location_query_needs_state() {
        let mut profile = make_profile();
        assert!(location_query(&profile).is_none());
        profile.current_state = Some("  ".to_string());
        assert!(location_query(&profile).is_none());

        profile.current_state = Some("Lagos".to_string());
        profile.current_city = Some("Ikeja".to_string());
        let query = location_query(&profile).unwrap();
        assert_eq!(query.limit, LOCATION_LIMIT);
        assert_eq!(
            query.filter,
            JobFilter::Location {
                state: "Lagos".to_string(),
                city: Some("Ikeja".to_string()),
            }
        );
    }

    #[test]
    fn test_background_query_needs_either_side() {
        let mut profile = make_profile();
        assert!(background_query(&profile).is_none());

        profile.years_of_experience = Some(3.0);
        let query = background_query(&profile).unwrap();
        assert_eq!(
            query.filter,
            JobFilter::Background {
                education: None,
                experience: Some(ExperienceBand::Mid),
            }
        );

        profile.education_level = Some("hnd".to_string());
        let query = background_query(&profile).unwrap();
        assert_eq!(
            query.filter,
            JobFilter::Background {
                education: Some(crate::models::job::EducationLevel::Hnd),
                experience: Some(ExperienceBand::Mid),
            }
        );
    }

    #[test]
    fn test_unparseable_education_alone_skips_background() {
        let mut profile = make_profile();
        profile.education_level = Some("diploma-of-life".to_string());
        assert!(background_query(&profile).is_none());
    }

    #[test]
    fn test_trending_query_shape() {
        let query = trending_query();
        assert_eq!(query.filter, JobFilter::Any);
        assert_eq!(query.order, JobOrder::Trending);
        assert_eq!(query.limit, TRENDING_LIMIT);
    }
}
