use crate::models::profile::SeekerProfileRow;

/// Recommendations are only shown once the profile crosses this.
pub const SUFFICIENT_THRESHOLD: u8 = 40;

fn has_text(field: &Option<String>) -> bool {
    field.as_deref().map(|s| !s.trim().is_empty()).unwrap_or(false)
}

/// Percentage of the 9 profile fields that are filled in, rounded.
pub fn profile_completeness(profile: &SeekerProfileRow) -> u8 {
    let checks = [
        has_text(&profile.skills),
        profile.years_of_experience.map(|y| y > 0.0).unwrap_or(false),
        has_text(&profile.education_level),
        has_text(&profile.current_state),
        has_text(&profile.current_city),
        has_text(&profile.job_status),
        profile.salary_expectation_min.map(|v| v > 0).unwrap_or(false),
        profile.salary_expectation_max.map(|v| v > 0).unwrap_or(false),
        has_text(&profile.bio),
    ];
    let filled = checks.iter().filter(|c| **c).count();
    ((filled as f64 / checks.len() as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn empty_profile() -> SeekerProfileRow {
        SeekerProfileRow {
            user_id: Uuid::new_v4(),
            first_name: "Ngozi".to_string(),
            last_name: "Okafor".to_string(),
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
    fn test_empty_profile_is_zero() {
        assert_eq!(profile_completeness(&empty_profile()), 0);
    }

    #[test]
    fn test_skills_only_is_eleven_percent() {
        let mut profile = empty_profile();
        profile.skills = Some("php".to_string());
        assert_eq!(profile_completeness(&profile), 11);
    }

    #[test]
    fn test_full_profile_is_hundred() {
        let mut profile = empty_profile();
        profile.skills = Some("php".to_string());
        profile.years_of_experience = Some(4.0);
        profile.education_level = Some("bsc".to_string());
        profile.current_state = Some("Lagos".to_string());
        profile.current_city = Some("Ikeja".to_string());
        profile.job_status = Some("actively_looking".to_string());
        profile.salary_expectation_min = Some(200_000);
        profile.salary_expectation_max = Some(400_000);
        profile.bio = Some("Backend developer".to_string());
        assert_eq!(profile_completeness(&profile), 100);
    }

    #[test]
    fn test_zero_years_and_blank_text_do_not_count() {
        let mut profile = empty_profile();
        profile.years_of_experience = Some(0.0);
        profile.bio = Some("   ".to_string());
        profile.salary_expectation_min = Some(0);
        assert_eq!(profile_completeness(&profile), 0);
    }

    #[test]
    fn test_four_fields_crosses_threshold() {
        let mut profile = empty_profile();
        profile.skills = Some("php".to_string());
        profile.education_level = Some("bsc".to_string());
        profile.current_state = Some("Lagos".to_string());
        profile.current_city = Some("Ikeja".to_string());
        // round(4/9 * 100) = 44
        assert_eq!(profile_completeness(&profile), 44);
        assert!(profile_completeness(&profile) >= SUFFICIENT_THRESHOLD);
    }
}
