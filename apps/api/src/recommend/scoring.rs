//! Pure scoring functions for the skills strategy and the level buckets
//! shared with the background strategy.

use crate::models::job::{EducationLevel, ExperienceBand, JobRow};
use crate::models::profile::SeekerProfileRow;

/// Ceiling of the proportional skills component.
pub const SKILLS_WEIGHT: f64 = 40.0;
pub const EXPERIENCE_BONUS: f64 = 20.0;
pub const EDUCATION_BONUS: f64 = 15.0;
pub const LOCATION_BONUS: f64 = 15.0;
pub const SALARY_BONUS: f64 = 10.0;
/// A posting within 80% of the expected minimum still earns the salary bonus.
pub const SALARY_TOLERANCE: f64 = 0.8;

/// Buckets years of experience into a seniority band.
/// Missing years default to entry level.
pub fn experience_band(years: Option<f64>) -> ExperienceBand {
    let years = years.unwrap_or(0.0);
    if years < 2.0 {
        ExperienceBand::Entry
    } else if years < 5.0 {
        ExperienceBand::Mid
    } else if years < 10.0 {
        ExperienceBand::Senior
    } else {
        ExperienceBand::Executive
    }
}

/// True when the candidate's qualification meets or exceeds the job's
/// required level. A job requiring 'any' accepts everyone; a level we
/// cannot parse on either side earns nothing.
pub fn education_meets(candidate: Option<EducationLevel>, required: &str) -> bool {
    if required.trim().eq_ignore_ascii_case("any") {
        return true;
    }
    match (candidate, EducationLevel::parse(required)) {
        (Some(c), Some(r)) => c.rank() >= r.rank(),
        _ => false,
    }
}

/// Composite score for a job retrieved by the skills strategy: the
/// proportional skills component plus the four additive bonuses.
///
/// Reasons are appended in fixed order (skills, experience, education,
/// location, salary) and joined for display later. The returned score is
/// fractional; rounding happens once, after merging.
pub fn score_skills_match(
    job: &JobRow,
    profile: &SeekerProfileRow,
    skills: &[String],
) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    // Recompute which skills actually appear in the posting text; the
    // retrieval predicate only guarantees at least one hit somewhere.
    let haystack = format!(
        "{} {} {}",
        job.requirements.as_deref().unwrap_or(""),
        job.responsibilities.as_deref().unwrap_or(""),
        job.title,
    )
    .to_lowercase();

    if !skills.is_empty() {
        let matched = skills
            .iter()
            .filter(|skill| haystack.contains(skill.as_str()))
            .count();
        if matched > 0 {
            score += (SKILLS_WEIGHT * matched as f64 / skills.len() as f64).min(SKILLS_WEIGHT);
            reasons.push(format!("Matches {matched} of your {} skills", skills.len()));
        }
    }

    let band = experience_band(profile.years_of_experience);
    if let Some(level) = job.experience_level.as_deref() {
        if level.trim().eq_ignore_ascii_case("any") || ExperienceBand::parse(level) == Some(band) {
            score += EXPERIENCE_BONUS;
            reasons.push("Experience level fit".to_string());
        }
    }

    let candidate_education = profile
        .education_level
        .as_deref()
        .and_then(EducationLevel::parse);
    if let Some(required) = job.education_level.as_deref() {
        if education_meets(candidate_education, required) {
            score += EDUCATION_BONUS;
            reasons.push("Meets the education requirement".to_string());
        }
    }

    let job_location = format!(
        "{} {}",
        job.state.as_deref().unwrap_or(""),
        job.city.as_deref().unwrap_or(""),
    )
    .to_lowercase();
    let state_hit = profile
        .current_state
        .as_deref()
        .map(|s| !s.trim().is_empty() && job_location.contains(&s.trim().to_lowercase()))
        .unwrap_or(false);
    if state_hit || job.is_remote_friendly {
        score += LOCATION_BONUS;
        reasons.push("In your location or remote friendly".to_string());
    }

    if let (Some(offered), Some(expected)) = (job.salary_min, profile.salary_expectation_min) {
        if offered > 0 && expected > 0 && offered as f64 >= SALARY_TOLERANCE * expected as f64 {
            score += SALARY_BONUS;
            reasons.push("Salary meets your expectation".to_string());
        }
    }

    (score, reasons)
}
