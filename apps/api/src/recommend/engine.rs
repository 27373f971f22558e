//! Recommendation engine: fans out the four retrieval strategies, merges
//! their results by job id, ranks, truncates, and formats for display.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::warn;

use crate::models::job::JobRow;
use crate::models::profile::{ApplicationHistoryEntry, SeekerProfileRow};
use crate::recommend::format;
use crate::recommend::scoring::score_skills_match;
use crate::recommend::strategies;
use crate::store::{JobQuery, JobStore};

/// Never return more than this many recommendations.
pub const MAX_RESULTS: usize = 20;

/// A ranked job ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobRow,
    pub match_score: i64,
    pub match_reasons: String,
    pub formatted_salary: String,
    pub time_ago: String,
    pub days_left: i64,
    pub match_level: String,
    pub job_url: String,
}

struct Candidate {
    job: JobRow,
    score: f64,
    reasons: Vec<String>,
}

pub struct RecommendationEngine {
    store: Arc<dyn JobStore>,
    strategy_timeout: Duration,
}

impl RecommendationEngine {
    pub fn new(store: Arc<dyn JobStore>, strategy_timeout: Duration) -> Self {
        Self {
            store,
            strategy_timeout,
        }
    }

    /// Produces at most [`MAX_RESULTS`] scored, deduplicated, ranked jobs.
    ///
    /// Strategy failures and timeouts degrade that strategy to an empty set;
    /// they never abort the whole call. `history` is accepted as part of the
    /// input contract but no strategy weights it yet.
    pub async fn recommend(
        &self,
        profile: &SeekerProfileRow,
        skills: &[String],
        _history: &[ApplicationHistoryEntry],
        excluded: &[i64],
    ) -> Vec<ScoredJob> {
        let now = Utc::now();

        // Fan out: the strategies are independent reads, so run them
        // concurrently and wait for all four.
        let (skills_jobs, location_jobs, background_jobs, trending_jobs) = tokio::join!(
            self.run_strategy("skills", strategies::skills_query(skills), excluded),
            self.run_strategy("location", strategies::location_query(profile), excluded),
            self.run_strategy("background", strategies::background_query(profile), excluded),
            self.run_strategy("trending", Some(strategies::trending_query()), excluded),
        );

        let mut by_id: HashMap<i64, usize> = HashMap::new();
        let mut candidates: Vec<Candidate> = Vec::new();

        // Strategy 1 computes a real score per job. Duplicate rows keep the
        // strictly higher score; ties keep the first seen.
        for job in skills_jobs {
            let (score, reasons) = score_skills_match(&job, profile, skills);
            match by_id.get(&job.id) {
                Some(&idx) => {
                    if score > candidates[idx].score {
                        candidates[idx] = Candidate { job, score, reasons };
                    }
                }
                None => {
                    by_id.insert(job.id, candidates.len());
                    candidates.push(Candidate { job, score, reasons });
                }
            }
        }

        // Strategies 2-4 assign flat scores, but only to jobs no earlier
        // strategy touched. A job already carrying a computed score keeps
        // it even when the flat score is higher.
        let flat_passes = [
            (
                location_jobs,
                strategies::LOCATION_FLAT_SCORE,
                strategies::LOCATION_REASON,
            ),
            (
                background_jobs,
                strategies::BACKGROUND_FLAT_SCORE,
                strategies::BACKGROUND_REASON,
            ),
            (
                trending_jobs,
                strategies::TRENDING_FLAT_SCORE,
                strategies::TRENDING_REASON,
            ),
        ];
        for (jobs, flat_score, reason) in flat_passes {
            for job in jobs {
                if !by_id.contains_key(&job.id) {
                    by_id.insert(job.id, candidates.len());
                    candidates.push(Candidate {
                        job,
                        score: flat_score,
                        reasons: vec![reason.to_string()],
                    });
                }
            }
        }

        // Stable sort, so equal scores keep strategy-order precedence.
        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        candidates.truncate(MAX_RESULTS);

        candidates
            .into_iter()
            .map(|c| present(c, now))
            .collect()
    }

    async fn run_strategy(
        &self,
        name: &'static str,
        query: Option<JobQuery>,
        excluded: &[i64],
    ) -> Vec<JobRow> {
        let Some(query) = query else {
            return Vec::new();
        };
        match timeout(self.strategy_timeout, self.store.fetch_jobs(&query, excluded)).await {
            Ok(Ok(jobs)) => jobs,
            Ok(Err(e)) => {
                warn!(strategy = name, error = %e, "retrieval strategy failed");
                Vec::new()
            }
            Err(_) => {
                warn!(strategy = name, "retrieval strategy timed out");
                Vec::new()
            }
        }
    }
}

/// Rounds the score once and attaches the display fields.
fn present(candidate: Candidate, now: DateTime<Utc>) -> ScoredJob {
    let Candidate { job, score, reasons } = candidate;
    let match_score = (score.round() as i64).clamp(0, 100);
    ScoredJob {
        match_score,
        match_reasons: reasons.join(" • "),
        formatted_salary: format::format_salary(
            job.salary_min,
            job.salary_max,
            job.salary_period.as_deref(),
        ),
        time_ago: format::time_ago(job.created_at, now),
        days_left: format::days_left(job.application_deadline, now),
        match_level: format::match_level(match_score).to_string(),
        job_url: format::job_url(job.slug.as_deref(), job.id),
        job,
    }
}
