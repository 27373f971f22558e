//! Display formatting applied after ranking. None of this affects scores.

use chrono::{DateTime, Utc};

/// Formats the salary range with the naira symbol and thousands
/// separators, or "Negotiable" when neither bound is set.
pub fn format_salary(min: Option<i64>, max: Option<i64>, period: Option<&str>) -> String {
    let suffix = period
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("/{p}"))
        .unwrap_or_default();
    let min = min.filter(|v| *v > 0);
    let max = max.filter(|v| *v > 0);
    match (min, max) {
        (Some(lo), Some(hi)) => format!("₦{} - ₦{}{suffix}", thousands(lo), thousands(hi)),
        (Some(lo), None) => format!("From ₦{}{suffix}", thousands(lo)),
        (None, Some(hi)) => format!("Up to ₦{}{suffix}", thousands(hi)),
        (None, None) => "Negotiable".to_string(),
    }
}

fn thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Relative age of a posting, bucketed; postings older than 30 days show
/// an absolute date.
pub fn time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - created_at).num_seconds().max(0);
    if seconds < 60 {
        return "Just now".to_string();
    }
    if seconds < 3_600 {
        return plural(seconds / 60, "minute");
    }
    if seconds < 86_400 {
        return plural(seconds / 3_600, "hour");
    }
    let days = seconds / 86_400;
    if days < 7 {
        return plural(days, "day");
    }
    if days < 30 {
        return plural(days / 7, "week");
    }
    created_at.format("%b %-d, %Y").to_string()
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Whole days until the deadline; 0 when passed or absent.
pub fn days_left(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    deadline
        .map(|d| (d - now).num_days().max(0))
        .unwrap_or(0)
}

pub fn match_level(score: i64) -> &'static str {
    if score >= 80 {
        "excellent"
    } else if score >= 60 {
        "good"
    } else if score >= 40 {
        "fair"
    } else {
        "basic"
    }
}

/// Canonical job path. Slug when present, id fallback otherwise.
pub fn job_url(slug: Option<&str>, id: i64) -> String {
    match slug.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => format!("/jobs/{slug}"),
        None => format!("/jobs/{id}"),
    }
}
