//! Relative timestamps shown next to posts and comments.
//!
//! `now` is always passed in so the formatting is deterministic; callers use
//! [`chrono::Utc::now`], which reads `Date.now()` on WASM.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Label for a post header: "Today", "Yesterday", "3d", or a calendar date.
pub fn post_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - created_at).num_days().abs();
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{d}d"),
        _ => created_at.format("%b %-d, %Y").to_string(),
    }
}

/// Label for a comment header: "Just now", "5m", "3h", "2d".
pub fn comment_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - created_at;
    let hours = elapsed.num_hours();
    if hours < 1 {
        let minutes = elapsed.num_minutes();
        if minutes < 1 {
            "Just now".to_string()
        } else {
            format!("{minutes}m")
        }
    } else if hours < 24 {
        format!("{hours}h")
    } else {
        format!("{}d", hours / 24)
    }
}

/// Full timestamp for the post detail page, e.g. "May 1, 2024 at 12:00".
pub fn full_date(at: DateTime<Utc>) -> String {
    at.format("%B %-d, %Y at %H:%M").to_string()
}

/// Parse a backend timestamp. Accepts RFC 3339 and the common SQL
/// `YYYY-MM-DD HH:MM:SS` form (read as UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}
