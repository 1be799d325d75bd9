use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::Episode;

/// Length of the trailing window an episode must have aired in.
pub const RECENCY_WINDOW_DAYS: i64 = 30;

/// Calendar date format of TMDB air dates.
pub const AIR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an air date as midnight UTC. `None` for empty or malformed input.
pub fn parse_air_date(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    let date = NaiveDate::parse_from_str(raw, AIR_DATE_FORMAT).ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Whether the episode aired strictly inside `(now - 30 days, now)`.
pub fn is_recent(episode: &Episode, now: DateTime<Utc>) -> bool {
    let Some(aired) = parse_air_date(&episode.air_date) else {
        return false;
    };
    let cutoff = now - Duration::days(RECENCY_WINDOW_DAYS);
    aired > cutoff && aired < now
}

/// Keep the episodes that aired inside the recency window, preserving order.
pub fn filter_recent(episodes: Vec<Episode>, now: DateTime<Utc>) -> Vec<Episode> {
    episodes
        .into_iter()
        .filter(|episode| is_recent(episode, now))
        .collect()
}
