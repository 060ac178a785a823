//! Click analytics aggregation
//!
//! Pure transforms over the bounded recent-click window delivered by the
//! backend. Because the window is bounded, days with clicks that fell out
//! of it are absent from the series; callers should surface the window
//! size instead of implying completeness.

use std::collections::BTreeMap;

use chrono::{Local, TimeZone};

use crate::api::Click;

/// Click count for a single calendar day, keyed by ISO date string.
/// Lexicographic order on the key is chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCount {
    pub day: String,
    pub count: u64,
}

/// Bucket a click window into per-day counts in the local zone, ordered
/// ascending by day. Deterministic for a given input window.
pub fn daily_series(clicks: &[Click]) -> Vec<DayCount> {
    daily_series_in(clicks, &Local)
}

/// Zone-explicit variant of [`daily_series`].
pub fn daily_series_in<Tz: TimeZone>(clicks: &[Click], tz: &Tz) -> Vec<DayCount> {
    // BTreeMap keeps days sorted; ISO dates sort chronologically.
    let mut buckets: BTreeMap<String, u64> = BTreeMap::new();
    for click in clicks {
        let day = click
            .clicked_at
            .with_timezone(tz)
            .date_naive()
            .format("%Y-%m-%d")
            .to_string();
        *buckets.entry(day).or_insert(0) += 1;
    }
    buckets
        .into_iter()
        .map(|(day, count)| DayCount { day, count })
        .collect()
}

/// Largest single-day count in a series; used to scale charts.
pub fn peak_count(series: &[DayCount]) -> u64 {
    series.iter().map(|d| d.count).max().unwrap_or(0)
}
