//! Choosing the date whose week gets ranked.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};

use crate::ranking::models::Game;

/// Parse an explicit reference date, either an RFC 3339 timestamp or a bare
/// `YYYY-MM-DD` day. A bare day means that calendar day in `offset`, the
/// same offset the week window is evaluated in. Anything else falls back
/// to `now`.
pub fn parse_reference_date(
    raw: Option<&str>,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> DateTime<Utc> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        tracing::warn!(
            fallback = %now,
            "No reference date given, using current time"
        );
        return now;
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.with_timezone(&Utc);
    }
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return local_noon(day, offset);
    }

    tracing::warn!(
        input = raw,
        fallback = %now,
        "Invalid reference date, using current time"
    );
    now
}

/// Reference date for live odds: the later of `now` and the earliest
/// kickoff, so querying before the season opener still ranks opening week.
pub fn live_reference_date(now: DateTime<Utc>, games: &[Game]) -> DateTime<Utc> {
    games
        .iter()
        .map(|g| g.commence_time)
        .min()
        .map_or(now, |first| first.max(now))
}

/// Reference date for the bundled sample week: a fixed anchor day in `offset`.
pub fn sample_reference_date(anchor: NaiveDate, offset: FixedOffset) -> DateTime<Utc> {
    local_noon(anchor, offset)
}

// Midday keeps the instant on `day` for any offset within a day of UTC.
fn local_noon(day: NaiveDate, offset: FixedOffset) -> DateTime<Utc> {
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);
    day.and_time(noon)
        .and_local_timezone(offset)
        .single()
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| day.and_time(noon).and_utc())
}
