//! Pick'em week boundaries.
//!
//! A pool week runs from Tuesday midnight to the following Tuesday midnight,
//! so Thursday, Sunday and Monday night games all land in the same round.
//! Calendar days are taken in a fixed UTC offset.

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

/// First Tuesday strictly after `date`. A Tuesday maps to the next week's Tuesday.
pub fn next_tuesday(date: NaiveDate) -> NaiveDate {
    let from_monday = date.weekday().num_days_from_monday() as u64;
    let ahead = match (8 - from_monday) % 7 {
        0 => 7,
        n => n,
    };
    date + Days::new(ahead)
}

/// Tuesday that opens the week containing `date`.
pub fn last_tuesday(date: NaiveDate) -> NaiveDate {
    next_tuesday(date) - Days::new(7)
}

/// Half-open interval `[start, end)` of one pick'em week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(skip)]
    offset: FixedOffset,
}

impl WeekWindow {
    /// Week containing `reference`, with days evaluated in `offset`.
    pub fn containing(reference: DateTime<Utc>, offset: FixedOffset) -> Self {
        let local_day = reference.with_timezone(&offset).date_naive();
        Self {
            start: local_midnight(last_tuesday(local_day), offset),
            end: local_midnight(next_tuesday(local_day), offset),
            offset,
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Translate a UTC instant into the window's local time, for display.
    pub fn local(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.offset)
    }
}

fn local_midnight(day: NaiveDate, offset: FixedOffset) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN)
        .and_local_timezone(offset)
        .single()
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
