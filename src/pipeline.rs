//! One ranking run: acquire odds, pick the week, rank it.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::data::{OddsSnapshot, OddsSource};
use crate::ranking::engine::rank;
use crate::ranking::names::TeamNames;
use crate::ranking::report::WeeklyReport;
use crate::schedule::reference::{
    live_reference_date, parse_reference_date, sample_reference_date,
};
use crate::schedule::WeekWindow;

/// How to choose the week that gets ranked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceDate {
    /// Later of now and the first kickoff in the data.
    Live,
    /// Fixed anchor day, for reproducible sample output.
    Anchor(NaiveDate),
    /// User-supplied date string; malformed input falls back to now.
    Explicit(String),
}

#[derive(Debug, Clone)]
pub struct RunSettings {
    pub reference: ReferenceDate,
    pub utc_offset: FixedOffset,
}

/// Fetch from `source` and rank the selected week.
///
/// A failing source is logged and treated as an empty slate, so the caller
/// always receives a report.
pub async fn build_weekly_report(
    source: &dyn OddsSource,
    names: &TeamNames,
    settings: &RunSettings,
    now: DateTime<Utc>,
) -> WeeklyReport {
    let snapshot = match source.fetch().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!(
                source = source.name(),
                error = %e,
                "Odds source failed, ranking an empty slate"
            );
            OddsSnapshot {
                live: source.is_live(),
                ..OddsSnapshot::default()
            }
        }
    };

    rank_snapshot(snapshot, names, settings, now)
}

/// Rank an already-acquired snapshot.
pub fn rank_snapshot(
    snapshot: OddsSnapshot,
    names: &TeamNames,
    settings: &RunSettings,
    now: DateTime<Utc>,
) -> WeeklyReport {
    let reference = match &settings.reference {
        ReferenceDate::Live => live_reference_date(now, &snapshot.games),
        ReferenceDate::Anchor(day) => sample_reference_date(*day, settings.utc_offset),
        ReferenceDate::Explicit(raw) => {
            parse_reference_date(Some(raw.as_str()), now, settings.utc_offset)
        }
    };
    let window = WeekWindow::containing(reference, settings.utc_offset);

    tracing::info!(
        reference = %reference,
        window_start = %window.start,
        window_end = %window.end,
        games = snapshot.games.len(),
        "Ranking week"
    );

    let ranking = rank(&snapshot.games, &window, names);
    WeeklyReport::new(window, ranking, snapshot.live, snapshot.usage)
}
