//! End-to-end ranking of the bundled sample week.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pickem_ranker::data::sample::SampleSource;
use pickem_ranker::data::OddsSnapshot;
use pickem_ranker::pipeline::{rank_snapshot, ReferenceDate, RunSettings};
use pickem_ranker::ranking::models::Game;
use pickem_ranker::ranking::names::TeamNames;
use pickem_ranker::ranking::report::WeeklyReport;

fn settings() -> RunSettings {
    RunSettings {
        reference: ReferenceDate::Anchor(NaiveDate::from_ymd_opt(2023, 9, 13).unwrap()),
        utc_offset: FixedOffset::west_opt(8 * 3600).unwrap(),
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap()
}

fn sample_report() -> WeeklyReport {
    let snapshot = OddsSnapshot::from_sample(SampleSource::games().unwrap());
    rank_snapshot(snapshot, &TeamNames::cbs(), &settings(), now())
}

// ──────────────────────────────────────────
// Ranking order
// ──────────────────────────────────────────

#[test]
fn sample_week_ranking_order() {
    let report = sample_report();
    let rows: Vec<(&str, Decimal)> = report
        .ranked_games
        .iter()
        .map(|g| (g.favorite.as_str(), g.average_spread))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("Buffalo", dec!(-8.5)),
            ("Philadelphia", dec!(-6.3)),
            ("Detroit", dec!(-4.8)),
            ("Kansas City", dec!(-3.5)),
            ("Cincinnati", dec!(-3.3)),
            ("New Orleans", dec!(-3.3)),
            ("Miami", dec!(-2.5)),
            ("Cleveland", dec!(-2.3)),
            ("Green Bay", dec!(-1.3)),
        ]
    );
}

#[test]
fn sample_week_excludes_next_week() {
    let report = sample_report();
    assert!(report.ranked_games.iter().all(|g| g.home != "San Francisco"));
    let window = report.window;
    assert!(report
        .ranked_games
        .iter()
        .all(|g| window.start <= g.commence_time && g.commence_time < window.end));
}

#[test]
fn sample_week_totals_rounded() {
    let report = sample_report();
    let bengals = report
        .ranked_games
        .iter()
        .find(|g| g.home == "Cincinnati")
        .unwrap();
    assert_eq!(bengals.average_total, dec!(47));
    assert_eq!(bengals.away, "Baltimore");
}

// ──────────────────────────────────────────
// Invariants
// ──────────────────────────────────────────

#[test]
fn spreads_never_positive_and_non_decreasing() {
    let report = sample_report();
    assert!(report
        .ranked_games
        .iter()
        .all(|g| g.average_spread <= Decimal::ZERO));
    assert!(report
        .ranked_games
        .windows(2)
        .all(|w| w[0].average_spread <= w[1].average_spread));
}

#[test]
fn favorite_is_one_of_the_teams() {
    let report = sample_report();
    assert!(report
        .ranked_games
        .iter()
        .all(|g| g.favorite == g.home || g.favorite == g.away));
}

#[test]
fn tiebreaker_is_latest_kickoff() {
    let report = sample_report();
    let latest = report
        .ranked_games
        .iter()
        .map(|g| g.commence_time)
        .max()
        .unwrap();
    assert_eq!(report.tiebreaker.commence_time, latest);
    assert_eq!(report.tiebreaker.away, "Cleveland");
    assert_eq!(report.tiebreaker.home, "Pittsburgh");
    assert_eq!(report.tiebreaker.average_total, dec!(39));
}

#[test]
fn ranking_is_idempotent() {
    assert_eq!(sample_report(), sample_report());
}

#[test]
fn input_order_does_not_change_membership() {
    let mut games: Vec<Game> = SampleSource::games().unwrap();
    games.reverse();
    let report = rank_snapshot(
        OddsSnapshot::from_sample(games),
        &TeamNames::cbs(),
        &settings(),
        now(),
    );
    assert_eq!(report.ranked_games.len(), 9);
    assert_eq!(report.tiebreaker.home, "Pittsburgh");
}

// ──────────────────────────────────────────
// Degenerate inputs
// ──────────────────────────────────────────

#[test]
fn empty_slate_is_not_an_error() {
    let report = rank_snapshot(OddsSnapshot::default(), &TeamNames::cbs(), &settings(), now());
    assert!(report.ranked_games.is_empty());
    assert!(report.tiebreaker.is_sentinel());
}

#[test]
fn game_without_bookmakers_is_dropped() {
    let mut games = SampleSource::games().unwrap();
    games[0].bookmakers.clear();
    let report = rank_snapshot(
        OddsSnapshot::from_sample(games),
        &TeamNames::cbs(),
        &settings(),
        now(),
    );
    assert_eq!(report.ranked_games.len(), 8);
    assert!(report.ranked_games.iter().all(|g| g.home != "Philadelphia"));
}

#[test]
fn unknown_team_passes_through() {
    let mut games = SampleSource::games().unwrap();
    let renamed = "Brooklyn Bisons".to_string();
    games[2].away_team = renamed.clone();
    for book in &mut games[2].bookmakers {
        for market in &mut book.markets {
            for outcome in &mut market.outcomes {
                if outcome.name == "Las Vegas Raiders" {
                    outcome.name = renamed.clone();
                }
            }
        }
    }
    let report = rank_snapshot(
        OddsSnapshot::from_sample(games),
        &TeamNames::cbs(),
        &settings(),
        now(),
    );
    assert_eq!(report.ranked_games[0].away, "Brooklyn Bisons");
    assert_eq!(report.ranked_games[0].home, "Buffalo");
}
