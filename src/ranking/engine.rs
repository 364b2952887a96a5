//! Weekly ranking.
//!
//! Filters games to the pick'em week, computes consensus odds, and orders
//! the week by the favorite's spread. A single pass also tracks the
//! tiebreaker game.

use rust_decimal::Decimal;

use crate::ranking::aggregate::aggregate;
use crate::ranking::favorite::resolve_favorite;
use crate::ranking::models::{Game, RankedGame, Side, WeeklyRanking};
use crate::ranking::names::TeamNames;
use crate::ranking::tiebreaker::TiebreakerTracker;
use crate::ranking::{round_spread, round_total};
use crate::schedule::WeekWindow;

/// Intermediate row, unrounded and with provider names.
struct Candidate<'a> {
    game: &'a Game,
    favorite: Side,
    spread: Decimal,
    total: Decimal,
}

/// Rank the week's games by spread, most lopsided first.
///
/// Games without both a spread and a total are left out of the ranking and
/// out of the tiebreaker scan. Pure: the same input always gives the same
/// output.
pub fn rank(games: &[Game], window: &WeekWindow, names: &TeamNames) -> WeeklyRanking {
    let mut candidates = Vec::new();
    let mut tiebreaker = TiebreakerTracker::new();
    let mut outside_window = 0usize;

    for game in games {
        if !window.contains(game.commence_time) {
            outside_window += 1;
            continue;
        }

        let odds = match aggregate(game) {
            Ok(odds) => odds,
            Err(e) => {
                tracing::warn!(
                    away = %game.away_team,
                    home = %game.home_team,
                    commence = %game.commence_time,
                    error = %e,
                    "Skipping game without usable odds"
                );
                continue;
            }
        };

        tracing::trace!(
            away = %game.away_team,
            home = %game.home_team,
            spread = %odds.spread,
            spread_books = odds.spread_books,
            total = %odds.total,
            total_books = odds.total_books,
            "Consensus odds"
        );

        tiebreaker.observe(game, odds.total);

        let (favorite, spread) = resolve_favorite(odds.spread);
        candidates.push(Candidate {
            game,
            favorite,
            spread,
            total: odds.total,
        });
    }

    // Vec::sort_by is stable, so equal spreads keep schedule order.
    candidates.sort_by(|a, b| a.spread.cmp(&b.spread));

    let ranked_games: Vec<RankedGame> = candidates
        .into_iter()
        .map(|c| to_ranked_game(c, names))
        .collect();

    tracing::debug!(
        ranked = ranked_games.len(),
        outside_window,
        window_start = %window.start,
        window_end = %window.end,
        "Week ranked"
    );

    WeeklyRanking {
        ranked_games,
        tiebreaker: tiebreaker.finish(names),
    }
}

fn to_ranked_game(c: Candidate<'_>, names: &TeamNames) -> RankedGame {
    let away = names.normalize(&c.game.away_team);
    let home = names.normalize(&c.game.home_team);
    let favorite = match c.favorite {
        Side::Home => home.clone(),
        Side::Away => away.clone(),
    };

    RankedGame {
        away,
        home,
        favorite,
        average_spread: round_spread(c.spread),
        average_total: round_total(c.total),
        commence_time: c.game.commence_time,
    }
}
