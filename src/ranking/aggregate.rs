//! Consensus odds for a single game.
//!
//! Averages the home team's spread and the over/under line across every
//! bookmaker that quotes them. Spreads are home-referenced: negative means
//! the home team is favored.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::ranking::models::{Game, Market, MarketKey};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketDataError {
    #[error("no bookmaker quotes a spread for {home}")]
    NoSpreads { home: String },
    #[error("no bookmaker quotes a total for {away} @ {home}")]
    NoTotals { away: String, home: String },
}

/// Unrounded consensus numbers for one game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameOdds {
    /// Mean home spread.
    pub spread: Decimal,
    /// Mean over/under line.
    pub total: Decimal,
    pub spread_books: usize,
    pub total_books: usize,
}

/// Average the home spread and the total across bookmakers.
///
/// A game nobody quotes is reported as an error instead of averaging an
/// empty list.
pub fn aggregate(game: &Game) -> Result<GameOdds, MarketDataError> {
    let mut home_spreads = Vec::new();
    let mut totals = Vec::new();
    let mut spread_books = 0;
    let mut total_books = 0;

    for bookmaker in &game.bookmakers {
        for market in &bookmaker.markets {
            match market.key {
                MarketKey::Spreads => {
                    let before = home_spreads.len();
                    collect_home_spread(game, &bookmaker.key, market, &mut home_spreads);
                    if home_spreads.len() > before {
                        spread_books += 1;
                    }
                }
                MarketKey::Totals => {
                    // Over and Under share one line; the first outcome carries it.
                    if let Some(point) = market.outcomes.first().and_then(|o| o.point) {
                        totals.push(point);
                        total_books += 1;
                    }
                }
                MarketKey::Other => {}
            }
        }
    }

    let spread = mean(&home_spreads).ok_or_else(|| MarketDataError::NoSpreads {
        home: game.home_team.clone(),
    })?;
    let total = mean(&totals).ok_or_else(|| MarketDataError::NoTotals {
        away: game.away_team.clone(),
        home: game.home_team.clone(),
    })?;

    Ok(GameOdds {
        spread,
        total,
        spread_books,
        total_books,
    })
}

fn collect_home_spread(game: &Game, book: &str, market: &Market, out: &mut Vec<Decimal>) {
    let mut home = None;
    let mut away = None;

    for outcome in &market.outcomes {
        let Some(point) = outcome.point else {
            continue;
        };
        if outcome.name == game.home_team {
            home = Some(point);
        } else if outcome.name == game.away_team {
            away = Some(point);
        } else {
            tracing::warn!(
                book,
                team = %outcome.name,
                home = %game.home_team,
                away = %game.away_team,
                "Spread outcome names neither team, ignoring"
            );
        }
    }

    if let (Some(h), Some(a)) = (home, away) {
        if !is_symmetric(h, a) {
            tracing::warn!(
                book,
                home_point = %h,
                away_point = %a,
                "Asymmetric spread quote, using home side"
            );
        }
    }

    if let Some(h) = home {
        out.push(h);
    }
}

/// A bookmaker's two spread outcomes must be exact negatives.
pub fn is_symmetric(home_point: Decimal, away_point: Decimal) -> bool {
    home_point == -away_point
}

fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let sum: Decimal = values.iter().sum();
    Some(sum / Decimal::from(values.len() as u64))
}
