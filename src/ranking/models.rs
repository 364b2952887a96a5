use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// --- Odds provider input (The Odds API v4 shape) ---

/// One scheduled game with every bookmaker's quotes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    #[serde(default)]
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub commence_time: DateTime<Utc>,
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmaker {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub markets: Vec<Market>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Market {
    pub key: MarketKey,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarketKey {
    Spreads,
    Totals,
    /// Any market we don't aggregate (h2h, alternate lines, ...).
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Outcome {
    /// Team name for spreads, "Over"/"Under" for totals.
    pub name: String,
    /// Handicap or total line. The provider sends JSON floats.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub point: Option<Decimal>,
}

// --- Ranking output ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// A game placed in the weekly ranking, with display names applied.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedGame {
    pub away: String,
    pub home: String,
    /// Display name of the favored team; always equal to `away` or `home`.
    pub favorite: String,
    /// Consensus spread from the favorite's perspective, one decimal, never positive.
    pub average_spread: Decimal,
    /// Consensus over/under line, whole points.
    pub average_total: Decimal,
    pub commence_time: DateTime<Utc>,
}

/// The week's last-starting game, whose combined score settles pool ties.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Tiebreaker {
    pub away: String,
    pub home: String,
    pub average_total: Decimal,
    pub commence_time: DateTime<Utc>,
}

impl Tiebreaker {
    /// Placeholder emitted when no game qualifies for the week.
    pub fn sentinel() -> Self {
        Self {
            away: String::new(),
            home: String::new(),
            average_total: Decimal::ZERO,
            commence_time: DateTime::<Utc>::MIN_UTC,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.commence_time == DateTime::<Utc>::MIN_UTC
    }
}

impl Default for Tiebreaker {
    fn default() -> Self {
        Self::sentinel()
    }
}

/// Output of the ranking engine for one week.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeeklyRanking {
    pub ranked_games: Vec<RankedGame>,
    pub tiebreaker: Tiebreaker,
}
