use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::ranking::models::{Game, Tiebreaker};
use crate::ranking::names::TeamNames;
use crate::ranking::round_total;

/// Running scan for the week's last-starting game.
#[derive(Debug, Default)]
pub struct TiebreakerTracker<'a> {
    latest: Option<(&'a Game, Decimal)>,
}

impl<'a> TiebreakerTracker<'a> {
    pub fn new() -> Self {
        Self { latest: None }
    }

    /// Offer a game with its unrounded consensus total. Only a strictly
    /// later kickoff replaces the current pick, so the first game seen at a
    /// given time wins.
    pub fn observe(&mut self, game: &'a Game, total: Decimal) {
        let later = match self.latest {
            Some((current, _)) => game.commence_time > current.commence_time,
            None => game.commence_time > DateTime::<Utc>::MIN_UTC,
        };
        if later {
            self.latest = Some((game, total));
        }
    }

    pub fn finish(self, names: &TeamNames) -> Tiebreaker {
        match self.latest {
            Some((game, total)) => Tiebreaker {
                away: names.normalize(&game.away_team),
                home: names.normalize(&game.home_team),
                average_total: round_total(total),
                commence_time: game.commence_time,
            },
            None => Tiebreaker::sentinel(),
        }
    }
}
