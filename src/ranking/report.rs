use std::fmt;

use serde::Serialize;

use crate::data::QuotaUsage;
use crate::ranking::models::{RankedGame, Tiebreaker, WeeklyRanking};
use crate::schedule::WeekWindow;

const GAME_TIME_FORMAT: &str = "%a %m-%d-%Y %I:%M %p";
const RULE_WIDTH: usize = 100;

/// Everything a consumer needs to render one pick'em week.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeeklyReport {
    pub window: WeekWindow,
    pub ranked_games: Vec<RankedGame>,
    pub tiebreaker: Tiebreaker,
    /// False when the bundled sample week was ranked.
    pub live: bool,
    /// Provider quota; `null` for sample data or when the provider omitted it.
    pub usage: Option<QuotaUsage>,
}

impl WeeklyReport {
    pub fn new(
        window: WeekWindow,
        ranking: WeeklyRanking,
        live: bool,
        usage: Option<QuotaUsage>,
    ) -> Self {
        Self {
            window,
            ranked_games: ranking.ranked_games,
            tiebreaker: ranking.tiebreaker,
            live,
            usage,
        }
    }

    pub fn is_sample(&self) -> bool {
        !self.live
    }

    /// Pool confidence points for each row: the first (most lopsided) game
    /// gets one point per ranked game, the closest game gets one.
    pub fn confidence_points(&self) -> impl Iterator<Item = (usize, &RankedGame)> {
        let n = self.ranked_games.len();
        self.ranked_games.iter().enumerate().map(move |(i, g)| (n - i, g))
    }
}

impl fmt::Display for WeeklyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(
            f,
            "Week of {} to {}{}",
            self.window.local(self.window.start).format("%a %m-%d-%Y"),
            self.window.local(self.window.end).format("%a %m-%d-%Y"),
            if self.is_sample() { " (sample data)" } else { "" }
        )?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "RANK {:>25} @ {:<25}{:>7}{:>7}   GAME TIME",
            "AWAY TEAM", "HOME TEAM", "SPREAD", "TOTAL"
        )?;
        writeln!(f, "{rule}")?;

        for (points, game) in self.confidence_points() {
            // Favorite marked with '*'.
            let (away, home) = if game.favorite == game.away {
                (format!("*{}", game.away), game.home.clone())
            } else {
                (game.away.clone(), format!("*{}", game.home))
            };
            writeln!(
                f,
                "{:<4} {:>25} @ {:<25}{:>7}{:>7}   {}",
                points,
                away,
                home,
                format!("{:.1}", game.average_spread),
                format!("{:.0}", game.average_total),
                self.window.local(game.commence_time).format(GAME_TIME_FORMAT),
            )?;
        }
        writeln!(f, "{rule}")?;

        if self.tiebreaker.is_sentinel() {
            writeln!(f, "TIEBREAKER: no games this week")?;
        } else {
            writeln!(
                f,
                "TIEBREAKER: {:.0}   {} @ {}   {}",
                self.tiebreaker.average_total,
                self.tiebreaker.away,
                self.tiebreaker.home,
                self.window
                    .local(self.tiebreaker.commence_time)
                    .format(GAME_TIME_FORMAT),
            )?;
        }

        if let Some(usage) = &self.usage {
            write!(
                f,
                "API requests: {} used, {} remaining",
                usage.used, usage.remaining
            )?;
        }

        Ok(())
    }
}
