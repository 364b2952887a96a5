pub mod odds_api;
pub mod sample;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ranking::models::Game;

/// Provider request quota reported alongside live odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaUsage {
    pub used: u32,
    pub remaining: u32,
}

/// One fetch worth of games.
#[derive(Debug, Clone, Default)]
pub struct OddsSnapshot {
    pub games: Vec<Game>,
    /// Whether the games came from the live provider.
    pub live: bool,
    /// Quota reported by the provider, when it sent the headers.
    pub usage: Option<QuotaUsage>,
}

impl OddsSnapshot {
    pub fn from_sample(games: Vec<Game>) -> Self {
        Self {
            games,
            live: false,
            usage: None,
        }
    }

    pub fn from_provider(games: Vec<Game>, usage: Option<QuotaUsage>) -> Self {
        Self {
            games,
            live: true,
            usage,
        }
    }
}

/// Trait for anything that can supply the week's raw odds.
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// Fetch every upcoming game with bookmaker quotes.
    async fn fetch(&self) -> Result<OddsSnapshot>;

    /// True for live provider data, false for bundled or recorded data.
    fn is_live(&self) -> bool;

    /// Human-readable name of this source.
    fn name(&self) -> &str;
}
