//! Bundled sample week.
//!
//! A recorded provider response for NFL week 2 of 2023, used when no API
//! key is configured so the ranking can be demoed without spending quota.

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::data::{OddsSnapshot, OddsSource};
use crate::ranking::models::Game;

const SAMPLE_ODDS_JSON: &str = include_str!("../../data/sample_odds.json");

#[derive(Debug, Default)]
pub struct SampleSource;

impl SampleSource {
    pub fn new() -> Self {
        Self
    }

    pub fn games() -> Result<Vec<Game>> {
        serde_json::from_str(SAMPLE_ODDS_JSON).context("Failed to parse bundled sample odds")
    }
}

#[async_trait]
impl OddsSource for SampleSource {
    async fn fetch(&self) -> Result<OddsSnapshot> {
        Ok(OddsSnapshot::from_sample(Self::games()?))
    }

    fn is_live(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "sample"
    }
}
