//! The Odds API client.
//!
//! Fetches NFL spreads and totals from `api.the-odds-api.com` (v4) and
//! reads the request quota from the response headers.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::instrument;

use crate::config::OddsApiConfig;
use crate::data::{OddsSnapshot, OddsSource, QuotaUsage};
use crate::ranking::models::Game;

const MARKETS: &str = "spreads,totals";
const BODY_SNIPPET_LEN: usize = 220;

#[derive(Debug, Error)]
pub enum OddsApiError {
    #[error("odds request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("odds http {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("invalid odds json: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct OddsApiSource {
    client: reqwest::Client,
    base_url: String,
    sport: String,
    regions: String,
    api_key: SecretString,
}

impl OddsApiSource {
    pub fn new(config: &OddsApiConfig, api_key: SecretString) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pickem-ranker/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            sport: config.sport.clone(),
            regions: config.regions.clone(),
            api_key,
        })
    }

    #[instrument(skip(self), fields(sport = %self.sport))]
    async fn fetch_odds(&self) -> Result<OddsSnapshot, OddsApiError> {
        let url = format!("{}/v4/sports/{}/odds", self.base_url, self.sport);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("apiKey", self.api_key.expose_secret()),
                ("regions", self.regions.as_str()),
                ("markets", MARKETS),
                ("oddsFormat", "decimal"),
                ("dateFormat", "iso"),
            ])
            .send()
            .await?;

        let status = response.status();
        let usage = quota_usage(response.headers());
        let body = response.text().await?;

        if !status.is_success() {
            return Err(OddsApiError::Status {
                status,
                body: snippet(&body),
            });
        }

        let games: Vec<Game> = serde_json::from_str(&body)?;

        if let Some(usage) = usage {
            tracing::info!(
                used = usage.used,
                remaining = usage.remaining,
                "Odds API quota"
            );
        }

        Ok(OddsSnapshot::from_provider(games, usage))
    }
}

#[async_trait]
impl OddsSource for OddsApiSource {
    async fn fetch(&self) -> Result<OddsSnapshot> {
        let snapshot = self.fetch_odds().await?;
        tracing::info!(games = snapshot.games.len(), "Odds fetched");
        Ok(snapshot)
    }

    fn is_live(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "the_odds_api"
    }
}

/// Read `x-requests-used` / `x-requests-remaining`. Both must be present.
pub fn quota_usage(headers: &HeaderMap) -> Option<QuotaUsage> {
    let read = |name: &str| -> Option<u32> {
        headers
            .get(name)?
            .to_str()
            .ok()?
            .trim()
            .parse::<f64>()
            .ok()
            .map(|v| v.max(0.0) as u32)
    };
    Some(QuotaUsage {
        used: read("x-requests-used")?,
        remaining: read("x-requests-remaining")?,
    })
}

fn snippet(body: &str) -> String {
    body.trim()
        .replace(['\n', '\r'], " ")
        .chars()
        .take(BODY_SNIPPET_LEN)
        .collect()
}
