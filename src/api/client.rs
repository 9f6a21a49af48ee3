use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;

use crate::api::models::RawGame;
use crate::config::settings::ApiSettings;
use crate::errors::FetchError;

/// AoE4World API client
pub struct Aoe4WorldClient {
    client: Client,
    base_url: String,
}

impl Aoe4WorldClient {
    /// Create a new AoE4World API client
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            base_url: settings.base_url.to_string(),
        })
    }

    /// Fetch the most recent game for a profile.
    ///
    /// Transport failure, a non-success status, and an unparseable body are
    /// distinguished but all belong to the same retry class.
    pub async fn fetch_last_game(&self, profile_id: u64) -> Result<RawGame, FetchError> {
        let url = self.build_last_game_url(profile_id);
        debug!("Fetching last game from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let raw = serde_json::from_str(&body)?;
        Ok(raw)
    }

    fn build_last_game_url(&self, profile_id: u64) -> String {
        format!(
            "{}/players/{}/games/last?include_stats=false",
            self.base_url, profile_id
        )
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}
