// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP access to pod index sources.
//!
//! ```text
//! IndexClient::from_config(&IndexConfig)
//!   user agent, per-request timeout
//!        |
//!        v
//!   fetch_string(url) --> body
//!     non-2xx   --> NetworkError::HttpError
//!     transport --> NetworkError::Reqwest
//! ```

use crate::config::types::IndexConfig;
use crate::error::{NetworkError, PodResult};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// HTTP client for index sources.
#[derive(Debug, Clone)]
pub struct IndexClient {
    client: Client,
}

impl Default for IndexClient {
    fn default() -> Self {
        Self::from_config(&IndexConfig::default())
    }
}

impl IndexClient {
    /// Build a client with the configured user agent and timeout.
    ///
    /// Falls back to a basic client if custom configuration fails.
    #[must_use]
    pub fn from_config(config: &IndexConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }

    /// GET `url` and return the body as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the request fails, or the server
    /// answers with a non-success status code.
    pub async fn fetch_string(&self, url: &str) -> PodResult<String> {
        let parsed =
            reqwest::Url::parse(url).map_err(|e| NetworkError::InvalidUrl(format!("{url}: {e}")))?;

        debug!(url = %parsed, "fetching index");
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;

        if !response.status().is_success() {
            return Err(NetworkError::HttpError {
                status: response.status().as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let text = response.text().await.map_err(NetworkError::Reqwest)?;
        Ok(text)
    }
}
