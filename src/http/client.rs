use std::time::Duration;

use anyhow::{Context, Result};
use log::warn;
use reqwest::Client;
use tokio::time::sleep;

use crate::config::ScraperSettings;

/// HTTP client with a politeness delay between requests and a fixed
/// retry policy on fetch failure (3 attempts, 5-second backoff by
/// default)
pub struct RetryingClient {
    client: Client,
    delay: Duration,
    backoff: Duration,
    attempts: usize,
    request_count: usize,
}

impl RetryingClient {
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;

        Ok(Self {
            client,
            delay: Duration::from_millis(settings.rate_limit_ms),
            backoff: Duration::from_secs(settings.retry_backoff_secs),
            attempts: settings.fetch_attempts.max(1),
            request_count: 0,
        })
    }

    /// Fetch a page body, retrying failed attempts with a backoff
    pub async fn fetch_text(&mut self, url: &str) -> Result<String> {
        self.pace().await;

        let mut last_error = None;

        for attempt in 1..=self.attempts {
            match self.try_fetch(url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    warn!("Attempt {}/{} failed for {}: {}", attempt, self.attempts, url, e);
                    last_error = Some(e);
                    if attempt < self.attempts {
                        sleep(self.backoff).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("no fetch attempts made")))
            .with_context(|| format!("Failed to fetch {url}"))
    }

    async fn try_fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send GET request")?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error: {}", response.status());
        }

        response.text().await.context("Failed to read response body")
    }

    /// Delay between consecutive requests; the first request goes
    /// straight through
    async fn pace(&mut self) {
        if self.request_count > 0 {
            sleep(self.delay).await;
        }
        self.request_count += 1;
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}
