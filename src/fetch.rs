use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

const TIMEOUT_SECS: u64 = 20;

/// Minimum body length for a response to count as usable. Anything
/// shorter is almost certainly an error page or an empty shell.
const MIN_BODY_CHARS: usize = 200;

/// Reusable HTTP client shared by the careers resolver and the provider
/// fetchers. Every failure mode is absorbed here: the pipeline only ever
/// sees "page" or "no page".
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// GET a URL, following redirects. Returns the body only when the
    /// status is below 400 and the body is long enough to be a real page.
    pub async fn fetch_page(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                debug!("Request failed for {}: {}", url, e);
                return None;
            }
        };

        let status = response.status();
        if status.as_u16() >= 400 {
            debug!("Skipping {}: status {}", url, status);
            return None;
        }

        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                debug!("Failed to read body from {}: {}", url, e);
                return None;
            }
        };

        if body.chars().count() < MIN_BODY_CHARS {
            debug!("Skipping {}: body too short", url);
            return None;
        }

        Some(body)
    }
}
