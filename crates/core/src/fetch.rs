//! Client for the hosted scraping API that renders a page to markdown.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::config::AppConfig;

/// Reasons a page could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No credential was configured.
    #[error("FIRECRAWL_API_KEY environment variable is required")]
    MissingCredential,
    /// Transport failure or undecodable body.
    #[error("scrape request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-success HTTP status.
    #[error("scrape API error: {status}")]
    Status {
        /// Status returned by the API.
        status: StatusCode,
    },
    /// The API answered but reported failure.
    #[error("failed to scrape {url}: {reason}")]
    Rejected {
        /// Page that was requested.
        url: String,
        /// Error text from the envelope.
        reason: String,
    },
    /// The envelope claimed success but carried no markdown.
    #[error("scrape response for {0} has no markdown content")]
    MissingContent(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrapeRequest<'a> {
    url: &'a str,
    formats: [&'a str; 1],
    only_main_content: bool,
    wait_for: u64,
}

/// Response envelope returned by the scrape endpoint.
#[derive(Debug, Deserialize)]
pub struct ScrapeEnvelope {
    /// Whether the page was rendered.
    pub success: bool,
    /// Rendered content, present on success.
    #[serde(default)]
    pub data: Option<ScrapeData>,
    /// Error text, present on failure.
    #[serde(default)]
    pub error: Option<String>,
}

/// Rendered page formats.
#[derive(Debug, Deserialize)]
pub struct ScrapeData {
    /// Markdown rendering of the page.
    #[serde(default)]
    pub markdown: Option<String>,
}

impl ScrapeEnvelope {
    /// Markdown body, or the reason there is none.
    pub fn into_markdown(self, url: &str) -> Result<String, FetchError> {
        if !self.success {
            return Err(FetchError::Rejected {
                url: url.to_string(),
                reason: self.error.unwrap_or_else(|| "unknown error".to_string()),
            });
        }
        self.data
            .and_then(|data| data.markdown)
            .ok_or_else(|| FetchError::MissingContent(url.to_string()))
    }
}

/// Issues the single scrape request for a run.
pub struct ScrapeClient {
    http: Client,
    endpoint: String,
    api_key: String,
    wait_for_ms: u64,
}

impl ScrapeClient {
    /// Build a client from configuration. Fails when no credential is set.
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(FetchError::MissingCredential)?;
        let http = Client::builder().timeout(config.request_timeout()).build()?;

        Ok(Self {
            http,
            endpoint: format!("{}/v1/scrape", config.api_base.trim_end_matches('/')),
            api_key,
            wait_for_ms: config.wait_for_ms,
        })
    }

    /// Render `url` to markdown.
    pub async fn scrape_markdown(&self, url: &str) -> Result<String, FetchError> {
        info!("requesting markdown for {}", url);
        let body = ScrapeRequest {
            url,
            formats: ["markdown"],
            only_main_content: true,
            wait_for: self.wait_for_ms,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let envelope: ScrapeEnvelope = response.json().await?;
        envelope.into_markdown(url)
    }
}
