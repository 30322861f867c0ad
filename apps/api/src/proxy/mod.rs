/// Upstream client for the script-backed form endpoints.
///
/// Bodies are forwarded as JSON and the upstream's textual response is parsed as
/// JSON and relayed unchanged. No retries, no per-request timeout.
use reqwest::{Client, Url};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod handlers;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned non-JSON body: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// POSTs `body` to `url` and returns the upstream response parsed as JSON.
    ///
    /// The upstream status code is not part of the contract: non-2xx responses
    /// are logged and their body is still relayed if it is valid JSON.
    pub async fn post_json(&self, url: Url, body: &Value) -> Result<Value, UpstreamError> {
        let host = url.host_str().unwrap_or_default().to_string();
        let response = self.client.post(url).json(body).send().await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            warn!(%status, %host, "Upstream returned non-success status");
        }
        debug!(%host, bytes = text.len(), "Upstream response received");

        Ok(serde_json::from_str(&text)?)
    }
}
