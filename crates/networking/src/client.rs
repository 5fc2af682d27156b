//! HTTP client backed by reqwest.

use crate::response::FetchedDocument;
use crate::Fetcher;
use common::{BrowserError, BrowserResult};
use futures::future::BoxFuture;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// HTTP client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub max_redirects: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("willow-browser/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(30),
            max_redirects: 10,
        }
    }
}

/// Default [`Fetcher`] implementation over HTTP(S).
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> BrowserResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| BrowserError::network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    pub fn with_defaults() -> BrowserResult<Self> {
        Self::new(ClientConfig::default())
    }

    async fn fetch_inner(&self, url: &Url) -> BrowserResult<FetchedDocument> {
        debug!(%url, "fetching");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| BrowserError::network(format!("request to {url} failed: {e}")))?;

        let status = response.status().as_u16();
        let final_url = response.url().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| BrowserError::network(format!("failed to read body from {url}: {e}")))?;

        if status != 200 {
            warn!(%final_url, status, "non-success response");
        }
        debug!(%final_url, status, bytes = body.len(), "fetch complete");
        Ok(FetchedDocument::new(final_url, status, body))
    }
}

impl Fetcher for HttpClient {
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, BrowserResult<FetchedDocument>> {
        Box::pin(self.fetch_inner(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.user_agent.starts_with("willow-browser/"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_redirects, 10);
    }

    #[test]
    fn test_client_builds() {
        assert!(HttpClient::with_defaults().is_ok());
    }
}
