//! Top-level engine wiring.

use crate::config::BrowserConfig;
use crate::page::{LoadOutcome, Page};
use common::BrowserResult;
use layout::{DisplayList, HeuristicFontMetrics};
use networking::HttpClient;
use std::sync::Arc;
use url::Url;

/// The assembled browser: HTTP fetcher, font metrics, and one page.
pub struct BrowserEngine {
    page: Page<HttpClient>,
}

impl BrowserEngine {
    pub fn new(config: BrowserConfig) -> BrowserResult<Self> {
        let fetcher = HttpClient::with_defaults()?;
        let page = Page::new(fetcher, Arc::new(HeuristicFontMetrics), config);
        Ok(Self { page })
    }

    /// Load a URL or bare hostname typed by the user.
    pub async fn load(&self, input: &str) -> BrowserResult<LoadOutcome> {
        let url = normalize_url(input)?;
        self.page.navigate(url).await
    }

    pub async fn go_back(&self) -> Option<BrowserResult<LoadOutcome>> {
        self.page.go_back().await
    }

    pub async fn go_forward(&self) -> Option<BrowserResult<LoadOutcome>> {
        self.page.go_forward().await
    }

    pub fn display_list(&self) -> DisplayList {
        self.page.display_list()
    }

    pub fn current_url(&self) -> Option<Url> {
        self.page.current_url()
    }
}

/// Turn address-bar input into an absolute URL, assuming `http://` when no
/// scheme was typed.
pub fn normalize_url(input: &str) -> BrowserResult<Url> {
    match Url::parse(input) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Ok(Url::parse(&format!("http://{input}"))?)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_full_url() {
        let url = normalize_url("https://example.com/page").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_normalize_bare_hostname() {
        let url = normalize_url("example.com").unwrap();
        assert_eq!(url.as_str(), "http://example.com/");
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert!(normalize_url("not a url at all").is_err());
    }
}
