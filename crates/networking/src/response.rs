//! Fetched document representation.

use bytes::Bytes;
use common::{BrowserError, BrowserResult};
use url::Url;

/// A fetched document: final URL, status, and raw body bytes.
#[derive(Clone, Debug)]
pub struct FetchedDocument {
    /// URL the body was served from, after redirects.
    pub url: Url,
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Bytes,
}

impl FetchedDocument {
    pub fn new(url: Url, status: u16, body: Bytes) -> Self {
        Self { url, status, body }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Decode the body as UTF-8 text.
    ///
    /// Strict: invalid UTF-8 is an error, not replacement characters, so
    /// the caller can distinguish an undecodable page from an empty one.
    pub fn text(&self) -> BrowserResult<&str> {
        std::str::from_utf8(&self.body)
            .map_err(|e| BrowserError::network(format!("response body is not valid UTF-8: {e}")))
    }
}
