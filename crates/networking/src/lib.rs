//! Document fetching.
//!
//! Defines the [`Fetcher`] capability the pipeline loads documents through,
//! plus the default [`HttpClient`] implementation backed by reqwest. Fetch
//! results carry the raw status and body; interpreting them (non-200,
//! undecodable bytes) is the pipeline's job.

pub mod client;
pub mod response;

pub use client::{ClientConfig, HttpClient};
pub use response::FetchedDocument;

use common::BrowserResult;
use futures::future::BoxFuture;
use url::Url;

/// Capability to fetch a document by URL.
///
/// Returns `Err` only for transport-level failures (connection, timeout);
/// HTTP error statuses come back as a successful fetch carrying the status.
pub trait Fetcher: Send + Sync {
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, BrowserResult<FetchedDocument>>;
}
