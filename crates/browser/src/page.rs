//! Page state and navigation.

use crate::config::BrowserConfig;
use crate::history::NavigationHistory;
use crate::pipeline::render_document;
use common::BrowserResult;
use layout::{DisplayList, FontMetricsProvider};
use networking::Fetcher;
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// Why a navigation produced nothing to display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoContentReason {
    /// Transport-level failure (connection, timeout).
    Transport(String),
    /// Server answered with a non-200 status.
    HttpStatus(u16),
    /// Body was not valid UTF-8.
    Encoding,
}

impl fmt::Display for NoContentReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "transport failure: {msg}"),
            Self::HttpStatus(status) => write!(f, "server returned status {status}"),
            Self::Encoding => f.write_str("body is not valid UTF-8"),
        }
    }
}

/// Result of one navigation.
///
/// `NoContent` is a committed navigation that shows an empty page; it is
/// deliberately distinct from `Loaded` with an empty display list, which
/// means the document itself was empty.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    /// Document fetched, parsed, and laid out.
    Loaded(DisplayList),
    /// Fetch did not yield usable content; an empty page was committed.
    NoContent(NoContentReason),
    /// A newer navigation started while this one was in flight; nothing
    /// was committed.
    Superseded,
}

struct PageState {
    url: Option<Url>,
    display_list: DisplayList,
    history: NavigationHistory,
}

/// One browsing context.
///
/// Navigation is single-flight with latest-wins semantics: every call to
/// [`Page::navigate`] bumps an epoch counter, and a fetch that finishes
/// under a stale epoch is discarded instead of committed. At most one
/// navigation's result ever reaches visible state.
pub struct Page<F: Fetcher> {
    fetcher: F,
    provider: Arc<dyn FontMetricsProvider + Send + Sync>,
    config: BrowserConfig,
    epoch: AtomicU64,
    state: RwLock<PageState>,
}

impl<F: Fetcher> Page<F> {
    pub fn new(
        fetcher: F,
        provider: Arc<dyn FontMetricsProvider + Send + Sync>,
        config: BrowserConfig,
    ) -> Self {
        Self {
            fetcher,
            provider,
            config,
            epoch: AtomicU64::new(0),
            state: RwLock::new(PageState {
                url: None,
                display_list: DisplayList::new(),
                history: NavigationHistory::new(),
            }),
        }
    }

    /// Navigate to a URL, superseding any in-flight navigation.
    pub async fn navigate(&self, url: Url) -> BrowserResult<LoadOutcome> {
        self.load(url, true).await
    }

    /// Reload the previous history entry, if there is one.
    pub async fn go_back(&self) -> Option<BrowserResult<LoadOutcome>> {
        let url = self.state.write().history.back().cloned()?;
        Some(self.load(url, false).await)
    }

    /// Reload the next history entry, if there is one.
    pub async fn go_forward(&self) -> Option<BrowserResult<LoadOutcome>> {
        let url = self.state.write().history.forward().cloned()?;
        Some(self.load(url, false).await)
    }

    async fn load(&self, url: Url, push_history: bool) -> BrowserResult<LoadOutcome> {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        info!(%url, epoch, "navigation started");

        let fetched = self.fetcher.fetch(&url).await;
        if self.is_stale(epoch) {
            debug!(%url, epoch, "fetch superseded, discarding");
            return Ok(LoadOutcome::Superseded);
        }

        let outcome = match fetched {
            Err(e) => LoadOutcome::NoContent(NoContentReason::Transport(e.to_string())),
            Ok(doc) if !doc.is_success() => {
                LoadOutcome::NoContent(NoContentReason::HttpStatus(doc.status))
            }
            Ok(doc) => match doc.text() {
                Err(_) => LoadOutcome::NoContent(NoContentReason::Encoding),
                // Layout failure is a configuration error and propagates.
                Ok(html) => LoadOutcome::Loaded(render_document(
                    html,
                    &*self.provider,
                    self.config.layout_config(),
                )?),
            },
        };

        let mut state = self.state.write();
        if self.is_stale(epoch) {
            debug!(%url, epoch, "navigation superseded before commit");
            return Ok(LoadOutcome::Superseded);
        }
        state.display_list = match &outcome {
            LoadOutcome::Loaded(list) => list.clone(),
            _ => DisplayList::new(),
        };
        state.url = Some(url.clone());
        if push_history {
            state.history.push(url.clone());
        }
        info!(%url, epoch, items = state.display_list.len(), "navigation committed");
        Ok(outcome)
    }

    fn is_stale(&self, epoch: u64) -> bool {
        self.epoch.load(Ordering::SeqCst) != epoch
    }

    /// Display list of the committed page.
    pub fn display_list(&self) -> DisplayList {
        self.state.read().display_list.clone()
    }

    /// URL of the committed page.
    pub fn current_url(&self) -> Option<Url> {
        self.state.read().url.clone()
    }

    pub fn can_go_back(&self) -> bool {
        self.state.read().history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.state.read().history.can_go_forward()
    }
}
