//! Browser engine: ties fetching, parsing, and layout into navigations.

pub mod config;
pub mod engine;
pub mod history;
pub mod page;
pub mod pipeline;

pub use config::BrowserConfig;
pub use engine::BrowserEngine;
pub use history::NavigationHistory;
pub use page::{LoadOutcome, NoContentReason, Page};
pub use pipeline::render_document;
