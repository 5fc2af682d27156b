//! Common utilities and types used across the browser engine.

pub mod error;
pub mod geometry;

pub use error::{BrowserError, BrowserResult};
pub use geometry::{Point, Size};
