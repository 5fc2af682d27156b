//! Layout engine.
//!
//! Converts a DOM tree into a display list of positioned, styled words.
//! Text is broken into lines against a fixed page width; words on one line
//! share a baseline computed from the tallest style on that line. Font
//! measurement is injected through [`FontMetricsProvider`], so the engine
//! itself stays a pure computation.

pub mod display_list;
pub mod engine;
pub mod fonts;
pub mod style;

pub use display_list::{DisplayItem, DisplayList};
pub use engine::{layout_document, LayoutConfig, LayoutEngine};
pub use fonts::{FontMetrics, FontMetricsProvider, HeuristicFontMetrics};
pub use style::{FontSlant, FontWeight, TextStyle};
