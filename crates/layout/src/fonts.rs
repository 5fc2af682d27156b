//! Font measurement capability.

use crate::style::{FontWeight, TextStyle};
use common::BrowserResult;

/// Vertical metrics for a style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the tallest glyph.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the lowest glyph.
    pub descent: f32,
    /// Extra space between consecutive lines.
    pub leading: f32,
}

impl FontMetrics {
    pub fn new(ascent: f32, descent: f32, leading: f32) -> Self {
        Self {
            ascent,
            descent,
            leading,
        }
    }

    /// Full height of one line under this style.
    #[inline]
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.leading
    }
}

/// Source of font measurements, keyed by style.
///
/// Implementations must be pure: the same text and style always produce the
/// same answer. A missing or unmeasurable font is a configuration error and
/// is propagated, never guessed around.
pub trait FontMetricsProvider {
    /// Rendered width of `text` under `style`.
    fn measure(&self, text: &str, style: &TextStyle) -> BrowserResult<f32>;

    /// Vertical metrics for `style`.
    fn metrics(&self, style: &TextStyle) -> BrowserResult<FontMetrics>;
}

/// Approximate metrics derived from font size alone.
///
/// Stands in when no real font backend is wired up: average glyph width is
/// taken as half the font size, with a small widening for bold.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicFontMetrics;

impl FontMetricsProvider for HeuristicFontMetrics {
    fn measure(&self, text: &str, style: &TextStyle) -> BrowserResult<f32> {
        let glyph_width = match style.weight {
            FontWeight::Regular => style.size * 0.5,
            FontWeight::Bold => style.size * 0.55,
        };
        Ok(text.chars().count() as f32 * glyph_width)
    }

    fn metrics(&self, style: &TextStyle) -> BrowserResult<FontMetrics> {
        Ok(FontMetrics::new(
            style.size * 0.75,
            style.size * 0.25,
            style.size * 0.125,
        ))
    }
}
