//! Browser configuration.

use common::Size;
use layout::LayoutConfig;
use serde::{Deserialize, Serialize};

/// Top-level browser configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Page width used for line breaking, in pixels.
    pub page_width: f32,
    /// Viewport height, in pixels. Layout ignores it; a renderer uses it
    /// for culling against the scroll offset.
    pub viewport_height: f32,
    /// Uniform page margin, in pixels.
    pub margin: f32,
    /// Base font size, in points.
    pub font_size: f32,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            page_width: 800.0,
            viewport_height: 600.0,
            margin: 13.0,
            font_size: 16.0,
        }
    }
}

impl BrowserConfig {
    pub fn with_page_width(mut self, width: f32) -> Self {
        self.page_width = width;
        self
    }

    pub fn with_viewport_height(mut self, height: f32) -> Self {
        self.viewport_height = height;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Page geometry and base style for the layout engine.
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            page_width: self.page_width,
            margin: self.margin,
            font_size: self.font_size,
        }
    }

    /// Viewport dimensions, for renderers that cull against scroll.
    pub fn viewport(&self) -> Size {
        Size::new(self.page_width, self.viewport_height)
    }
}
