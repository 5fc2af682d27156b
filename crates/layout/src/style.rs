//! Text style state threaded through layout.

use serde::{Deserialize, Serialize};

/// Font weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font slant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontSlant {
    #[default]
    Roman,
    Italic,
}

/// The resolved style in effect for a run of text.
///
/// Threaded by value through the layout traversal: an element's style
/// changes apply to a copy passed to its children, so the parent's style is
/// restored automatically when the recursion returns. Each display item
/// captures the style it was laid out under.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub slant: FontSlant,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            weight: FontWeight::Regular,
            slant: FontSlant::Roman,
        }
    }
}

impl TextStyle {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }

    #[inline]
    pub fn is_italic(&self) -> bool {
        self.slant == FontSlant::Italic
    }

    /// Style in effect inside the given element.
    pub fn opened(self, tag: &str) -> Self {
        match tag {
            "i" | "em" => Self {
                slant: FontSlant::Italic,
                ..self
            },
            "b" | "strong" => Self {
                weight: FontWeight::Bold,
                ..self
            },
            "small" => Self {
                size: self.size - 2.0,
                ..self
            },
            "big" => Self {
                size: self.size + 4.0,
                ..self
            },
            _ => self,
        }
    }
}
