//! Navigation history.

use url::Url;

/// Linear back/forward history.
///
/// Navigating to a new URL truncates any forward entries, the same way
/// mainstream browsers discard the forward stack on a fresh navigation.
#[derive(Clone, Debug, Default)]
pub struct NavigationHistory {
    entries: Vec<Url>,
    current: Option<usize>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh navigation.
    pub fn push(&mut self, url: Url) {
        if let Some(current) = self.current {
            self.entries.truncate(current + 1);
        }
        self.entries.push(url);
        self.current = Some(self.entries.len() - 1);
    }

    /// URL currently shown, if any.
    pub fn current(&self) -> Option<&Url> {
        self.entries.get(self.current?)
    }

    pub fn can_go_back(&self) -> bool {
        self.current.is_some_and(|c| c > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        self.current
            .is_some_and(|c| c + 1 < self.entries.len())
    }

    /// Step back, returning the new current URL.
    pub fn back(&mut self) -> Option<&Url> {
        let current = self.current?;
        if current == 0 {
            return None;
        }
        self.current = Some(current - 1);
        self.entries.get(current - 1)
    }

    /// Step forward, returning the new current URL.
    pub fn forward(&mut self) -> Option<&Url> {
        let current = self.current?;
        if current + 1 >= self.entries.len() {
            return None;
        }
        self.current = Some(current + 1);
        self.entries.get(current + 1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
