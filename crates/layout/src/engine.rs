//! Line-breaking layout over the DOM tree.

use crate::display_list::{DisplayItem, DisplayList};
use crate::fonts::{FontMetrics, FontMetricsProvider};
use crate::style::TextStyle;
use common::{BrowserResult, Point};
use dom::{DomTree, NodeData, NodeId};
use tracing::debug;

/// Page geometry for one layout pass.
#[derive(Clone, Copy, Debug)]
pub struct LayoutConfig {
    /// Total page width in pixels.
    pub page_width: f32,
    /// Uniform margin: left/top start offset and right break limit.
    pub margin: f32,
    /// Base font size the traversal starts from.
    pub font_size: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: 800.0,
            margin: 13.0,
            font_size: 16.0,
        }
    }
}

/// A word placed on the in-progress line, waiting for its baseline.
struct LineItem {
    x: f32,
    word: String,
    style: TextStyle,
    metrics: FontMetrics,
}

/// Single-pass layout engine.
///
/// One engine performs one pass over one tree; all accumulation state is
/// owned by the pass, so independent layouts may run concurrently.
pub struct LayoutEngine<'a, P: FontMetricsProvider + ?Sized> {
    provider: &'a P,
    config: LayoutConfig,
    cursor_x: f32,
    cursor_y: f32,
    line: Vec<LineItem>,
    items: Vec<DisplayItem>,
}

impl<'a, P: FontMetricsProvider + ?Sized> LayoutEngine<'a, P> {
    pub fn new(provider: &'a P, config: LayoutConfig) -> Self {
        Self {
            provider,
            config,
            cursor_x: config.margin,
            cursor_y: config.margin,
            line: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Lay out the whole tree into a display list.
    pub fn layout(mut self, tree: &DomTree) -> BrowserResult<DisplayList> {
        if let Some(root) = tree.root() {
            let base = TextStyle::new(self.config.font_size);
            self.walk(tree, root, base)?;
        }
        self.flush();
        debug!(items = self.items.len(), "layout pass complete");
        Ok(DisplayList { items: self.items })
    }

    fn walk(&mut self, tree: &DomTree, id: NodeId, style: TextStyle) -> BrowserResult<()> {
        let Some(node) = tree.get(id) else {
            return Ok(());
        };
        match &node.data {
            NodeData::Text { content } => {
                for word in content.split_whitespace() {
                    self.place_word(word, style)?;
                }
                Ok(())
            }
            NodeData::Element(data) => {
                let tag = data.tag_name.as_str();
                self.open_tag(tag);
                let inner = style.opened(tag);
                for &child in tree.children(id) {
                    self.walk(tree, child, inner)?;
                }
                self.close_tag(tag, style)
            }
        }
    }

    fn open_tag(&mut self, tag: &str) {
        if tag == "br" {
            self.flush();
        }
    }

    fn close_tag(&mut self, tag: &str, style: TextStyle) -> BrowserResult<()> {
        if tag == "p" {
            self.flush();
            // Paragraph separation: one blank line under the closing style.
            let metrics = self.provider.metrics(&style)?;
            self.cursor_y += metrics.line_height();
        }
        Ok(())
    }

    /// Place one word on the current line.
    ///
    /// The overflow check runs after the word is placed and the cursor
    /// advanced, so an overflowing word stays on the line it overflows and
    /// only the next word starts fresh. This ordering is contractual.
    fn place_word(&mut self, word: &str, style: TextStyle) -> BrowserResult<()> {
        let width = self.provider.measure(word, &style)?;
        let space_width = self.provider.measure(" ", &style)?;
        let metrics = self.provider.metrics(&style)?;

        self.line.push(LineItem {
            x: self.cursor_x,
            word: word.to_string(),
            style,
            metrics,
        });
        self.cursor_x += width + space_width;

        if self.cursor_x + width > self.config.page_width - self.config.margin {
            self.flush();
        }
        Ok(())
    }

    /// Emit the buffered line on a shared baseline and move the cursor down.
    fn flush(&mut self) {
        if self.line.is_empty() {
            return;
        }
        let max_ascent = self
            .line
            .iter()
            .map(|item| item.metrics.ascent)
            .fold(0.0f32, f32::max);
        let max_descent = self
            .line
            .iter()
            .map(|item| item.metrics.descent)
            .fold(0.0f32, f32::max);
        let baseline = self.cursor_y + 1.25 * max_ascent;

        for item in self.line.drain(..) {
            self.items.push(DisplayItem {
                position: Point::new(item.x, baseline - item.metrics.ascent),
                text: item.word,
                style: item.style,
            });
        }

        self.cursor_y = baseline + 1.25 * max_descent;
        self.cursor_x = self.config.margin;
    }
}

/// Lay out `tree` with the given provider and page geometry.
pub fn layout_document<P: FontMetricsProvider + ?Sized>(
    tree: &DomTree,
    provider: &P,
    config: LayoutConfig,
) -> BrowserResult<DisplayList> {
    LayoutEngine::new(provider, config).layout(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::HeuristicFontMetrics;
    use common::BrowserError;
    use html_parser::parse_html;

    /// Width 5 per character, identical vertical metrics for every style.
    struct FixedMetrics;

    impl FontMetricsProvider for FixedMetrics {
        fn measure(&self, text: &str, _style: &TextStyle) -> BrowserResult<f32> {
            Ok(text.chars().count() as f32 * 5.0)
        }

        fn metrics(&self, _style: &TextStyle) -> BrowserResult<FontMetrics> {
            Ok(FontMetrics::new(12.0, 4.0, 2.0))
        }
    }

    struct FailingMetrics;

    impl FontMetricsProvider for FailingMetrics {
        fn measure(&self, _text: &str, _style: &TextStyle) -> BrowserResult<f32> {
            Err(BrowserError::font_metrics("no font loaded"))
        }

        fn metrics(&self, _style: &TextStyle) -> BrowserResult<FontMetrics> {
            Err(BrowserError::font_metrics("no font loaded"))
        }
    }

    fn run(input: &str, config: LayoutConfig) -> DisplayList {
        let tree = parse_html(input);
        layout_document(&tree, &FixedMetrics, config).unwrap()
    }

    #[test]
    fn test_word_count_conservation() {
        let list = run("<p>one two three</p> four", LayoutConfig::default());
        assert_eq!(list.len(), 4);
        let words: Vec<_> = list.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(words, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_empty_document_is_empty_list() {
        assert!(run("", LayoutConfig::default()).is_empty());
        assert!(run("<p>   </p>", LayoutConfig::default()).is_empty());
    }

    #[test]
    fn test_first_word_starts_at_margin() {
        let list = run("hello", LayoutConfig::default());
        assert_eq!(list.items[0].position.x, 13.0);
        // baseline = margin + 1.25 * ascent, word top = baseline - ascent
        assert_eq!(list.items[0].position.y, 13.0 + 1.25 * 12.0 - 12.0);
    }

    #[test]
    fn test_line_break_happens_after_placement() {
        // Widths: "aa" = "bb" = 10, "c" = 5, space = 5. After placing "bb"
        // the cursor sits at 30 and 30 + 10 > 36, so the line breaks even
        // though "c" (30 + 5 <= 36) would still have fit on it.
        let config = LayoutConfig {
            page_width: 36.0,
            margin: 0.0,
            ..LayoutConfig::default()
        };
        let list = run("aa bb c", config);
        assert_eq!(list.len(), 3);
        let (aa, bb, c) = (&list.items[0], &list.items[1], &list.items[2]);
        assert_eq!(aa.position.y, bb.position.y);
        assert_eq!(bb.position.x, 15.0);
        assert!(c.position.y > bb.position.y);
        assert_eq!(c.position.x, 0.0);
    }

    #[test]
    fn test_overflowing_word_kept_on_its_line() {
        // "aaaaa" is wider than the whole page; it is still emitted on the
        // line it overflows, and the next word starts the following line.
        let config = LayoutConfig {
            page_width: 20.0,
            margin: 0.0,
            ..LayoutConfig::default()
        };
        let list = run("aaaaa b", config);
        assert_eq!(list.len(), 2);
        assert_eq!(list.items[0].position.y, 3.0);
        assert_eq!(list.items[1].position.x, 0.0);
        assert_eq!(list.items[1].position.y, 23.0);
    }

    #[test]
    fn test_baseline_alignment_across_sizes() {
        let tree = parse_html("<small>tiny</small> big");
        let provider = HeuristicFontMetrics;
        let list = layout_document(&tree, &provider, LayoutConfig::default()).unwrap();
        assert_eq!(list.len(), 2);

        let baseline_of = |item: &DisplayItem| {
            item.position.y + provider.metrics(&item.style).unwrap().ascent
        };
        assert_eq!(baseline_of(&list.items[0]), baseline_of(&list.items[1]));
        assert_ne!(list.items[0].position.y, list.items[1].position.y);
    }

    #[test]
    fn test_style_restored_after_nested_close() {
        let list = run("<b><b>deep</b></b> after", LayoutConfig::default());
        assert!(list.items[0].style.is_bold());
        assert!(!list.items[1].style.is_bold());
        assert_eq!(list.items[0].style.size, list.items[1].style.size);
    }

    #[test]
    fn test_italic_and_size_deltas_captured() {
        let list = run("<i>slanted</i> <big>large</big>", LayoutConfig::default());
        assert!(list.items[0].style.is_italic());
        assert!(!list.items[1].style.is_italic());
        assert_eq!(list.items[1].style.size, 20.0);
    }

    #[test]
    fn test_br_forces_new_line() {
        let list = run("a<br>b", LayoutConfig::default());
        assert_eq!(list.len(), 2);
        assert_eq!(list.items[0].position.y, 16.0);
        assert_eq!(list.items[1].position.y, 36.0);
        assert_eq!(list.items[1].position.x, 13.0);
    }

    #[test]
    fn test_paragraph_gap() {
        // Line advance is 1.25 * (12 + 4) = 20; the paragraph close adds one
        // line height (12 + 4 + 2 = 18) on top.
        let list = run("<p>a</p><p>b</p>", LayoutConfig::default());
        assert_eq!(list.len(), 2);
        let gap = list.items[1].position.y - list.items[0].position.y;
        assert_eq!(gap, 38.0);
    }

    #[test]
    fn test_base_font_size_seeds_traversal() {
        let config = LayoutConfig {
            font_size: 32.0,
            ..LayoutConfig::default()
        };
        let tree = parse_html("x <small>y</small>");
        let list = layout_document(&tree, &HeuristicFontMetrics, config).unwrap();
        assert_eq!(list.items[0].style.size, 32.0);
        // Deltas apply relative to the configured base.
        assert_eq!(list.items[1].style.size, 30.0);
    }

    #[test]
    fn test_metrics_failure_propagates() {
        let tree = parse_html("<p>word</p>");
        let result = layout_document(&tree, &FailingMetrics, LayoutConfig::default());
        assert!(matches!(result, Err(BrowserError::FontMetrics(_))));
    }
}
