//! The parse/layout pipeline.

use common::BrowserResult;
use layout::{layout_document, DisplayList, FontMetricsProvider, LayoutConfig};
use std::time::Instant;
use tracing::debug;

/// Turn HTML text into a display list.
///
/// Pure and non-suspending: each stage consumes its predecessor's fully
/// materialized output, so concurrent calls over different documents are
/// safe.
pub fn render_document<P: FontMetricsProvider + ?Sized>(
    html: &str,
    provider: &P,
    config: LayoutConfig,
) -> BrowserResult<DisplayList> {
    let start = Instant::now();
    let tree = html_parser::parse_html(html);
    let parsed_at = Instant::now();
    let display_list = layout_document(&tree, provider, config)?;
    debug!(
        nodes = tree.len(),
        items = display_list.len(),
        parse_ms = parsed_at.duration_since(start).as_millis() as u64,
        layout_ms = parsed_at.elapsed().as_millis() as u64,
        "document rendered"
    );
    Ok(display_list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout::{FontMetrics, HeuristicFontMetrics, TextStyle};

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

    #[test]
    fn test_render_simple_document() {
        let list = render_document(
            "<p>hello world</p>",
            &HeuristicFontMetrics,
            LayoutConfig::default(),
        )
        .unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_configured_font_size_reaches_display_items() {
        let config = crate::BrowserConfig::default()
            .with_font_size(32.0)
            .layout_config();
        let list = render_document("x", &HeuristicFontMetrics, config).unwrap();
        assert_eq!(list.items[0].style.size, 32.0);
    }

    #[test]
    fn test_render_malformed_document() {
        // The parser absorbs broken markup; rendering never fails on it.
        let list = render_document(
            "</div><b>un<closed",
            &HeuristicFontMetrics,
            LayoutConfig::default(),
        )
        .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.items[0].text, "un");
    }

    #[test]
    fn test_bold_run_shares_baseline_with_plain_text() {
        // Narrow page that fits both words on a single line.
        let config = LayoutConfig {
            page_width: 110.0,
            margin: 13.0,
            ..LayoutConfig::default()
        };
        let list = render_document("<b>Hi</b> there.", &FixedMetrics, config).unwrap();
        assert_eq!(list.len(), 2);

        let (hi, there) = (&list.items[0], &list.items[1]);
        assert_eq!(hi.text, "Hi");
        assert!(hi.style.is_bold());
        assert_eq!(there.text, "there.");
        assert!(!there.style.is_bold());

        // Same metrics for both styles, so the shared baseline means equal y.
        assert_eq!(hi.position.y, there.position.y);
        assert_eq!(hi.position.x, 13.0);
        assert_eq!(there.position.x, 28.0);
    }

    #[test]
    fn test_render_empty_document() {
        let list =
            render_document("", &HeuristicFontMetrics, LayoutConfig::default()).unwrap();
        assert!(list.is_empty());
    }
}
