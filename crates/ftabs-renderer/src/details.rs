//! Collapsible block rendering.
//!
//! A `::: details` block becomes a native `<details>`/`<summary>` element,
//! collapsible without any scripting. Non-interactive targets (and builds
//! that disable the feature) get a plain always-visible section instead, so
//! no content is ever lost.

use std::fmt::Write;

use ftabs_model::{DetailsMeta, Document, NodeId};

use crate::util::{escape_html, render_nodes};

const FALLBACK_SUMMARY: &str = "Details";

/// Render one collapsible block. `collapsible` selects the native
/// `<details>` form; otherwise the content renders expanded and static.
pub(crate) fn render_details(
    doc: &Document,
    content: &[NodeId],
    meta: &DetailsMeta,
    collapsible: bool,
) -> String {
    let summary = escape_html(meta.summary.as_deref().unwrap_or(FALLBACK_SUMMARY));
    let mut out = String::new();

    if collapsible {
        let _ = writeln!(
            out,
            "<details class=\"collapsible-section\"{open}>",
            open = if meta.expanded { " open" } else { "" }
        );
        let _ = writeln!(
            out,
            r#"<summary><span class="custom-arrow">▶</span>{summary}</summary>"#
        );
    } else {
        out.push_str("<div class=\"collapsible-section\">\n");
        let _ = writeln!(out, r#"<p class="collapsible-summary">{summary}</p>"#);
    }

    out.push_str("<div class=\"collapsible-content\">\n");
    out.push_str(&render_nodes(doc, content));
    out.push_str("</div>\n");

    out.push_str(if collapsible { "</details>" } else { "</div>" });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftabs_model::NodeKind;

    fn body(doc: &mut Document) -> Vec<NodeId> {
        let root = doc.root();
        vec![doc.push(NodeKind::Markdown("Hidden body.".to_owned()), root)]
    }

    #[test]
    fn test_collapsible_form() {
        let mut doc = Document::new();
        let content = body(&mut doc);
        let meta = DetailsMeta {
            summary: Some("Fine print".to_owned()),
            expanded: false,
            line: 1,
        };

        let html = render_details(&doc, &content, &meta, true);
        assert!(html.starts_with("<details class=\"collapsible-section\">"));
        assert!(html.contains(r#"<span class="custom-arrow">▶</span>Fine print</summary>"#));
        assert!(html.contains("collapsible-content"));
        assert!(html.contains("Hidden body."));
        assert!(!html.contains(" open"));
    }

    #[test]
    fn test_expanded_starts_open() {
        let mut doc = Document::new();
        let content = body(&mut doc);
        let meta = DetailsMeta {
            summary: Some("Fine print".to_owned()),
            expanded: true,
            line: 1,
        };

        let html = render_details(&doc, &content, &meta, true);
        assert!(html.starts_with("<details class=\"collapsible-section\" open>"));
    }

    #[test]
    fn test_missing_summary_falls_back() {
        let mut doc = Document::new();
        let content = body(&mut doc);
        let meta = DetailsMeta::default();

        let html = render_details(&doc, &content, &meta, true);
        assert!(html.contains("</span>Details</summary>"));
    }

    #[test]
    fn test_static_form_keeps_content_visible() {
        let mut doc = Document::new();
        let content = body(&mut doc);
        let meta = DetailsMeta {
            summary: Some("Fine print".to_owned()),
            expanded: false,
            line: 1,
        };

        let html = render_details(&doc, &content, &meta, false);
        assert!(!html.contains("<details"));
        assert!(html.contains(r#"<p class="collapsible-summary">Fine print</p>"#));
        assert!(html.contains("Hidden body."));
    }

    #[test]
    fn test_summary_is_escaped() {
        let mut doc = Document::new();
        let content = body(&mut doc);
        let meta = DetailsMeta {
            summary: Some("<b>bold</b>".to_owned()),
            expanded: false,
            line: 1,
        };

        let html = render_details(&doc, &content, &meta, true);
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }
}
