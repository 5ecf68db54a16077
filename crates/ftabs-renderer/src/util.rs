//! Shared helpers for both renderers.

use std::sync::LazyLock;

use regex::Regex;

use ftabs_model::{Document, NodeId, NodeKind};

/// Matches a trailing `(default)` marker on a slot name, case insensitive
/// and whitespace tolerant.
static DEFAULT_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*?)\s*\(\s*default\s*\)\s*$").expect("default marker pattern is valid")
});

/// Matches a trailing `(expanded)` marker on a details title.
static EXPANDED_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*?)\s*\(\s*expanded\s*\)\s*$").expect("expanded marker pattern is valid")
});

/// Split a slot-name argument into the bare name and its default flag.
///
/// `"Rust (default)"` → `("Rust", true)`; `"Rust"` → `("Rust", false)`.
pub(crate) fn split_default_marker(argument: &str) -> (String, bool) {
    split_marker(argument, &DEFAULT_MARKER)
}

/// Split a details title into the bare title and its expanded flag.
pub(crate) fn split_expanded_marker(argument: &str) -> (String, bool) {
    split_marker(argument, &EXPANDED_MARKER)
}

fn split_marker(argument: &str, marker: &Regex) -> (String, bool) {
    let trimmed = argument.trim();
    if let Some(caps) = marker.captures(trimmed) {
        let name = caps[1].trim();
        if !name.is_empty() {
            return (name.to_owned(), true);
        }
    }
    (trimmed.to_owned(), false)
}

/// Escape text for safe inclusion in HTML attribute or element content.
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a markdown fragment to HTML.
pub(crate) fn markdown_to_html(markdown: &str) -> String {
    let parser = pulldown_cmark::Parser::new(markdown);
    let mut html = String::with_capacity(markdown.len() * 2);
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

/// Render a sequence of document nodes to HTML.
///
/// Markdown runs go through pulldown-cmark; already-resolved HTML is emitted
/// verbatim. Draft nodes render their children, which only happens if a
/// caller serializes a document before resolving it.
pub(crate) fn render_nodes(doc: &Document, ids: &[NodeId]) -> String {
    let mut out = String::new();
    for &id in ids {
        match doc.kind(id) {
            NodeKind::Markdown(md) => out.push_str(&markdown_to_html(md)),
            NodeKind::Html(html) => {
                out.push_str(html);
                out.push('\n');
            }
            NodeKind::Group(_) | NodeKind::Slot(_) | NodeKind::Details(_) => {
                out.push_str(&render_nodes(doc, doc.children(id)));
            }
            NodeKind::Root => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_default_marker() {
        assert_eq!(split_default_marker("Rust"), ("Rust".to_owned(), false));
        assert_eq!(
            split_default_marker("Rust (default)"),
            ("Rust".to_owned(), true)
        );
        assert_eq!(
            split_default_marker("  Rust ( DEFAULT ) "),
            ("Rust".to_owned(), true)
        );
        // A bare marker with no name is kept literally.
        assert_eq!(
            split_default_marker("(default)"),
            ("(default)".to_owned(), false)
        );
    }

    #[test]
    fn test_split_expanded_marker() {
        assert_eq!(
            split_expanded_marker("Advanced setup (expanded)"),
            ("Advanced setup".to_owned(), true)
        );
        assert_eq!(
            split_expanded_marker("Advanced setup"),
            ("Advanced setup".to_owned(), false)
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn test_markdown_to_html() {
        let html = markdown_to_html("**bold** text");
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_render_nodes_mixes_markdown_and_html() {
        let mut doc = Document::new();
        let root = doc.root();
        let md = doc.push(NodeKind::Markdown("# Title".to_owned()), root);
        let html = doc.push(NodeKind::Html("<hr>".to_owned()), root);

        let out = render_nodes(&doc, &[md, html]);
        assert!(out.contains("<h1>Title</h1>"));
        assert!(out.contains("<hr>"));
    }
}
