//! Flattened rendering for non-interactive output targets.
//!
//! Every slot becomes a plain titled section in document order, shared
//! content first. Nothing here depends on the stylesheet or on client-side
//! state, so the output survives PDF export, text extraction, and search
//! indexing with all content visible.

use std::fmt::Write;

use ftabs_model::{Document, Group};

use crate::util::{escape_html, render_nodes};

/// Render one resolved group as flat sections.
pub(crate) fn render_flattened(doc: &Document, group: &Group) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"ft-flattened\">\n");

    if !group.shared.is_empty() {
        out.push_str("<div class=\"ft-shared\">\n");
        out.push_str(&render_nodes(doc, &group.shared));
        out.push_str("</div>\n");
    }

    for slot in &group.slots {
        out.push_str("<section class=\"ft-section\">\n");
        let _ = writeln!(
            out,
            r#"<h4 class="ft-section-title">{}</h4>"#,
            escape_html(&slot.name)
        );
        out.push_str(&render_nodes(doc, &slot.content));
        out.push_str("</section>\n");
    }

    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftabs_model::{NodeKind, Slot};

    #[test]
    fn test_every_slot_becomes_a_section() {
        let mut doc = Document::new();
        let root = doc.root();
        let shared = doc.push(NodeKind::Markdown("Shared intro.".to_owned()), root);
        let a = doc.push(NodeKind::Markdown("Body A.".to_owned()), root);
        let b = doc.push(NodeKind::Markdown("Body B.".to_owned()), root);
        let group = Group {
            id: "filter-group-1".to_owned(),
            legend: "Pick".to_owned(),
            slots: vec![
                Slot {
                    name: "A".to_owned(),
                    aria_label: "A".to_owned(),
                    is_default: true,
                    ordinal: 0,
                    content: vec![a],
                },
                Slot {
                    name: "B".to_owned(),
                    aria_label: "B".to_owned(),
                    is_default: false,
                    ordinal: 1,
                    content: vec![b],
                },
            ],
            shared: vec![shared],
        };

        let html = render_flattened(&doc, &group);
        assert_eq!(html.matches("<section class=\"ft-section\">").count(), 2);
        assert!(html.contains(">A</h4>"));
        assert!(html.contains(">B</h4>"));
        assert!(html.contains("Body A."));
        assert!(html.contains("Body B."));
        // Shared content appears exactly once, before the sections.
        assert_eq!(html.matches("Shared intro.").count(), 1);
        assert!(html.find("ft-shared").unwrap() < html.find("ft-section").unwrap());
        // No interactive machinery in flattened output.
        assert!(!html.contains("radio"));
        assert!(!html.contains("data-slot-index"));
    }
}
