//! The two-phase document pipeline.
//!
//! Phase one parses each document into a draft tree as it is read. Phase
//! two runs once per document after the whole build is known: every draft
//! group is validated, rendered for the active output format, and replaced
//! in the tree with resolved HTML. The build context outlives both phases
//! and emits the stylesheet when [`BuildContext::finish`] is called.

use ftabs_model::{BuilderFormat, Document, NodeId, NodeKind};

use crate::context::BuildContext;
use crate::parser::SlotParser;
use crate::util::render_nodes;
use crate::{details, flat, html, validate};

/// Parse one document's markup into a draft tree, reporting any parse
/// diagnostics to the build context.
pub fn parse_document(input: &str, ctx: &mut BuildContext) -> Document {
    let mut parser = SlotParser::new();
    let doc = parser.parse(input);
    for diag in parser.take_diagnostics() {
        ctx.report(&diag);
    }
    doc
}

/// Resolve every draft group and collapsible block in a document for the
/// active output format.
///
/// Draft nodes are processed innermost first, so by the time an outer block
/// renders its content, anything nested inside it is already plain HTML. A
/// group that fails validation is replaced by a visible error marker instead
/// of disappearing.
pub fn resolve_document(doc: &mut Document, ctx: &mut BuildContext) {
    let mut drafts = Vec::new();
    collect_drafts(doc, doc.root(), &mut drafts);

    for node in drafts {
        if let NodeKind::Details(meta) = doc.kind(node).clone() {
            let content = doc.take_children(node);
            let collapsible = ctx.format() == BuilderFormat::Interactive
                && ctx.config().collapsible_enabled;
            let html = details::render_details(doc, &content, &meta, collapsible);
            doc.replace(node, NodeKind::Html(html));
            continue;
        }

        let html = match validate::normalize(doc, node, ctx) {
            Ok(group) => {
                if ctx.config().debug_mode {
                    tracing::debug!(
                        group = %group.id,
                        slots = group.slots.len(),
                        legend = %group.legend,
                        "resolved filter group"
                    );
                }
                match ctx.format() {
                    BuilderFormat::Interactive => html::render_interactive(doc, &group, ctx),
                    BuilderFormat::Flattened => flat::render_flattened(doc, &group),
                }
            }
            Err(diag) => format!(
                r#"<div class="ft-error">filter-tabs: {}</div>"#,
                crate::util::escape_html(&diag.to_string())
            ),
        };
        doc.replace(node, NodeKind::Html(html));
    }
}

/// Collect draft group and details nodes in post-order, innermost first.
fn collect_drafts(doc: &Document, node: NodeId, out: &mut Vec<NodeId>) {
    for &child in doc.children(node) {
        collect_drafts(doc, child, out);
    }
    if matches!(doc.kind(node), NodeKind::Group(_) | NodeKind::Details(_)) {
        out.push(node);
    }
}

/// Serialize a resolved document to HTML.
#[must_use]
pub fn render_document(doc: &Document) -> String {
    render_nodes(doc, doc.children(doc.root()))
}
