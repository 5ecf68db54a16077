//! Interactive HTML rendering for one resolved group.
//!
//! Emits a radio-group widget that works without JavaScript: screen-reader
//! only radio inputs drive panel visibility through the generated
//! stylesheet, and the markup carries the ARIA relationships a tab widget
//! needs (radiogroup, tabpanel, aria-controls, aria-describedby).

use std::fmt::Write;

use ftabs_model::{Document, Group};

use crate::context::BuildContext;
use crate::ids::IdGenerator;
use crate::util::{escape_html, render_nodes};

/// Render one resolved group as the interactive widget.
pub(crate) fn render_interactive(doc: &Document, group: &Group, ctx: &BuildContext) -> String {
    let ids = IdGenerator::new(&group.id);
    let cap = ctx.config().selector_cap;
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<div class="ft-container" role="region" aria-labelledby="{legend}">"#,
        legend = ids.legend_id()
    );
    let _ = writeln!(out, r#"<fieldset class="ft-fieldset" role="radiogroup">"#);
    let _ = writeln!(
        out,
        r#"<legend class="ft-legend" id="{id}">{text}</legend>"#,
        id = ids.legend_id(),
        text = escape_html(&group.legend)
    );

    out.push_str("<div class=\"ft-tab-bar\">\n");
    for slot in &group.slots {
        let radio = ids.radio_id(slot.ordinal);
        let desc = ids.desc_id(slot.ordinal);
        let panel = ids.panel_id(slot.ordinal);

        let mut attrs = format!(
            r#"type="radio" class="sr-only" id="{radio}" name="{name}""#,
            name = group.id
        );
        if slot.ordinal < cap {
            let _ = write!(attrs, r#" data-slot-index="{}""#, slot.ordinal);
        }
        let _ = write!(
            attrs,
            r#" aria-describedby="{desc}" aria-controls="{panel}" aria-label="{label}""#,
            label = escape_html(&slot.aria_label)
        );
        if slot.is_default {
            attrs.push_str(" checked");
        }
        let _ = writeln!(out, "<input {attrs}>");
        let _ = writeln!(
            out,
            r#"<label for="{radio}">{name}</label>"#,
            name = escape_html(&slot.name)
        );
        let _ = writeln!(
            out,
            r#"<div id="{desc}" class="sr-only">Show content for {name}</div>"#,
            name = escape_html(&slot.name)
        );
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"ft-content\">\n");
    if !group.shared.is_empty() {
        out.push_str(r#"<div class="ft-panel ft-panel-shared" data-filter="shared">"#);
        out.push('\n');
        out.push_str(&render_nodes(doc, &group.shared));
        out.push_str("</div>\n");
    }
    for slot in &group.slots {
        let mut attrs = format!(
            r#"class="ft-panel{overflow}" id="{panel}" role="tabpanel" aria-labelledby="{radio}" tabindex="0""#,
            overflow = if slot.ordinal >= cap && slot.is_default {
                " ft-overflow-default"
            } else {
                ""
            },
            panel = ids.panel_id(slot.ordinal),
            radio = ids.radio_id(slot.ordinal),
        );
        if slot.ordinal < cap {
            let _ = write!(attrs, r#" data-slot-index="{}""#, slot.ordinal);
        }
        let _ = writeln!(out, "<div {attrs}>");
        out.push_str(&render_nodes(doc, &slot.content));
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");

    out.push_str("</fieldset>\n");
    out.push_str("</div>");
    out
}
