//! Draft-group validation and normalization.
//!
//! Takes a draft [`NodeKind::Group`] subtree straight from the parser and
//! produces a canonical [`Group`] value, collecting diagnostics along the
//! way. Recoverable problems (duplicate names, empty slots, several default
//! markers) degrade with a warning; a group with no slots at all is fatal.

use ftabs_model::{Diagnostic, Document, Group, NodeId, NodeKind, Slot};

use crate::context::BuildContext;
use crate::util::split_default_marker;

/// Keyword tables for inferring what a group lets the reader choose
/// between. Checked with an exact pass first, then a substring pass.
const CONTENT_TYPES: &[(&[&str], &str)] = &[
    (
        &[
            "python",
            "javascript",
            "java",
            "c++",
            "rust",
            "go",
            "ruby",
            "php",
        ],
        "programming language",
    ),
    (
        &[
            "windows", "mac", "macos", "linux", "ubuntu", "debian", "fedora",
        ],
        "operating system",
    ),
    (
        &["pip", "conda", "npm", "yarn", "cargo", "gem", "composer"],
        "package manager",
    ),
    (
        &["cli", "gui", "terminal", "command", "console", "graphical"],
        "interface",
    ),
    (
        &["development", "staging", "production", "test", "local"],
        "environment",
    ),
    (
        &["source", "binary", "docker", "manual", "automatic"],
        "installation method",
    ),
];

/// Validate and normalize one draft group node into a canonical [`Group`].
///
/// Content node ids are moved out of the draft slots into the returned
/// group; the draft subtree under `group_node` keeps only its skeleton and
/// is expected to be replaced by the caller.
///
/// # Errors
///
/// Returns the fatal [`Diagnostic`] when the group declares no slots, after
/// reporting it to the build context.
pub(crate) fn normalize(
    doc: &mut Document,
    group_node: NodeId,
    ctx: &mut BuildContext,
) -> Result<Group, Diagnostic> {
    let NodeKind::Group(meta) = doc.kind(group_node).clone() else {
        // Caller only hands us group nodes; treat anything else as empty.
        let diag = Diagnostic::EmptyGroup {
            group: String::new(),
        };
        ctx.report(&diag);
        return Err(diag);
    };

    let id = ctx.next_group_id();

    let mut shared = Vec::new();
    let mut slot_nodes = Vec::new();
    for &child in doc.children(group_node) {
        match doc.kind(child) {
            NodeKind::Slot(_) => slot_nodes.push(child),
            _ => shared.push(child),
        }
    }

    let mut slots: Vec<Slot> = Vec::with_capacity(slot_nodes.len());
    for &node in &slot_nodes {
        if let NodeKind::Slot(slot_meta) = doc.kind(node).clone() {
            slots.push(Slot {
                name: slot_meta.name.clone(),
                aria_label: slot_meta.aria_label.unwrap_or(slot_meta.name),
                is_default: slot_meta.is_default,
                ordinal: 0,
                content: doc.take_children(node),
            });
        }
    }

    apply_legacy_args(&id, meta.legacy_args.as_deref(), &mut slots, ctx);

    if slots.is_empty() {
        let diag = Diagnostic::EmptyGroup { group: id };
        ctx.report(&diag);
        return Err(diag);
    }

    for (ordinal, slot) in slots.iter_mut().enumerate() {
        slot.ordinal = ordinal;
    }

    warn_on_duplicates(&id, &slots, ctx);
    for slot in &slots {
        if slot.content.is_empty() {
            ctx.report(&Diagnostic::EmptySlot {
                group: id.clone(),
                name: slot.name.clone(),
            });
        }
    }

    resolve_default(&id, &mut slots, ctx);

    let names: Vec<&str> = slots.iter().map(|s| s.name.as_str()).collect();
    let legend = meta
        .legend
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| synthesize_legend(&names));

    ctx.observe_slot_count(&id, slots.len());

    Ok(Group {
        id,
        legend,
        slots,
        shared,
    })
}

/// Backward compatibility with the comma-list group argument
/// (`:::filter-tabs[A, B (default)]`). Names listed there that have no
/// matching slot block become empty slots, and a `(default)` marker in the
/// list sets the default when no slot block carries one.
fn apply_legacy_args(
    group_id: &str,
    legacy_args: Option<&str>,
    slots: &mut Vec<Slot>,
    ctx: &mut BuildContext,
) {
    let Some(args) = legacy_args else {
        return;
    };

    ctx.report(&Diagnostic::DeprecatedGroupArguments {
        group: group_id.to_owned(),
    });

    for raw in args.split(',') {
        let (name, is_default) = split_default_marker(raw);
        if name.is_empty() {
            continue;
        }
        match slots.iter_mut().find(|s| s.name == name) {
            Some(slot) => {
                if is_default {
                    slot.is_default = true;
                }
            }
            None => slots.push(Slot {
                name: name.clone(),
                aria_label: name,
                is_default,
                ordinal: 0,
                content: Vec::new(),
            }),
        }
    }
}

fn warn_on_duplicates(group_id: &str, slots: &[Slot], ctx: &mut BuildContext) {
    let mut seen: Vec<&str> = Vec::new();
    for slot in slots {
        if seen.contains(&slot.name.as_str()) {
            ctx.report(&Diagnostic::DuplicateSlot {
                group: group_id.to_owned(),
                name: slot.name.clone(),
            });
        } else {
            seen.push(&slot.name);
        }
    }
}

/// Ensure exactly one slot is the default. No marker selects the first
/// slot; several markers keep the first marked slot and warn.
fn resolve_default(group_id: &str, slots: &mut [Slot], ctx: &mut BuildContext) {
    let marked: Vec<usize> = slots
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.is_default.then_some(i))
        .collect();

    match marked.as_slice() {
        [] => slots[0].is_default = true,
        [_] => {}
        [first, rest @ ..] => {
            ctx.report(&Diagnostic::MultipleDefaults {
                group: group_id.to_owned(),
                names: marked
                    .iter()
                    .map(|&i| slots[i].name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                kept: slots[*first].name.clone(),
            });
            for &i in rest {
                slots[i].is_default = false;
            }
        }
    }
}

/// Build a legend from the slot names when the author gave none.
fn synthesize_legend(names: &[&str]) -> String {
    format!(
        "Choose {}: {}",
        infer_content_type(names),
        names.join(", ")
    )
}

/// Infer what kind of thing the slot names enumerate.
///
/// Two passes over the keyword tables: exact match first, then substring
/// match, first table to hit wins. Falls back to a generic "option".
fn infer_content_type(names: &[&str]) -> &'static str {
    let lower: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();

    for (keywords, content_type) in CONTENT_TYPES {
        if lower.iter().any(|name| keywords.contains(&name.as_str())) {
            return content_type;
        }
    }
    for (keywords, content_type) in CONTENT_TYPES {
        for name in &lower {
            if keywords.iter().any(|kw| name.contains(kw)) {
                return content_type;
            }
        }
    }
    "option"
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftabs_model::{BuilderFormat, GroupMeta, SlotMeta};
    use ftabs_config::FilterTabsConfig;
    use pretty_assertions::assert_eq;

    fn ctx() -> BuildContext {
        BuildContext::new(BuilderFormat::Interactive, FilterTabsConfig::default())
    }

    fn draft(doc: &mut Document, legend: Option<&str>, legacy: Option<&str>) -> NodeId {
        let root = doc.root();
        doc.push(
            NodeKind::Group(GroupMeta {
                legend: legend.map(str::to_owned),
                legacy_args: legacy.map(str::to_owned),
                line: 1,
            }),
            root,
        )
    }

    fn add_slot(doc: &mut Document, group: NodeId, name: &str, is_default: bool) -> NodeId {
        let slot = doc.push(
            NodeKind::Slot(SlotMeta {
                name: name.to_owned(),
                is_default,
                aria_label: None,
                line: 2,
            }),
            group,
        );
        doc.push(NodeKind::Markdown(format!("{name} body")), slot);
        slot
    }

    #[test]
    fn test_normalize_assigns_ordinals_and_moves_content() {
        let mut doc = Document::new();
        let group = draft(&mut doc, None, None);
        add_slot(&mut doc, group, "Alpha", false);
        add_slot(&mut doc, group, "Beta", true);

        let mut ctx = ctx();
        let normalized = normalize(&mut doc, group, &mut ctx).unwrap();

        assert_eq!(normalized.id, "filter-group-1");
        assert_eq!(normalized.slots.len(), 2);
        assert_eq!(normalized.slots[0].ordinal, 0);
        assert_eq!(normalized.slots[1].ordinal, 1);
        assert_eq!(normalized.slots[0].content.len(), 1);
        assert_eq!(normalized.default_slot().map(|s| s.name.as_str()), Some("Beta"));
        // Content ownership moved out of the draft slots.
        for &child in doc.children(group) {
            assert!(doc.children(child).is_empty());
        }
    }

    #[test]
    fn test_no_default_selects_first_slot() {
        let mut doc = Document::new();
        let group = draft(&mut doc, None, None);
        add_slot(&mut doc, group, "A", false);
        add_slot(&mut doc, group, "B", false);

        let mut ctx = ctx();
        let normalized = normalize(&mut doc, group, &mut ctx).unwrap();
        assert_eq!(normalized.default_slot().map(|s| s.name.as_str()), Some("A"));
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn test_multiple_defaults_keeps_first_and_warns() {
        let mut doc = Document::new();
        let group = draft(&mut doc, None, None);
        add_slot(&mut doc, group, "A", false);
        add_slot(&mut doc, group, "B", true);
        add_slot(&mut doc, group, "C", true);

        let mut ctx = ctx();
        let normalized = normalize(&mut doc, group, &mut ctx).unwrap();
        assert_eq!(normalized.default_slot().map(|s| s.name.as_str()), Some("B"));
        assert_eq!(
            normalized.slots.iter().filter(|s| s.is_default).count(),
            1
        );
        assert!(matches!(
            ctx.diagnostics(),
            [Diagnostic::MultipleDefaults { kept, .. }] if kept == "B"
        ));
    }

    #[test]
    fn test_empty_group_is_fatal() {
        let mut doc = Document::new();
        let group = draft(&mut doc, None, None);
        let root = doc.root();
        let _ = root;

        let mut ctx = ctx();
        let err = normalize(&mut doc, group, &mut ctx).unwrap_err();
        assert!(matches!(err, Diagnostic::EmptyGroup { .. }));
    }

    #[test]
    fn test_duplicate_and_empty_slots_warn_but_render() {
        let mut doc = Document::new();
        let group = draft(&mut doc, None, None);
        add_slot(&mut doc, group, "Same", false);
        add_slot(&mut doc, group, "Same", false);
        doc.push(
            NodeKind::Slot(SlotMeta {
                name: "Hollow".to_owned(),
                is_default: false,
                aria_label: None,
                line: 5,
            }),
            group,
        );

        let mut ctx = ctx();
        let normalized = normalize(&mut doc, group, &mut ctx).unwrap();
        assert_eq!(normalized.slots.len(), 3);
        let diags = ctx.diagnostics();
        assert!(diags
            .iter()
            .any(|d| matches!(d, Diagnostic::DuplicateSlot { name, .. } if name == "Same")));
        assert!(diags
            .iter()
            .any(|d| matches!(d, Diagnostic::EmptySlot { name, .. } if name == "Hollow")));
    }

    #[test]
    fn test_legacy_args_create_missing_slots_and_set_default() {
        let mut doc = Document::new();
        let group = draft(&mut doc, None, Some("Python, Rust (default)"));
        add_slot(&mut doc, group, "Python", false);

        let mut ctx = ctx();
        let normalized = normalize(&mut doc, group, &mut ctx).unwrap();
        assert_eq!(normalized.slots.len(), 2);
        assert_eq!(normalized.slots[1].name, "Rust");
        assert_eq!(normalized.default_slot().map(|s| s.name.as_str()), Some("Rust"));
        assert!(ctx
            .diagnostics()
            .iter()
            .any(|d| matches!(d, Diagnostic::DeprecatedGroupArguments { .. })));
    }

    #[test]
    fn test_explicit_legend_wins() {
        let mut doc = Document::new();
        let group = draft(&mut doc, Some("Pick a side"), None);
        add_slot(&mut doc, group, "Left", false);
        add_slot(&mut doc, group, "Right", false);

        let mut ctx = ctx();
        let normalized = normalize(&mut doc, group, &mut ctx).unwrap();
        assert_eq!(normalized.legend, "Pick a side");
    }

    #[test]
    fn test_synthesized_legend() {
        assert_eq!(
            synthesize_legend(&["Python", "Rust"]),
            "Choose programming language: Python, Rust"
        );
        assert_eq!(
            synthesize_legend(&["Thing One", "Thing Two"]),
            "Choose option: Thing One, Thing Two"
        );
    }

    #[test]
    fn test_infer_content_type_passes() {
        // Exact match.
        assert_eq!(infer_content_type(&["Linux", "Windows"]), "operating system");
        // Exact match beats a later table's substring hit.
        assert_eq!(infer_content_type(&["pip"]), "package manager");
        // Substring pass.
        assert_eq!(infer_content_type(&["Ubuntu 24.04"]), "operating system");
        assert_eq!(infer_content_type(&["Anything"]), "option");
    }

    #[test]
    fn test_aria_label_falls_back_to_name() {
        let mut doc = Document::new();
        let group = draft(&mut doc, None, None);
        let slot = doc.push(
            NodeKind::Slot(SlotMeta {
                name: "Tab".to_owned(),
                is_default: false,
                aria_label: Some("Custom label".to_owned()),
                line: 2,
            }),
            group,
        );
        doc.push(NodeKind::Markdown("body".to_owned()), slot);
        add_slot(&mut doc, group, "Plain", false);

        let mut ctx = ctx();
        let normalized = normalize(&mut doc, group, &mut ctx).unwrap();
        assert_eq!(normalized.slots[0].aria_label, "Custom label");
        assert_eq!(normalized.slots[1].aria_label, "Plain");
    }
}
