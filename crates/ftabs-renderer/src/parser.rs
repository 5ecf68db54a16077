//! Slot parser: turns filter-tabs directive syntax into draft tree nodes.
//!
//! Line-oriented container syntax:
//!
//! ```markdown
//! ::: filter-tabs {legend="Choose your platform"}
//! Shared introduction, visible for every choice.
//! ::: tab macOS (default)
//! Install with Homebrew.
//! ::: tab Linux {aria-label="Linux installation steps"}
//! Install with apt.
//! :::
//! ```
//!
//! A new `::: tab` implicitly closes the previous slot; `:::` closes the
//! innermost open block. Group arguments in brackets
//! (`:::filter-tabs[A, B (default)]`) are the legacy comma-list form, kept
//! verbatim for the validator's backward-compatibility pass.
//!
//! `::: details Title` opens a collapsible block (an `(expanded)` suffix on
//! the title makes it start open); these nest freely with filter groups.
//!
//! The parser performs no cross-slot validation: uniqueness and
//! default-count checks run later, once all sibling blocks are known. The
//! one hard failure here is a `::: tab` outside any group, which becomes a
//! visible error marker instead of silently turning into shared content.

use ftabs_model::{DetailsMeta, Diagnostic, Document, GroupMeta, NodeId, NodeKind, SlotMeta};

use crate::fence::FenceTracker;
use crate::util::{escape_html, split_default_marker, split_expanded_marker};

/// One parsed directive line.
#[derive(Debug, PartialEq, Eq)]
enum Directive {
    GroupStart {
        legacy_args: Option<String>,
        legend: Option<String>,
    },
    SlotStart {
        name: String,
        is_default: bool,
        aria_label: Option<String>,
    },
    DetailsStart {
        summary: Option<String>,
        expanded: bool,
    },
    Close,
}

/// An open container while parsing.
#[derive(Debug)]
enum Scope {
    /// An open group, with the slot currently receiving content, if any.
    Group { node: NodeId, slot: Option<NodeId> },
    /// An open collapsible block.
    Details { node: NodeId },
}

/// Parses one document's markup into a draft [`Document`] tree.
///
/// # Example
///
/// ```
/// use ftabs_renderer::SlotParser;
/// use ftabs_model::NodeKind;
///
/// let mut parser = SlotParser::new();
/// let doc = parser.parse("::: filter-tabs\n::: tab A\nBody\n:::\n");
/// let root = doc.root();
/// assert!(matches!(doc.kind(doc.children(root)[0]), NodeKind::Group(_)));
/// ```
#[derive(Debug, Default)]
pub struct SlotParser {
    fence: FenceTracker,
    diagnostics: Vec<Diagnostic>,
}

impl SlotParser {
    /// Create a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one document's text into a draft tree.
    ///
    /// Draft group and slot nodes are left embedded in document order;
    /// everything else becomes markdown runs.
    pub fn parse(&mut self, input: &str) -> Document {
        let mut doc = Document::new();
        let mut stack: Vec<Scope> = Vec::new();
        let mut buffer = String::new();

        for (idx, line) in input.lines().enumerate() {
            let line_num = idx + 1;
            self.fence.update(line);

            let directive = if self.fence.in_fence() {
                None
            } else {
                parse_directive(line.trim())
            };

            match directive {
                Some(Directive::GroupStart {
                    legacy_args,
                    legend,
                }) => {
                    let parent = insertion_point(&stack, &doc);
                    flush(&mut doc, &mut buffer, parent);
                    let node = doc.push(
                        NodeKind::Group(GroupMeta {
                            legend,
                            legacy_args,
                            line: line_num,
                        }),
                        parent,
                    );
                    stack.push(Scope::Group { node, slot: None });
                }
                Some(Directive::SlotStart {
                    name,
                    is_default,
                    aria_label,
                }) => {
                    let parent = insertion_point(&stack, &doc);
                    flush(&mut doc, &mut buffer, parent);
                    match stack.last_mut() {
                        Some(Scope::Group { node, slot }) => {
                            *slot = Some(doc.push(
                                NodeKind::Slot(SlotMeta {
                                    name,
                                    is_default,
                                    aria_label,
                                    line: line_num,
                                }),
                                *node,
                            ));
                        }
                        _ => {
                            let diag = Diagnostic::OrphanSlot {
                                name,
                                line: line_num,
                            };
                            doc.push(NodeKind::Html(error_marker(&diag)), parent);
                            self.diagnostics.push(diag);
                        }
                    }
                }
                Some(Directive::DetailsStart { summary, expanded }) => {
                    let parent = insertion_point(&stack, &doc);
                    flush(&mut doc, &mut buffer, parent);
                    let node = doc.push(
                        NodeKind::Details(DetailsMeta {
                            summary,
                            expanded,
                            line: line_num,
                        }),
                        parent,
                    );
                    stack.push(Scope::Details { node });
                }
                Some(Directive::Close) => {
                    if stack.is_empty() {
                        // Keep the markdown run contiguous; the line is
                        // plain text as far as the output is concerned.
                        tracing::warn!(line = line_num, "stray ::: with no open block");
                        buffer.push_str(line);
                        buffer.push('\n');
                    } else {
                        let parent = insertion_point(&stack, &doc);
                        flush(&mut doc, &mut buffer, parent);
                        stack.pop();
                    }
                }
                None => {
                    buffer.push_str(line);
                    buffer.push('\n');
                }
            }
        }

        let parent = insertion_point(&stack, &doc);
        flush(&mut doc, &mut buffer, parent);
        for scope in stack.drain(..) {
            match scope {
                Scope::Group { node, .. } => {
                    if let NodeKind::Group(meta) = doc.kind(node) {
                        tracing::warn!(
                            line = meta.line,
                            "unclosed ::: filter-tabs group (missing closing :::)"
                        );
                    }
                }
                Scope::Details { node } => {
                    if let NodeKind::Details(meta) = doc.kind(node) {
                        tracing::warn!(
                            line = meta.line,
                            "unclosed ::: details block (missing closing :::)"
                        );
                    }
                }
            }
        }

        doc
    }

    /// Drain the diagnostics collected while parsing.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

/// Where content lines currently land: the open details block or slot, else
/// the open group's shared content, else the document root.
fn insertion_point(stack: &[Scope], doc: &Document) -> NodeId {
    match stack.last() {
        Some(Scope::Group { node, slot }) => slot.unwrap_or(*node),
        Some(Scope::Details { node }) => *node,
        None => doc.root(),
    }
}

/// Flush buffered markdown lines into a node under `parent`.
fn flush(doc: &mut Document, buffer: &mut String, parent: NodeId) {
    let text = std::mem::take(buffer);
    if !text.trim().is_empty() {
        doc.push(NodeKind::Markdown(text), parent);
    }
}

/// A visible stand-in for an occurrence that failed to parse.
fn error_marker(diag: &Diagnostic) -> String {
    format!(
        r#"<div class="ft-error">filter-tabs: {}</div>"#,
        escape_html(&diag.to_string())
    )
}

/// Parse a trimmed line for directive syntax.
fn parse_directive(trimmed: &str) -> Option<Directive> {
    let rest = trimmed.strip_prefix(":::")?.trim();

    if rest.is_empty() {
        return Some(Directive::Close);
    }

    if let Some(tail) = strip_directive_name(rest, "filter-tabs") {
        let (tail, attrs) = split_attrs(tail);
        let (bracket, remainder) = split_bracket(tail.trim());
        if !remainder.trim().is_empty() {
            // Trailing junk after the argument list: not our directive.
            return None;
        }
        return Some(Directive::GroupStart {
            legacy_args: bracket
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
            legend: attr_value(attrs, "legend"),
        });
    }

    if let Some(tail) = strip_directive_name(rest, "tab") {
        let (tail, attrs) = split_attrs(tail);
        let tail = tail.trim();
        let label = match split_bracket(tail) {
            (Some(bracket), _) => bracket.trim(),
            (None, remainder) => remainder.trim(),
        };
        let label = strip_quotes(label);
        let (name, is_default) = if label.is_empty() {
            ("Tab".to_owned(), false)
        } else {
            split_default_marker(label)
        };
        return Some(Directive::SlotStart {
            name,
            is_default,
            aria_label: attr_value(attrs, "aria-label"),
        });
    }

    if let Some(tail) = strip_directive_name(rest, "details") {
        let (tail, _) = split_attrs(tail);
        let title = strip_quotes(tail.trim());
        let (summary, expanded) = split_expanded_marker(title);
        return Some(Directive::DetailsStart {
            summary: (!summary.is_empty()).then_some(summary),
            expanded,
        });
    }

    // Some other container directive; not ours.
    None
}

/// Strip a directive name, requiring a clean boundary after it.
fn strip_directive_name<'a>(rest: &'a str, name: &str) -> Option<&'a str> {
    let tail = rest.strip_prefix(name)?;
    if tail.is_empty() || tail.starts_with([' ', '\t', '[', '{']) {
        Some(tail)
    } else {
        None
    }
}

/// Split a trailing `{...}` attribute block off the directive tail.
fn split_attrs(tail: &str) -> (&str, Option<&str>) {
    let tail = tail.trim_end();
    if tail.ends_with('}') {
        if let Some(open) = tail.rfind('{') {
            return (&tail[..open], Some(&tail[open + 1..tail.len() - 1]));
        }
    }
    (tail, None)
}

/// Split a leading `[...]` argument off the directive tail.
fn split_bracket(tail: &str) -> (Option<&str>, &str) {
    if let Some(inner) = tail.strip_prefix('[') {
        if let Some(close) = inner.find(']') {
            return (Some(&inner[..close]), &inner[close + 1..]);
        }
    }
    (None, tail)
}

/// Look up one `key="value"` pair in an attribute block.
///
/// Values may use double quotes, single quotes, or run to the next
/// whitespace when unquoted.
fn attr_value(attrs: Option<&str>, key: &str) -> Option<String> {
    let mut remaining = attrs?.trim();
    while !remaining.is_empty() {
        remaining = remaining.trim_start();
        let eq = remaining.find('=')?;
        let name = remaining[..eq].trim();
        let after = &remaining[eq + 1..];
        let (value, rest) = if let Some(stripped) = after.strip_prefix('"') {
            let end = stripped.find('"')?;
            (&stripped[..end], &stripped[end + 1..])
        } else if let Some(stripped) = after.strip_prefix('\'') {
            let end = stripped.find('\'')?;
            (&stripped[..end], &stripped[end + 1..])
        } else {
            let end = after.find(char::is_whitespace).unwrap_or(after.len());
            (&after[..end], &after[end..])
        };
        if name == key {
            return Some(value.to_owned());
        }
        remaining = rest;
    }
    None
}

/// Strip surrounding quotes (single or double) from a label.
fn strip_quotes(s: &str) -> &str {
    let quoted =
        (s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\''));
    if quoted && s.len() >= 2 {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
