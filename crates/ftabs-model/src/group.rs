//! Draft and normalized group models.

use crate::tree::NodeId;

/// The output target in effect for a build.
///
/// Read from the build context at resolve time; the resolve pass dispatches
/// to exactly one renderer based on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderFormat {
    /// Targets that can express interactive show/hide state (HTML).
    Interactive,
    /// Linear targets (print/PDF-style); every alternative stays visible.
    Flattened,
}

/// Raw options captured for a draft group at parse time.
///
/// Cross-slot constraints are not checked here; later sibling blocks may
/// still arrive while parsing continues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMeta {
    /// Explicit legend from the `{legend="..."}` attribute.
    pub legend: Option<String>,
    /// Legacy comma-separated slot-name argument list, kept verbatim for the
    /// validator's backward-compatibility pass.
    pub legacy_args: Option<String>,
    /// Line where the group opened (1-indexed).
    pub line: usize,
}

/// Raw options captured for a draft collapsible block at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsMeta {
    /// Summary line; a missing title falls back to "Details" at render time.
    pub summary: Option<String>,
    /// Whether the block starts expanded (`(expanded)` marker).
    pub expanded: bool,
    /// Line where the block opened (1-indexed).
    pub line: usize,
}

/// Raw options captured for a draft slot at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotMeta {
    /// Display name, with any `(default)` marker already stripped.
    pub name: String,
    /// Whether the name argument carried a `(default)` marker.
    pub is_default: bool,
    /// Explicit accessible label from `{aria-label="..."}`.
    pub aria_label: Option<String>,
    /// Line where the slot opened (1-indexed).
    pub line: usize,
}

/// One normalized alternative within a [`Group`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Display label, unique within the group except for flagged duplicates.
    pub name: String,
    /// Accessible label; equals `name` unless the author supplied one.
    pub aria_label: String,
    /// Exactly one slot per group is the default after normalization.
    pub is_default: bool,
    /// Zero-based position among siblings, fixed in document order.
    pub ordinal: usize,
    /// Content fragment, moved out of the draft node (never duplicated).
    pub content: Vec<NodeId>,
}

/// One normalized filter-group occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Build-unique identifier, e.g. `filter-group-3`.
    pub id: String,
    /// Accessible label for the control group.
    pub legend: String,
    /// Alternatives in document order; non-empty.
    pub slots: Vec<Slot>,
    /// Content belonging to no single slot, always rendered.
    pub shared: Vec<NodeId>,
}

impl Group {
    /// The slot marked as default.
    ///
    /// Normalization guarantees exactly one, so this never returns `None`
    /// for a normalized group.
    #[must_use]
    pub fn default_slot(&self) -> Option<&Slot> {
        self.slots.iter().find(|s| s.is_default)
    }
}
