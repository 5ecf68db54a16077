//! Diagnostic taxonomy for the filter-tabs pipeline.
//!
//! Every diagnostic names the offending group or slot; warnings also state
//! the fallback that was applied. How diagnostics are displayed is the host
//! build's concern — this crate only decides severity and message content.

/// How a diagnostic affects the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Normalization proceeds with a documented fallback.
    Warning,
    /// The affected occurrence (never the whole build) fails or degrades.
    Error,
}

/// A warning or error produced while resolving filter groups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// A slot block was found outside of any group. Fatal to the occurrence:
    /// silently treating it as shared content would hide authoring mistakes.
    #[error("line {line}: tab '{name}' appears outside of any filter-tabs group")]
    OrphanSlot {
        /// Slot name as written.
        name: String,
        /// Source line (1-indexed).
        line: usize,
    },

    /// A group contained no slots. Fatal to the occurrence.
    #[error("{group}: filter-tabs group has no tabs; the occurrence is not rendered")]
    EmptyGroup {
        /// Group id.
        group: String,
    },

    /// Two slots in one group share a name. Both still render; the result is
    /// two visually identical controls, flagged but not corrected.
    #[error("{group}: duplicate tab name '{name}'; both tabs are rendered")]
    DuplicateSlot {
        /// Group id.
        group: String,
        /// The duplicated name.
        name: String,
    },

    /// A slot has no body. An empty panel is still rendered.
    #[error("{group}: tab '{name}' has no content; rendering an empty panel")]
    EmptySlot {
        /// Group id.
        group: String,
        /// Slot name.
        name: String,
    },

    /// More than one slot was marked default. The earliest-ordinal marked
    /// slot wins; later markers are dropped.
    #[error("{group}: multiple tabs marked default ({names}); keeping '{kept}'")]
    MultipleDefaults {
        /// Group id.
        group: String,
        /// All marked names, comma separated.
        names: String,
        /// The name that stayed default.
        kept: String,
    },

    /// A group exceeds the warn threshold. The full selector table is still
    /// generated.
    #[error("{group}: {count} tabs in one group is hard to navigate; consider restructuring")]
    LargeGroup {
        /// Group that set the build maximum.
        group: String,
        /// Observed slot count.
        count: usize,
    },

    /// A group exceeds the selector-table cap. The table is capped; slots at
    /// or beyond the cap render but are not individually addressable.
    #[error(
        "{group}: {count} tabs exceeds the selector-table cap of {cap}; \
         tabs at or beyond the cap are not individually selectable"
    )]
    GroupSize {
        /// Group that set the build maximum.
        group: String,
        /// Observed slot count.
        count: usize,
        /// Configured cap.
        cap: usize,
    },

    /// Legacy comma-list group arguments were used instead of per-tab
    /// declarations.
    #[error(
        "{group}: passing tab names as filter-tabs arguments is deprecated; \
         declare tabs with `::: tab` blocks instead"
    )]
    DeprecatedGroupArguments {
        /// Group id.
        group: String,
    },
}

impl Diagnostic {
    /// Severity of this diagnostic.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::OrphanSlot { .. } | Self::EmptyGroup { .. } | Self::GroupSize { .. } => {
                Severity::Error
            }
            Self::DuplicateSlot { .. }
            | Self::EmptySlot { .. }
            | Self::MultipleDefaults { .. }
            | Self::LargeGroup { .. }
            | Self::DeprecatedGroupArguments { .. } => Severity::Warning,
        }
    }

    /// True for diagnostics that abort rendering of their occurrence.
    ///
    /// [`Diagnostic::GroupSize`] is an error but recoverable: the occurrence
    /// still renders with a capped selector table.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::OrphanSlot { .. } | Self::EmptyGroup { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_split() {
        let warn = Diagnostic::DuplicateSlot {
            group: "filter-group-1".to_owned(),
            name: "Linux".to_owned(),
        };
        let err = Diagnostic::EmptyGroup {
            group: "filter-group-2".to_owned(),
        };

        assert_eq!(warn.severity(), Severity::Warning);
        assert_eq!(err.severity(), Severity::Error);
    }

    #[test]
    fn test_group_size_is_error_but_not_fatal() {
        let diag = Diagnostic::GroupSize {
            group: "filter-group-1".to_owned(),
            count: 22,
            cap: 20,
        };
        assert_eq!(diag.severity(), Severity::Error);
        assert!(!diag.is_fatal());
    }

    #[test]
    fn test_messages_name_the_offender() {
        let diag = Diagnostic::MultipleDefaults {
            group: "filter-group-7".to_owned(),
            names: "A, B".to_owned(),
            kept: "A".to_owned(),
        };
        let msg = diag.to_string();
        assert!(msg.contains("filter-group-7"));
        assert!(msg.contains("keeping 'A'"));
    }

    #[test]
    fn test_orphan_slot_is_fatal() {
        let diag = Diagnostic::OrphanSlot {
            name: "Windows".to_owned(),
            line: 12,
        };
        assert!(diag.is_fatal());
        assert!(diag.to_string().contains("line 12"));
    }
}
