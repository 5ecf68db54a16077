//! Centralized element-id generation.
//!
//! Control/panel pairs are linked by explicit id relationships rather than
//! DOM proximity, so every id for one group comes from one generator.

/// Generates the build-stable element ids for one filter group.
#[derive(Debug)]
pub(crate) struct IdGenerator<'a> {
    group_id: &'a str,
}

impl<'a> IdGenerator<'a> {
    pub(crate) fn new(group_id: &'a str) -> Self {
        Self { group_id }
    }

    /// Id of the radio control for the slot at `ordinal`.
    pub(crate) fn radio_id(&self, ordinal: usize) -> String {
        format!("{}-radio-{ordinal}", self.group_id)
    }

    /// Id of the content panel for the slot at `ordinal`.
    pub(crate) fn panel_id(&self, ordinal: usize) -> String {
        format!("{}-panel-{ordinal}", self.group_id)
    }

    /// Id of the screen-reader description for the slot at `ordinal`.
    pub(crate) fn desc_id(&self, ordinal: usize) -> String {
        format!("{}-desc-{ordinal}", self.group_id)
    }

    /// Id of the fieldset legend.
    pub(crate) fn legend_id(&self) -> String {
        format!("{}-legend", self.group_id)
    }
}
