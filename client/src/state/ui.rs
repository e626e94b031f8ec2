//! Local UI chrome state (filters, selections, panel expansion).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of persisted feature state so a
//! filter click never rewrites the stored to-do list.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use localstate::todo::TaskFilter;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub todo_filter: TaskFilter,
    /// Conversation open in the messages page.
    pub active_conversation: Option<String>,
    pub nav_expanded: bool,
}

impl UiState {
    /// Conversation to show: the selected one if it still exists, else the
    /// first of `available`.
    #[must_use]
    pub fn resolve_conversation(&self, available: &[String]) -> Option<String> {
        self.active_conversation
            .as_ref()
            .filter(|id| available.contains(id))
            .or_else(|| available.first())
            .cloned()
    }
}
