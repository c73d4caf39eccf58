use ratatui::style::Color;

use crate::model::{Entry, EntryId, EntryStore, Priority};

use super::color::priority_color;

/// What one table row currently displays.
///
/// User edits land here first; the synchronizer copies them into the store.
/// The row keeps the id of the entry it was rendered from, so a re-sort never
/// sends an edit to a different entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    pub id: EntryId,
    pub text: String,
    pub priority: Priority,
    pub completed: bool,
    /// Text colour, derived from `priority` at the last render or sync
    pub color: Color,
    /// Strike-through on the text cell, follows `completed`
    pub strikethrough: bool,
}

impl ViewRow {
    pub fn render(id: &EntryId, entry: &Entry) -> Self {
        ViewRow {
            id: id.clone(),
            text: entry.text.clone(),
            priority: entry.priority,
            completed: entry.completed,
            color: priority_color(entry.priority.get() as i64),
            strikethrough: entry.completed,
        }
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

/// One row per entry, highest priority first
pub fn render_rows(store: &EntryStore) -> Vec<ViewRow> {
    store
        .ids_by_priority()
        .iter()
        .filter_map(|id| store.get(id).map(|entry| ViewRow::render(id, entry)))
        .collect()
}
