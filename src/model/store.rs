use std::cmp::Reverse;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::entry::{Entry, EntryId};

/// In-memory contents of one list file.
///
/// Iteration follows file order, then creation order. That order carries no
/// meaning for display; `ids_by_priority` is the only ordering the UI uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryStore {
    entries: IndexMap<EntryId, Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding only the placeholder entry
    pub fn with_placeholder(id: EntryId) -> Self {
        let mut store = Self::new();
        store.upsert(id, Entry::placeholder());
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.get(id)
    }

    pub fn get_mut(&mut self, id: &EntryId) -> Option<&mut Entry> {
        self.entries.get_mut(id)
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.entries.contains_key(id)
    }

    /// Insert or overwrite. An existing id keeps its position.
    pub fn upsert(&mut self, id: EntryId, entry: Entry) -> Option<Entry> {
        self.entries.insert(id, entry)
    }

    /// Drop every completed entry, returning how many were removed
    pub fn remove_completed(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.completed);
        before - self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EntryId, &Entry)> {
        self.entries.iter()
    }

    /// Ids sorted by priority, highest first. Equal priorities keep store order.
    pub fn ids_by_priority(&self) -> Vec<EntryId> {
        let mut ordered: Vec<(&EntryId, &Entry)> = self.entries.iter().collect();
        // sort_by_key is stable
        ordered.sort_by_key(|(_, entry)| Reverse(entry.priority));
        ordered.into_iter().map(|(id, _)| id.clone()).collect()
    }
}
