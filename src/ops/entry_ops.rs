use std::path::Path;

use chrono::{DateTime, Utc};

use crate::io::store_io::{StoreError, persist};
use crate::model::{Entry, EntryId, EntryStore, Priority, PriorityOutOfRange};

/// Why a new entry was not created. Neither case touches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    EmptyText,
    Priority(PriorityOutOfRange),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(EntryId),
    Rejected(Rejection),
}

/// Add an entry stamped with the current time and flush the list.
pub fn create_entry(
    store: &mut EntryStore,
    path: &Path,
    text: &str,
    priority: i64,
) -> Result<CreateOutcome, StoreError> {
    create_entry_at(store, path, text, priority, Utc::now())
}

/// Add an entry with an id taken from `now`.
///
/// Ids have one-second resolution. A second entry created within the same
/// second reuses the id and overwrites the first one's fields.
pub fn create_entry_at(
    store: &mut EntryStore,
    path: &Path,
    text: &str,
    priority: i64,
    now: DateTime<Utc>,
) -> Result<CreateOutcome, StoreError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(CreateOutcome::Rejected(Rejection::EmptyText));
    }
    let priority = match Priority::new(priority) {
        Ok(p) => p,
        Err(e) => return Ok(CreateOutcome::Rejected(Rejection::Priority(e))),
    };

    let id = EntryId::from_timestamp(now);
    if store.upsert(id.clone(), Entry::new(text, priority)).is_some() {
        tracing::debug!(%id, "entry id reused within one second, previous entry overwritten");
    }
    persist(path, store)?;
    Ok(CreateOutcome::Created(id))
}

/// Remove completed entries and flush the list. Returns how many went.
pub fn delete_completed(store: &mut EntryStore, path: &Path) -> Result<usize, StoreError> {
    let removed = store.remove_completed();
    persist(path, store)?;
    Ok(removed)
}
