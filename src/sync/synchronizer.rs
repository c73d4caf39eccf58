use std::path::Path;

use crate::io::store_io::{StoreError, persist};
use crate::model::EntryStore;

use super::color::priority_color;
use super::rows::ViewRow;

/// What one synchronizer tick found and did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub text_changes: usize,
    pub priority_changes: usize,
    pub completion_changes: usize,
    /// Rows whose entry is gone from the store
    pub skipped_rows: usize,
    pub persisted: bool,
}

impl SyncReport {
    pub fn changed(&self) -> bool {
        self.text_changes + self.priority_changes + self.completion_changes > 0
    }
}

/// Copy every row edit into the store. No I/O.
///
/// A priority change recolours the row; a completion change updates its
/// strike-through. Rows bound to ids the store no longer has are skipped.
pub fn reconcile(store: &mut EntryStore, rows: &mut [ViewRow]) -> SyncReport {
    let mut report = SyncReport::default();

    for row in rows.iter_mut() {
        let Some(entry) = store.get_mut(&row.id) else {
            report.skipped_rows += 1;
            continue;
        };

        if row.text != entry.text {
            entry.text.clone_from(&row.text);
            report.text_changes += 1;
        }

        if row.priority != entry.priority {
            entry.priority = row.priority;
            row.color = priority_color(row.priority.get() as i64);
            report.priority_changes += 1;
        }

        if row.completed != entry.completed {
            entry.completed = row.completed;
            row.strikethrough = row.completed;
            report.completion_changes += 1;
        }
    }

    report
}

/// One synchronizer tick: reconcile, then flush the list if anything changed.
///
/// On a failed write the store still holds the new values, so the next
/// successful flush picks them up.
pub fn sync_tick(
    store: &mut EntryStore,
    rows: &mut [ViewRow],
    path: &Path,
) -> Result<SyncReport, StoreError> {
    let mut report = reconcile(store, rows);
    if report.changed() {
        persist(path, store)?;
        report.persisted = true;
        tracing::debug!(
            path = %path.display(),
            text = report.text_changes,
            priority = report.priority_changes,
            completion = report.completion_changes,
            "synced row edits"
        );
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store_io::read_store;
    use crate::model::{Entry, EntryId, Priority};
    use crate::sync::rows::render_rows;
    use tempfile::TempDir;

    fn store() -> EntryStore {
        let mut store = EntryStore::new();
        store.upsert(EntryId::new("1"), Entry::new("Dishes", Priority::new(3).unwrap()));
        store.upsert(EntryId::new("2"), Entry::new("Taxes", Priority::new(9).unwrap()));
        store
    }

    #[test]
    fn unchanged_rows_do_not_persist() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.json");
        let mut store = store();
        let mut rows = render_rows(&store);

        let report = sync_tick(&mut store, &mut rows, &path).unwrap();
        assert_eq!(report, SyncReport::default());
        assert!(!path.exists());
    }

    #[test]
    fn text_edit_is_copied_and_persisted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.json");
        let mut store = store();
        let mut rows = render_rows(&store);
        rows[1].text = "Dishes and pans".into();

        let report = sync_tick(&mut store, &mut rows, &path).unwrap();
        assert_eq!(report.text_changes, 1);
        assert!(report.persisted);
        assert_eq!(store.get(&EntryId::new("1")).unwrap().text, "Dishes and pans");
        assert_eq!(read_store(&path).unwrap(), store);
    }

    #[test]
    fn priority_edit_recolours_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.json");
        let mut store = store();
        let mut rows = render_rows(&store);
        rows[0].set_priority(Priority::new(1).unwrap());

        let report = sync_tick(&mut store, &mut rows, &path).unwrap();
        assert_eq!(report.priority_changes, 1);
        assert_eq!(rows[0].color, priority_color(1));
        assert_eq!(store.get(&EntryId::new("2")).unwrap().priority.get(), 1);
        // No re-sort here: that is the reorder tick's job
        assert_eq!(rows[0].id.as_str(), "2");
    }

    #[test]
    fn completion_edit_sets_strikethrough() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.json");
        let mut store = store();
        let mut rows = render_rows(&store);
        rows[1].toggle_completed();
        assert!(!rows[1].strikethrough);

        let report = sync_tick(&mut store, &mut rows, &path).unwrap();
        assert_eq!(report.completion_changes, 1);
        assert!(rows[1].strikethrough);
        assert!(store.get(&EntryId::new("1")).unwrap().completed);

        rows[1].toggle_completed();
        sync_tick(&mut store, &mut rows, &path).unwrap();
        assert!(!rows[1].strikethrough);
        assert!(!store.get(&EntryId::new("1")).unwrap().completed);
    }

    #[test]
    fn several_edits_in_one_tick_are_all_copied() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.json");
        let mut store = store();
        let mut rows = render_rows(&store);
        rows[0].text = "Taxes (federal)".into();
        rows[0].toggle_completed();
        rows[1].set_priority(Priority::new(4).unwrap());

        let report = sync_tick(&mut store, &mut rows, &path).unwrap();
        assert_eq!(
            report,
            SyncReport {
                text_changes: 1,
                priority_changes: 1,
                completion_changes: 1,
                skipped_rows: 0,
                persisted: true,
            }
        );
        assert_eq!(read_store(&path).unwrap(), store);
    }

    #[test]
    fn rows_for_missing_entries_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.json");
        let mut store = store();
        let mut rows = render_rows(&store);
        store.get_mut(&EntryId::new("2")).unwrap().completed = true;
        store.remove_completed();
        rows[0].text = "edited after removal".into();
        rows[1].text = "still here".into();

        let report = sync_tick(&mut store, &mut rows, &path).unwrap();
        assert_eq!(report.skipped_rows, 1);
        assert_eq!(report.text_changes, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&EntryId::new("1")).unwrap().text, "still here");
    }

    #[test]
    fn failed_write_keeps_store_updated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("todo.json");
        let mut store = store();
        let mut rows = render_rows(&store);
        rows[0].text = "Taxes!".into();

        assert!(sync_tick(&mut store, &mut rows, &path).is_err());
        assert_eq!(store.get(&EntryId::new("2")).unwrap().text, "Taxes!");
    }
}
