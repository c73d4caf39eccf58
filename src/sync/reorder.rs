use std::path::Path;

use crate::io::store_io::StoreError;
use crate::model::EntryStore;

use super::rows::{ViewRow, render_rows};
use super::synchronizer::{SyncReport, sync_tick};

/// One reorder tick: flush pending row edits, then rebuild every row from the
/// store in priority order.
///
/// Rows are rebuilt even when the flush fails; the store already holds the
/// edits, so the re-rendered rows show them.
pub fn reorder_tick(
    store: &mut EntryStore,
    rows: &mut Vec<ViewRow>,
    path: &Path,
) -> Result<SyncReport, StoreError> {
    let flushed = sync_tick(store, rows, path);
    *rows = render_rows(store);
    flushed
}
