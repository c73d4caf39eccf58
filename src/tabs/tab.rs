use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::io::list_dir::list_name;
use crate::io::store_io::{self, StoreError};
use crate::model::{EntryId, EntryStore, SyncConfig};
use crate::ops::entry_ops::{self, CreateOutcome};
use crate::sync::{SyncReport, Ticker, ViewRow, render_rows, reorder_tick, sync_tick};

use super::cache::Keyed;

/// Periods for a tab's two tickers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPeriods {
    pub sync: Duration,
    pub reorder: Duration,
}

impl From<&SyncConfig> for TickPeriods {
    fn from(config: &SyncConfig) -> Self {
        TickPeriods {
            sync: config.tick_period(),
            reorder: config.reorder_period(),
        }
    }
}

/// Result of driving a tab's tickers once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Set when either process ran
    pub report: Option<SyncReport>,
    pub reordered: bool,
}

/// One open list: its file, its store, the rows on screen, and its tickers.
#[derive(Debug)]
pub struct Tab {
    path: PathBuf,
    pub store: EntryStore,
    pub rows: Vec<ViewRow>,
    pub cursor: usize,
    pub scroll_offset: usize,
    sync_ticker: Ticker,
    reorder_ticker: Ticker,
}

impl Keyed for Tab {
    fn key(&self) -> &Path {
        &self.path
    }
}

impl Tab {
    /// Load (or bootstrap) the list at `path`
    pub fn open(path: PathBuf, periods: TickPeriods, now: Instant) -> Self {
        let store = store_io::load(&path);
        Self::with_store(path, store, periods, now)
    }

    pub fn with_store(path: PathBuf, store: EntryStore, periods: TickPeriods, now: Instant) -> Self {
        let rows = render_rows(&store);
        Tab {
            path,
            store,
            rows,
            cursor: 0,
            scroll_offset: 0,
            sync_ticker: Ticker::new(periods.sync, now),
            reorder_ticker: Ticker::new(periods.reorder, now),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> String {
        list_name(&self.path)
    }

    /// Run whichever processes are due. A due reorder includes a sync, so
    /// the sync ticker is restarted rather than fired twice.
    pub fn tick(&mut self, now: Instant) -> Result<TickOutcome, StoreError> {
        if self.reorder_ticker.fire(now) {
            self.sync_ticker.restart(now);
            let report = self.reorder()?;
            return Ok(TickOutcome {
                report: Some(report),
                reordered: true,
            });
        }
        if self.sync_ticker.fire(now) {
            let report = self.sync()?;
            return Ok(TickOutcome {
                report: Some(report),
                reordered: false,
            });
        }
        Ok(TickOutcome::default())
    }

    /// Earliest instant at which `tick` has work to do
    pub fn next_due(&self) -> Instant {
        self.sync_ticker.next_due().min(self.reorder_ticker.next_due())
    }

    /// Restart both tickers, used when a cached tab becomes visible again
    pub fn wake(&mut self, now: Instant) {
        self.sync_ticker.restart(now);
        self.reorder_ticker.restart(now);
    }

    /// Copy row edits into the store and flush if anything changed
    pub fn sync(&mut self) -> Result<SyncReport, StoreError> {
        sync_tick(&mut self.store, &mut self.rows, &self.path)
    }

    /// Flush edits, re-sort, re-render. The cursor stays on its entry.
    pub fn reorder(&mut self) -> Result<SyncReport, StoreError> {
        let focused = self.cursor_id().cloned();
        let result = reorder_tick(&mut self.store, &mut self.rows, &self.path);
        match focused {
            Some(id) => self.focus(&id),
            None => self.clamp_cursor(),
        }
        result
    }

    /// Add an entry, then re-render with the cursor on it
    pub fn create_entry(&mut self, text: &str, priority: i64) -> Result<CreateOutcome, StoreError> {
        self.sync()?;
        let outcome = entry_ops::create_entry(&mut self.store, &self.path, text, priority)?;
        if let CreateOutcome::Created(id) = &outcome {
            self.rows = render_rows(&self.store);
            self.focus(id);
        }
        Ok(outcome)
    }

    /// Remove completed entries. Completion toggles not yet synced count.
    pub fn clear_completed(&mut self) -> Result<usize, StoreError> {
        self.sync()?;
        let removed = entry_ops::delete_completed(&mut self.store, &self.path)?;
        self.rows = render_rows(&self.store);
        self.clamp_cursor();
        Ok(removed)
    }

    /// Write the list to `path` and make that the tab's file from now on
    pub fn save_as(&mut self, path: PathBuf) -> Result<(), StoreError> {
        // Row edits go into the store; flushing them to the old file is not
        // required, the new file gets them either way.
        crate::sync::reconcile(&mut self.store, &mut self.rows);
        store_io::persist(&path, &self.store)?;
        tracing::info!(from = %self.path.display(), to = %path.display(), "list rebound");
        self.path = path;
        Ok(())
    }

    pub fn cursor_id(&self) -> Option<&EntryId> {
        self.rows.get(self.cursor).map(|row| &row.id)
    }

    pub fn cursor_row(&self) -> Option<&ViewRow> {
        self.rows.get(self.cursor)
    }

    pub fn cursor_row_mut(&mut self) -> Option<&mut ViewRow> {
        self.rows.get_mut(self.cursor)
    }

    pub fn row_mut(&mut self, id: &EntryId) -> Option<&mut ViewRow> {
        self.rows.iter_mut().find(|row| &row.id == id)
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            self.cursor = 0;
            return;
        }
        let last = self.rows.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_end(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
    }

    /// Put the cursor on the row showing `id`, or clamp if it is gone
    pub fn focus(&mut self, id: &EntryId) {
        match self.rows.iter().position(|row| &row.id == id) {
            Some(i) => self.cursor = i,
            None => self.clamp_cursor(),
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store_io::read_store;
    use crate::model::{Entry, Priority};
    use tempfile::TempDir;

    const PERIODS: TickPeriods = TickPeriods {
        sync: Duration::from_millis(10),
        reorder: Duration::from_millis(1000),
    };

    fn entry(text: &str, p: i64) -> Entry {
        Entry::new(text, Priority::new(p).unwrap())
    }

    fn tab_with(dir: &TempDir, entries: &[(&str, &str, i64)], now: Instant) -> Tab {
        let mut store = EntryStore::new();
        for (id, text, p) in entries {
            store.upsert(EntryId::new(*id), entry(text, *p));
        }
        let path = dir.path().join("list.json");
        store_io::persist(&path, &store).unwrap();
        Tab::with_store(path, store, PERIODS, now)
    }

    #[test]
    fn open_bootstraps_missing_file() {
        let dir = TempDir::new().unwrap();
        let tab = Tab::open(dir.path().join("new.json"), PERIODS, Instant::now());
        assert_eq!(tab.rows.len(), 1);
        assert_eq!(tab.rows[0].text, "Example Entry");
        assert_eq!(tab.name(), "new");
    }

    #[test]
    fn sync_tick_runs_on_short_period_only() {
        let dir = TempDir::new().unwrap();
        let start = Instant::now();
        let mut tab = tab_with(&dir, &[("1", "a", 5), ("2", "b", 3)], start);
        tab.rows[1].set_priority(Priority::new(9).unwrap());

        let outcome = tab.tick(start + Duration::from_millis(5)).unwrap();
        assert_eq!(outcome, TickOutcome::default());

        let outcome = tab.tick(start + Duration::from_millis(10)).unwrap();
        assert!(!outcome.reordered);
        assert_eq!(outcome.report.unwrap().priority_changes, 1);
        // Not re-sorted until the reorder tick
        assert_eq!(tab.rows[1].id.as_str(), "2");
        assert_eq!(read_store(tab.path()).unwrap(), tab.store);
    }

    #[test]
    fn reorder_tick_resorts_and_keeps_cursor_on_entry() {
        let dir = TempDir::new().unwrap();
        let start = Instant::now();
        let mut tab = tab_with(&dir, &[("1", "a", 5), ("2", "b", 3)], start);
        tab.cursor = 1;
        tab.rows[1].set_priority(Priority::new(9).unwrap());

        let outcome = tab.tick(start + Duration::from_millis(1000)).unwrap();
        assert!(outcome.reordered);
        assert_eq!(tab.rows[0].id.as_str(), "2");
        assert_eq!(tab.cursor, 0);
        assert_eq!(tab.cursor_id().unwrap().as_str(), "2");
    }

    #[test]
    fn create_entry_focuses_new_row() {
        let dir = TempDir::new().unwrap();
        let mut tab = tab_with(&dir, &[("1", "a", 5), ("2", "b", 3)], Instant::now());

        let outcome = tab.create_entry("urgent", 10).unwrap();
        let CreateOutcome::Created(id) = outcome else {
            panic!("expected creation");
        };
        assert_eq!(tab.rows.len(), 3);
        assert_eq!(tab.cursor, 0);
        assert_eq!(tab.cursor_id(), Some(&id));
    }

    #[test]
    fn create_entry_flushes_pending_edits_first() {
        let dir = TempDir::new().unwrap();
        let mut tab = tab_with(&dir, &[("1", "a", 5)], Instant::now());
        tab.rows[0].text = "edited".into();

        tab.create_entry("new one", 2).unwrap();
        assert_eq!(tab.store.get(&EntryId::new("1")).unwrap().text, "edited");
        assert_eq!(tab.rows[0].text, "edited");
    }

    #[test]
    fn rejected_entry_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut tab = tab_with(&dir, &[("1", "a", 5)], Instant::now());
        let before = std::fs::read(tab.path()).unwrap();

        let outcome = tab.create_entry("  ", 5).unwrap();
        assert!(matches!(outcome, CreateOutcome::Rejected(_)));
        assert_eq!(tab.rows.len(), 1);
        assert_eq!(std::fs::read(tab.path()).unwrap(), before);
    }

    #[test]
    fn clear_completed_counts_unsynced_toggles() {
        let dir = TempDir::new().unwrap();
        let mut tab = tab_with(&dir, &[("1", "a", 5), ("2", "b", 3), ("3", "c", 1)], Instant::now());
        tab.cursor = 2;
        tab.rows[1].toggle_completed();

        assert_eq!(tab.clear_completed().unwrap(), 1);
        assert_eq!(tab.rows.len(), 2);
        assert_eq!(tab.cursor, 1);
        assert!(!tab.store.contains(&EntryId::new("2")));
    }

    #[test]
    fn save_as_rebinds_path() {
        let dir = TempDir::new().unwrap();
        let mut tab = tab_with(&dir, &[("1", "a", 5)], Instant::now());
        tab.rows[0].toggle_completed();
        let new_path = dir.path().join("copy.json");

        tab.save_as(new_path.clone()).unwrap();
        assert_eq!(tab.path(), new_path.as_path());
        let saved = read_store(&new_path).unwrap();
        assert!(saved.get(&EntryId::new("1")).unwrap().completed);
    }

    #[test]
    fn cursor_moves_are_clamped() {
        let dir = TempDir::new().unwrap();
        let mut tab = tab_with(&dir, &[("1", "a", 5), ("2", "b", 3)], Instant::now());
        tab.move_cursor(-4);
        assert_eq!(tab.cursor, 0);
        tab.move_cursor(7);
        assert_eq!(tab.cursor, 1);
        tab.cursor_to_start();
        assert_eq!(tab.cursor, 0);
        tab.cursor_to_end();
        assert_eq!(tab.cursor, 1);
    }

    #[test]
    fn wake_restarts_tickers() {
        let dir = TempDir::new().unwrap();
        let start = Instant::now();
        let mut tab = tab_with(&dir, &[("1", "a", 5)], start);
        let later = start + Duration::from_secs(30);
        tab.wake(later);
        assert_eq!(tab.next_due(), later + Duration::from_millis(10));
    }
}
