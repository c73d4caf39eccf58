//! Reconciliation between the editable table rows and a list's store.
//!
//! Two periodic processes run per visible list: a short synchronizer tick
//! that copies row edits into the store, and a slower reorder tick that
//! re-sorts by priority and re-renders every row.

pub mod color;
pub mod reorder;
pub mod rows;
pub mod synchronizer;
pub mod ticker;

pub use color::priority_color;
pub use reorder::reorder_tick;
pub use rows::{ViewRow, render_rows};
pub use synchronizer::{SyncReport, reconcile, sync_tick};
pub use ticker::Ticker;
