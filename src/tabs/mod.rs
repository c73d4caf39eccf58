pub mod cache;
pub mod tab;

pub use cache::{Keyed, Slot, TabCache};
pub use tab::{Tab, TickOutcome, TickPeriods};
