pub mod config;
pub mod entry;
pub mod store;

pub use config::*;
pub use entry::*;
pub use store::*;
