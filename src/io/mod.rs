pub mod config_io;
pub mod list_dir;
pub mod store_io;
