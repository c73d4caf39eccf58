pub mod entry_ops;
