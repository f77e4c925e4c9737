//! Table adapters: Arrow record batches and JSON table files.

pub mod arrow;
pub mod file;

pub use arrow::ArrowTable;
pub use file::load_table_file;
