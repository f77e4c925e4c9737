//! Table write pipeline.
//!
//! A table write runs: shape check, `embedding` extraction, `metadata`
//! extraction, then exactly one call into a [`ColumnWriter`]. Any failure
//! before the call aborts the write without touching the writer.

pub mod box_writer;
pub mod client;
pub mod extract;
pub mod shape;
pub mod table_writer;

pub use box_writer::BoxColumnWriter;
pub use client::ColumnWriter;
pub use extract::{extract_column, validate_and_extract};
pub use shape::{classify_shape, validate_shape, ColumnShape};
pub use table_writer::TableWriter;
