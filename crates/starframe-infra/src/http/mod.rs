//! HTTP client for the writer service.

pub mod writer;

pub use writer::HttpColumnWriter;
