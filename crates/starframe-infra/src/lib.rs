//! Infrastructure layer for starframe.
//!
//! Contains implementations of the traits defined in `starframe-core`:
//! the reqwest-based writer service client, the Arrow `RecordBatch` table
//! adapter, JSON table file loading and `config.toml` loading.

pub mod config;
pub mod http;
pub mod table;
