//! Shared domain types for starframe.
//!
//! This crate contains the types passed between the table layer, the write
//! dispatcher and the writer clients: column name constants, the extracted
//! columnar batch, wire documents, writer configuration and the error enums.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod document;
pub mod error;
pub mod table;
