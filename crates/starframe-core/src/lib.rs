//! Table validation, column extraction and write dispatch for starframe.
//!
//! This crate defines the "ports" the infrastructure layer implements:
//! [`table::Table`] for tabular input and [`writer::ColumnWriter`] for the
//! vector-store client. It depends only on `starframe-types` -- never on
//! `starframe-infra` or any network/IO crate.

pub mod table;
pub mod writer;
