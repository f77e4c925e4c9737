//! Tabular input contract.
//!
//! Any structure exposing named columns of ordered values can be written
//! through the dispatcher by implementing [`Table`]. The in-memory
//! [`ColumnTable`] lives here; the Arrow adapter lives in starframe-infra.

pub mod column_table;

pub use column_table::ColumnTable;

use serde_json::Value;
use starframe_types::error::TableError;

/// A collection of named columns with row-aligned values.
///
/// Column order carries no meaning; columns are addressed by name only.
/// Implementations must not mutate themselves on read, so one table can be
/// shared by concurrent writes.
pub trait Table {
    /// Names of all columns in the table.
    fn column_names(&self) -> Vec<&str>;

    /// Materialize a column's values in row order.
    ///
    /// Returns [`TableError::ColumnNotFound`] when `name` is absent.
    fn column(&self, name: &str) -> Result<Vec<Value>, TableError>;

    fn column_count(&self) -> usize {
        self.column_names().len()
    }

    fn has_column(&self, name: &str) -> bool {
        self.column_names().contains(&name)
    }
}

impl<T: Table + ?Sized> Table for &T {
    fn column_names(&self) -> Vec<&str> {
        (**self).column_names()
    }

    fn column(&self, name: &str) -> Result<Vec<Value>, TableError> {
        (**self).column(name)
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn has_column(&self, name: &str) -> bool {
        (**self).has_column(name)
    }
}
