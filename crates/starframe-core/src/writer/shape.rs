//! Column-count pre-check run before any extraction.

use starframe_types::error::TableWriteError;
use starframe_types::table::REQUIRED_COLUMN_COUNT;
use tracing::warn;

use crate::table::Table;

/// Logged when a table carries columns beyond embedding and metadata.
pub const TOO_MANY_COLUMNS_WARNING: &str =
    "more columns than needed in table; only embedding and metadata columns will be used";

/// Outcome of a successful column-count check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnShape {
    /// Exactly the required number of columns.
    Exact,
    /// More columns than required; the extras are ignored.
    Excess { extra: usize },
}

/// Classify a column count against [`REQUIRED_COLUMN_COUNT`].
///
/// Fewer columns than required is a [`TableWriteError::Validation`].
pub fn classify_shape(column_count: usize) -> Result<ColumnShape, TableWriteError> {
    if column_count < REQUIRED_COLUMN_COUNT {
        Err(TableWriteError::Validation)
    } else if column_count == REQUIRED_COLUMN_COUNT {
        Ok(ColumnShape::Exact)
    } else {
        Ok(ColumnShape::Excess {
            extra: column_count - REQUIRED_COLUMN_COUNT,
        })
    }
}

/// Check that `table` has enough columns for a write.
///
/// Only the column count is inspected, never names or row counts. Excess
/// columns emit a warning and the write continues.
pub fn validate_shape<T: Table + ?Sized>(table: &T) -> Result<(), TableWriteError> {
    let columns = table.column_count();
    if let ColumnShape::Excess { extra } = classify_shape(columns)? {
        warn!(columns, extra, "{TOO_MANY_COLUMNS_WARNING}");
    }
    Ok(())
}
