//! Column extraction for table writes.

use serde_json::Value;
use starframe_types::error::{TableError, TableWriteError};
use starframe_types::table::{ColumnarBatch, EMBEDDING_COLUMN, METADATA_COLUMN};

use super::shape::validate_shape;
use crate::table::Table;

/// Pull one named column out of `table` as a plain ordered sequence.
///
/// An absent column becomes [`TableWriteError::MissingColumn`] naming it.
/// Values are returned exactly as the table materializes them.
pub fn extract_column<T: Table + ?Sized>(
    table: &T,
    name: &str,
) -> Result<Vec<Value>, TableWriteError> {
    table.column(name).map_err(|err| match err {
        TableError::ColumnNotFound(_) => TableWriteError::MissingColumn {
            column_name: name.to_string(),
        },
        other => TableWriteError::Table(other),
    })
}

/// Validate the table's shape, then extract `embedding` followed by `metadata`.
///
/// Stops at the first failure: a missing `embedding` column means `metadata`
/// is never read.
pub fn validate_and_extract<T: Table + ?Sized>(
    table: &T,
) -> Result<ColumnarBatch, TableWriteError> {
    validate_shape(table)?;
    let embeddings = extract_column(table, EMBEDDING_COLUMN)?;
    let document_metadatas = extract_column(table, METADATA_COLUMN)?;
    Ok(ColumnarBatch::new(embeddings, document_metadatas))
}
