//! TableWriter -- validates a table and dispatches it to a ColumnWriter.

use starframe_types::document::WriteResponse;
use starframe_types::error::TableWriteError;
use starframe_types::table::{ColumnarBatch, WriteOperation};
use tracing::debug;

use super::client::ColumnWriter;
use super::extract::validate_and_extract;
use crate::table::Table;

/// Dispatches table writes to a vector-store client.
///
/// Holds no state besides the client. It is `Send + Sync` whenever the
/// client is, and the client must tolerate concurrent calls for
/// `TableWriter` to be shared across tasks.
pub struct TableWriter<W> {
    writer: W,
}

impl<W: ColumnWriter> TableWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// The wrapped client.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Insert the table's rows via `column_insert`.
    pub async fn insert_by_table<T: Table + ?Sized>(
        &self,
        table: &T,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> Result<WriteResponse, TableWriteError> {
        self.write_by_table(WriteOperation::Insert, table, collection_id, collection_name)
            .await
    }

    /// Update the table's rows via `column_update`.
    pub async fn update_by_table<T: Table + ?Sized>(
        &self,
        table: &T,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> Result<WriteResponse, TableWriteError> {
        self.write_by_table(WriteOperation::Update, table, collection_id, collection_name)
            .await
    }

    /// Delete the table's rows via `column_delete`.
    pub async fn delete_by_table<T: Table + ?Sized>(
        &self,
        table: &T,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> Result<WriteResponse, TableWriteError> {
        self.write_by_table(WriteOperation::Delete, table, collection_id, collection_name)
            .await
    }

    /// Validate and extract `table`, then make one call to the client
    /// method selected by `operation`.
    ///
    /// Routing identifiers are forwarded untouched. Client errors come back
    /// as [`TableWriteError::Writer`] without modification.
    pub async fn write_by_table<T: Table + ?Sized>(
        &self,
        operation: WriteOperation,
        table: &T,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> Result<WriteResponse, TableWriteError> {
        let ColumnarBatch {
            embeddings,
            document_metadatas,
        } = validate_and_extract(table)?;

        debug!(
            operation = %operation,
            rows = embeddings.len(),
            collection_id,
            collection_name,
            "Dispatching table write"
        );

        let response = match operation {
            WriteOperation::Insert => {
                self.writer
                    .column_insert(embeddings, document_metadatas, collection_id, collection_name)
                    .await?
            }
            WriteOperation::Update => {
                self.writer
                    .column_update(embeddings, document_metadatas, collection_id, collection_name)
                    .await?
            }
            WriteOperation::Delete => {
                self.writer
                    .column_delete(embeddings, document_metadatas, collection_id, collection_name)
                    .await?
            }
        };

        Ok(response)
    }
}
