//! A writer that echoes the extracted batch instead of sending it.

use serde_json::{json, Value};

use starframe_core::writer::ColumnWriter;
use starframe_types::document::WriteResponse;
use starframe_types::error::WriterError;
use starframe_types::table::WriteOperation;

/// Answers every call with a preview of what would have been sent.
pub struct DryRunWriter;

impl DryRunWriter {
    fn preview(
        operation: WriteOperation,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> WriteResponse {
        json!({
            "dry_run": true,
            "operation": operation,
            "collection_id": collection_id,
            "collection_name": collection_name,
            "rows": embeddings.len(),
            "embeddings": embeddings,
            "document_metadatas": document_metadatas,
        })
    }
}

impl ColumnWriter for DryRunWriter {
    async fn column_insert(
        &self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> Result<WriteResponse, WriterError> {
        Ok(Self::preview(
            WriteOperation::Insert,
            embeddings,
            document_metadatas,
            collection_id,
            collection_name,
        ))
    }

    async fn column_update(
        &self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> Result<WriteResponse, WriterError> {
        Ok(Self::preview(
            WriteOperation::Update,
            embeddings,
            document_metadatas,
            collection_id,
            collection_name,
        ))
    }

    async fn column_delete(
        &self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> Result<WriteResponse, WriterError> {
        Ok(Self::preview(
            WriteOperation::Delete,
            embeddings,
            document_metadatas,
            collection_id,
            collection_name,
        ))
    }
}
