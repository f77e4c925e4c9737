//! Writer client trait.
//!
//! Defines the columnar write interface of a vector store. The HTTP
//! implementation lives in starframe-infra.

use serde_json::Value;
use starframe_types::document::WriteResponse;
use starframe_types::error::WriterError;

/// A vector-store client that accepts columnar writes.
///
/// `embeddings` and `document_metadatas` are row-aligned. The routing
/// identifiers are passed through as given; whether they must be exclusive
/// is up to the implementation.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations must be safe to call concurrently through `&self`.
pub trait ColumnWriter: Send + Sync {
    /// Insert documents built from the two sequences.
    fn column_insert(
        &self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> impl std::future::Future<Output = Result<WriteResponse, WriterError>> + Send;

    /// Update documents built from the two sequences.
    fn column_update(
        &self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> impl std::future::Future<Output = Result<WriteResponse, WriterError>> + Send;

    /// Delete documents built from the two sequences.
    fn column_delete(
        &self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> impl std::future::Future<Output = Result<WriteResponse, WriterError>> + Send;
}
