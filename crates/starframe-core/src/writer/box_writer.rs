//! BoxColumnWriter -- object-safe dynamic dispatch wrapper for ColumnWriter.
//!
//! 1. Define an object-safe `ColumnWriterDyn` trait with boxed futures
//! 2. Blanket-impl `ColumnWriterDyn` for all `T: ColumnWriter`
//! 3. `BoxColumnWriter` wraps `Box<dyn ColumnWriterDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;
use starframe_types::document::WriteResponse;
use starframe_types::error::WriterError;

use super::client::ColumnWriter;

type WriteFuture<'a> =
    Pin<Box<dyn Future<Output = Result<WriteResponse, WriterError>> + Send + 'a>>;

/// Object-safe version of [`ColumnWriter`] with boxed futures.
///
/// A blanket implementation is provided for all types implementing `ColumnWriter`.
pub trait ColumnWriterDyn: Send + Sync {
    fn column_insert_boxed<'a>(
        &'a self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&'a str>,
        collection_name: Option<&'a str>,
    ) -> WriteFuture<'a>;

    fn column_update_boxed<'a>(
        &'a self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&'a str>,
        collection_name: Option<&'a str>,
    ) -> WriteFuture<'a>;

    fn column_delete_boxed<'a>(
        &'a self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&'a str>,
        collection_name: Option<&'a str>,
    ) -> WriteFuture<'a>;
}

impl<T: ColumnWriter> ColumnWriterDyn for T {
    fn column_insert_boxed<'a>(
        &'a self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&'a str>,
        collection_name: Option<&'a str>,
    ) -> WriteFuture<'a> {
        Box::pin(self.column_insert(embeddings, document_metadatas, collection_id, collection_name))
    }

    fn column_update_boxed<'a>(
        &'a self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&'a str>,
        collection_name: Option<&'a str>,
    ) -> WriteFuture<'a> {
        Box::pin(self.column_update(embeddings, document_metadatas, collection_id, collection_name))
    }

    fn column_delete_boxed<'a>(
        &'a self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&'a str>,
        collection_name: Option<&'a str>,
    ) -> WriteFuture<'a> {
        Box::pin(self.column_delete(embeddings, document_metadatas, collection_id, collection_name))
    }
}

/// Type-erased writer client for runtime selection.
///
/// Since `ColumnWriter` uses RPITIT it cannot be a trait object directly.
/// `BoxColumnWriter` implements `ColumnWriter` itself, so a
/// `TableWriter<BoxColumnWriter>` can hold either an HTTP client or a
/// dry-run writer chosen at startup.
pub struct BoxColumnWriter {
    inner: Box<dyn ColumnWriterDyn>,
}

impl BoxColumnWriter {
    /// Wrap a concrete `ColumnWriter` in a type-erased box.
    pub fn new<T: ColumnWriter + 'static>(writer: T) -> Self {
        Self {
            inner: Box::new(writer),
        }
    }
}

impl ColumnWriter for BoxColumnWriter {
    async fn column_insert(
        &self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> Result<WriteResponse, WriterError> {
        self.inner
            .column_insert_boxed(embeddings, document_metadatas, collection_id, collection_name)
            .await
    }

    async fn column_update(
        &self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> Result<WriteResponse, WriterError> {
        self.inner
            .column_update_boxed(embeddings, document_metadatas, collection_id, collection_name)
            .await
    }

    async fn column_delete(
        &self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> Result<WriteResponse, WriterError> {
        self.inner
            .column_delete_boxed(embeddings, document_metadatas, collection_id, collection_name)
            .await
    }
}
