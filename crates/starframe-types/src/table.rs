//! Column naming and the extracted columnar batch.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::Document;

/// Name of the column holding embedding vectors.
pub const EMBEDDING_COLUMN: &str = "embedding";

/// Name of the column holding per-document metadata.
pub const METADATA_COLUMN: &str = "metadata";

/// Number of columns a table write needs: embedding and metadata.
pub const REQUIRED_COLUMN_COUNT: usize = 2;

/// The two row-aligned sequences extracted from a table.
///
/// Built fresh for every write and handed straight to the writer client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnarBatch {
    pub embeddings: Vec<Value>,
    pub document_metadatas: Vec<Value>,
}

impl ColumnarBatch {
    pub fn new(embeddings: Vec<Value>, document_metadatas: Vec<Value>) -> Self {
        Self {
            embeddings,
            document_metadatas,
        }
    }

    /// Number of embedding rows.
    pub fn len(&self) -> usize {
        self.embeddings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embeddings.is_empty()
    }

    /// True when both sequences have the same number of rows.
    pub fn is_aligned(&self) -> bool {
        self.embeddings.len() == self.document_metadatas.len()
    }

    /// Zip the two sequences into documents, in row order.
    ///
    /// Stops at the shorter sequence when they are not aligned.
    pub fn into_documents(self) -> Vec<Document> {
        self.embeddings
            .into_iter()
            .zip(self.document_metadatas)
            .map(|(embedding, metadata)| Document {
                embedding,
                metadata,
            })
            .collect()
    }
}

/// Which writer method a table write dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOperation {
    Insert,
    Update,
    Delete,
}

impl WriteOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteOperation::Insert => "insert",
            WriteOperation::Update => "update",
            WriteOperation::Delete => "delete",
        }
    }
}

impl fmt::Display for WriteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
