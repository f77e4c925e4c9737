//! Wire types for the writer service's documents and collections endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response body returned by the writer service, passed through as-is.
pub type WriteResponse = Value;

/// One inserted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub embedding: Value,
    pub metadata: Value,
}

/// Body of a request to the documents endpoint.
///
/// `D` is the per-operation document shape; deletes send id strings.
/// Absent routing identifiers serialize as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentsRequest<'a, D> {
    pub collection_id: Option<&'a str>,
    pub collection_name: Option<&'a str>,
    pub documents: Vec<D>,
}

/// Body of a `POST` to the collections endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCollectionRequest<'a> {
    pub name: &'a str,
    pub dimensionality: u32,
}

/// Body of a `DELETE` to the collections endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteCollectionRequest<'a> {
    pub collection_id: &'a str,
}
