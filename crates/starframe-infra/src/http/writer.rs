//! HttpColumnWriter -- concrete [`ColumnWriter`] for the writer service.
//!
//! Sends documents to `/api/v1/documents` (POST insert, PATCH update,
//! DELETE delete) and manages collections at `/api/v1/collections`.
//! Requests carry the API key in the `x-starpoint-key` header.
//!
//! The column adapters pair embeddings with metadata row by row. Inserts
//! send `{embedding, metadata}` documents. Updates send `{id, embedding,
//! metadata}` and deletes send bare id strings, both taking the id from the
//! row's metadata.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use starframe_core::writer::ColumnWriter;
use starframe_types::document::{
    CreateCollectionRequest, DeleteCollectionRequest, Document, DocumentsRequest, WriteResponse,
};
use starframe_types::error::WriterError;
use starframe_types::table::ColumnarBatch;

/// Path of the documents endpoint.
pub const DOCUMENTS_PATH: &str = "/api/v1/documents";

/// Path of the collections endpoint.
pub const COLLECTIONS_PATH: &str = "/api/v1/collections";

/// Header carrying the API key.
pub const API_HEADER_KEY: &str = "x-starpoint-key";

/// Body a healthy host answers with on `GET /`.
pub const HEALTH_CHECK_MESSAGE: &str = "hello.";

const EMBEDDING_METADATA_LENGTH_MISMATCH_WARNING: &str =
    "embeddings and document_metadatas differ in length; documents will be truncated to the shorter side";

/// Writer service client.
///
/// Unlike the dispatcher in starframe-core, this client enforces that
/// exactly one of `collection_id` / `collection_name` is given.
pub struct HttpColumnWriter {
    client: reqwest::Client,
    host: String,
    api_key: SecretString,
}

// No Debug derive: keeps the client out of logs along with its key.

impl HttpColumnWriter {
    /// Create a client for `host` without contacting it.
    ///
    /// The host must be a valid http(s) URL; trailing slashes are trimmed.
    pub fn new(host: &str, api_key: SecretString, timeout: Duration) -> Result<Self, WriterError> {
        let host = validate_host(host)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("starframe/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WriterError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            host,
            api_key,
        })
    }

    /// Create a client and run [`HttpColumnWriter::check_health`] against the host.
    pub async fn connect(
        host: &str,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, WriterError> {
        let writer = Self::new(host, api_key, timeout)?;
        writer.check_health().await?;
        Ok(writer)
    }

    /// The normalized host URL.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// `GET` the host root.
    ///
    /// A non-success status is an error. An unexpected body only logs a
    /// warning, since the host may still serve writes.
    pub async fn check_health(&self) -> Result<(), WriterError> {
        let response = self
            .client
            .get(&self.host)
            .send()
            .await
            .map_err(|e| WriterError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| WriterError::Transport(format!("failed to read health body: {e}")))?;
        if !status.is_success() {
            return Err(WriterError::Unhealthy {
                host: self.host.clone(),
                message: format!("HTTP {status}: {text}"),
            });
        }

        if text != HEALTH_CHECK_MESSAGE {
            warn!(
                host = %self.host,
                response = %text,
                "Host did not answer with the expected health message; it may be unable to serve requests"
            );
        }
        Ok(())
    }

    /// Insert documents into an existing collection.
    pub async fn insert(
        &self,
        documents: Vec<Document>,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> Result<WriteResponse, WriterError> {
        self.send_documents(Method::POST, documents, collection_id, collection_name)
            .await
    }

    /// Update documents in an existing collection.
    ///
    /// Documents are sent as given, typically `{id, metadata}` objects.
    pub async fn update(
        &self,
        documents: Vec<Value>,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> Result<WriteResponse, WriterError> {
        self.send_documents(Method::PATCH, documents, collection_id, collection_name)
            .await
    }

    /// Remove documents from an existing collection by id.
    pub async fn delete(
        &self,
        document_ids: Vec<String>,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> Result<WriteResponse, WriterError> {
        self.send_documents(Method::DELETE, document_ids, collection_id, collection_name)
            .await
    }

    /// Create a collection. `dimensionality` must be greater than 0.
    pub async fn create_collection(
        &self,
        collection_name: &str,
        dimensionality: u32,
    ) -> Result<WriteResponse, WriterError> {
        if dimensionality == 0 {
            return Err(WriterError::InvalidDimensionality);
        }

        let body = CreateCollectionRequest {
            name: collection_name,
            dimensionality,
        };
        self.send_json(Method::POST, COLLECTIONS_PATH, &body).await
    }

    /// Delete a collection by id.
    pub async fn delete_collection(
        &self,
        collection_id: &str,
    ) -> Result<WriteResponse, WriterError> {
        let body = DeleteCollectionRequest { collection_id };
        self.send_json(Method::DELETE, COLLECTIONS_PATH, &body).await
    }

    async fn send_documents<D: Serialize + Send>(
        &self,
        method: Method,
        documents: Vec<D>,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> Result<WriteResponse, WriterError> {
        check_collection_identifiers(collection_id, collection_name)?;

        let body = DocumentsRequest {
            collection_id,
            collection_name,
            documents,
        };
        self.send_json(method, DOCUMENTS_PATH, &body).await
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<WriteResponse, WriterError> {
        let url = format!("{}{}", self.host, path);
        debug!(method = %method, url = %url, "Sending writer request");

        let response = self
            .client
            .request(method, &url)
            .header(API_HEADER_KEY, self.api_key.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(|e| WriterError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WriterError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| WriterError::Decode(format!("failed to parse response: {e}")))
    }
}

impl ColumnWriter for HttpColumnWriter {
    async fn column_insert(
        &self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> Result<WriteResponse, WriterError> {
        let documents = zip_documents(embeddings, document_metadatas);
        self.insert(documents, collection_id, collection_name).await
    }

    async fn column_update(
        &self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> Result<WriteResponse, WriterError> {
        let documents = update_documents(embeddings, document_metadatas)?;
        self.update(documents, collection_id, collection_name).await
    }

    async fn column_delete(
        &self,
        embeddings: Vec<Value>,
        document_metadatas: Vec<Value>,
        collection_id: Option<&str>,
        collection_name: Option<&str>,
    ) -> Result<WriteResponse, WriterError> {
        let ids = document_ids(embeddings, document_metadatas)?;
        self.delete(ids, collection_id, collection_name).await
    }
}

/// Check a host string and normalize it for URL composition.
pub fn validate_host(host: &str) -> Result<String, WriterError> {
    if host.is_empty() {
        return Err(WriterError::NoHost);
    }

    match reqwest::Url::parse(host) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
        _ => return Err(WriterError::InvalidHost(host.to_string())),
    }

    Ok(host.trim_end_matches('/').to_string())
}

/// Require exactly one routing identifier.
///
/// Empty strings count as absent when checking for a collision.
pub fn check_collection_identifiers(
    collection_id: Option<&str>,
    collection_name: Option<&str>,
) -> Result<(), WriterError> {
    match (collection_id, collection_name) {
        (None, None) => Err(WriterError::NoCollection),
        (Some(id), Some(name)) if !id.is_empty() && !name.is_empty() => {
            Err(WriterError::MultipleCollections)
        }
        _ => Ok(()),
    }
}

/// Pair the two columns, warning when they are not aligned.
fn aligned(embeddings: Vec<Value>, document_metadatas: Vec<Value>) -> ColumnarBatch {
    let batch = ColumnarBatch::new(embeddings, document_metadatas);
    if !batch.is_aligned() {
        warn!(
            embeddings = batch.embeddings.len(),
            document_metadatas = batch.document_metadatas.len(),
            "{EMBEDDING_METADATA_LENGTH_MISMATCH_WARNING}"
        );
    }
    batch
}

fn zip_documents(embeddings: Vec<Value>, document_metadatas: Vec<Value>) -> Vec<Document> {
    aligned(embeddings, document_metadatas).into_documents()
}

/// `{id, embedding, metadata}` per row, with the id read from the metadata.
fn update_documents(
    embeddings: Vec<Value>,
    document_metadatas: Vec<Value>,
) -> Result<Vec<Value>, WriterError> {
    zip_documents(embeddings, document_metadatas)
        .into_iter()
        .enumerate()
        .map(|(row, Document { embedding, metadata })| {
            let id = metadata_id(row, &metadata)?;
            Ok(json!({"id": id, "embedding": embedding, "metadata": metadata}))
        })
        .collect()
}

/// The id of every row, read from the metadata's `id` field.
fn document_ids(
    embeddings: Vec<Value>,
    document_metadatas: Vec<Value>,
) -> Result<Vec<String>, WriterError> {
    zip_documents(embeddings, document_metadatas)
        .iter()
        .enumerate()
        .map(|(row, document)| metadata_id(row, &document.metadata))
        .collect()
}

/// String ids are used as-is; numeric ids are stringified.
fn metadata_id(row: usize, metadata: &Value) -> Result<String, WriterError> {
    match metadata.get("id") {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(WriterError::MissingDocumentId { row }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    // --- Local test server ---

    #[derive(Debug, Clone)]
    struct CapturedRequest {
        method: String,
        path: String,
        api_key: Option<String>,
        body: Value,
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<CapturedRequest>>>);

    impl Captured {
        fn requests(&self) -> Vec<CapturedRequest> {
            self.0.lock().unwrap().clone()
        }
    }

    async fn record(
        State(captured): State<Captured>,
        method: axum::http::Method,
        uri: axum::http::Uri,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        captured.0.lock().unwrap().push(CapturedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            api_key: headers
                .get(API_HEADER_KEY)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body,
        });
        Json(json!({"status": "ok"}))
    }

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn recording_server() -> (String, Captured) {
        let captured = Captured::default();
        let router = Router::new()
            .route("/", get(|| async { HEALTH_CHECK_MESSAGE }))
            .route(DOCUMENTS_PATH, post(record).patch(record).delete(record))
            .route(COLLECTIONS_PATH, post(record).delete(record))
            .with_state(captured.clone());
        (spawn_server(router).await, captured)
    }

    fn writer_for(host: &str) -> HttpColumnWriter {
        HttpColumnWriter::new(
            host,
            SecretString::from("test-key".to_string()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    // --- Pure helpers ---

    #[test]
    fn test_validate_host_trims_trailing_slashes() {
        assert_eq!(
            validate_host("https://writer.example.com//").unwrap(),
            "https://writer.example.com"
        );
        assert_eq!(
            validate_host("http://localhost:8080").unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_validate_host_rejects_empty_and_invalid() {
        assert!(matches!(validate_host(""), Err(WriterError::NoHost)));
        assert!(matches!(
            validate_host("not a url"),
            Err(WriterError::InvalidHost(_))
        ));
        assert!(matches!(
            validate_host("ftp://files.example.com"),
            Err(WriterError::InvalidHost(_))
        ));
    }

    #[test]
    fn test_check_collection_identifiers() {
        assert!(matches!(
            check_collection_identifiers(None, None),
            Err(WriterError::NoCollection)
        ));
        assert!(matches!(
            check_collection_identifiers(Some("abc"), Some("docs")),
            Err(WriterError::MultipleCollections)
        ));
        assert!(check_collection_identifiers(Some("abc"), None).is_ok());
        assert!(check_collection_identifiers(None, Some("docs")).is_ok());
        assert!(check_collection_identifiers(Some(""), Some("docs")).is_ok());
    }

    #[test]
    fn test_zip_documents_pairs_rows() {
        let docs = zip_documents(
            vec![json!([0.1, 0.2]), json!([0.3, 0.4])],
            vec![json!({"id": 1}), json!({"id": 2})],
        );
        assert_eq!(
            docs,
            vec![
                Document {
                    embedding: json!([0.1, 0.2]),
                    metadata: json!({"id": 1}),
                },
                Document {
                    embedding: json!([0.3, 0.4]),
                    metadata: json!({"id": 2}),
                },
            ]
        );
    }

    // --- Against a local server ---

    #[tokio::test]
    async fn test_column_insert_posts_documents() {
        let (host, captured) = recording_server().await;
        let writer = writer_for(&host);

        let response = writer
            .column_insert(
                vec![json!([0.1, 0.2]), json!([0.3, 0.4])],
                vec![json!({"id": 1}), json!({"id": 2})],
                Some("abc"),
                None,
            )
            .await
            .unwrap();
        assert_eq!(response, json!({"status": "ok"}));

        let requests = captured.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, DOCUMENTS_PATH);
        assert_eq!(requests[0].api_key.as_deref(), Some("test-key"));
        assert_eq!(
            requests[0].body,
            json!({
                "collection_id": "abc",
                "collection_name": null,
                "documents": [
                    {"embedding": [0.1, 0.2], "metadata": {"id": 1}},
                    {"embedding": [0.3, 0.4], "metadata": {"id": 2}},
                ],
            })
        );
    }

    #[tokio::test]
    async fn test_column_update_patches_documents_with_ids() {
        let (host, captured) = recording_server().await;
        let writer = writer_for(&host);

        writer
            .column_update(
                vec![json!([1.0]), json!([2.0])],
                vec![json!({"id": "uuid-1", "tag": "a"}), json!({"id": 7})],
                None,
                Some("docs"),
            )
            .await
            .unwrap();

        let requests = captured.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "PATCH");
        assert_eq!(
            requests[0].body,
            json!({
                "collection_id": null,
                "collection_name": "docs",
                "documents": [
                    {"id": "uuid-1", "embedding": [1.0], "metadata": {"id": "uuid-1", "tag": "a"}},
                    {"id": "7", "embedding": [2.0], "metadata": {"id": 7}},
                ],
            })
        );
    }

    #[tokio::test]
    async fn test_column_delete_sends_id_strings() {
        let (host, captured) = recording_server().await;
        let writer = writer_for(&host);

        writer
            .column_delete(vec![json!([0.1])], vec![json!({"id": "uuid-1"})], Some("abc"), None)
            .await
            .unwrap();

        let requests = captured.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "DELETE");
        assert_eq!(requests[0].path, DOCUMENTS_PATH);
        assert_eq!(
            requests[0].body,
            json!({"collection_id": "abc", "collection_name": null, "documents": ["uuid-1"]})
        );
    }

    #[tokio::test]
    async fn test_column_delete_without_ids_sends_nothing() {
        let (host, captured) = recording_server().await;
        let writer = writer_for(&host);

        let err = writer
            .column_delete(
                vec![json!([0.1]), json!([0.2])],
                vec![json!({"id": "uuid-1"}), json!({"title": "no id"})],
                Some("abc"),
                None,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, WriterError::MissingDocumentId { row: 1 }));
        assert!(captured.requests().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_pass_documents_through() {
        let (host, captured) = recording_server().await;
        let writer = writer_for(&host);

        writer
            .update(vec![json!({"id": "uuid-1", "metadata": {"k": "v"}})], Some("abc"), None)
            .await
            .unwrap();
        writer
            .delete(vec!["uuid-1".to_string(), "uuid-2".to_string()], Some("abc"), None)
            .await
            .unwrap();

        let requests = captured.requests();
        assert_eq!(requests[0].method, "PATCH");
        assert_eq!(
            requests[0].body["documents"],
            json!([{"id": "uuid-1", "metadata": {"k": "v"}}])
        );
        assert_eq!(requests[1].method, "DELETE");
        assert_eq!(requests[1].body["documents"], json!(["uuid-1", "uuid-2"]));
    }

    #[test]
    fn test_metadata_id_accepts_strings_and_numbers() {
        assert_eq!(metadata_id(0, &json!({"id": "a"})).unwrap(), "a");
        assert_eq!(metadata_id(0, &json!({"id": 42})).unwrap(), "42");
        assert!(matches!(
            metadata_id(2, &json!({"id": [1]})),
            Err(WriterError::MissingDocumentId { row: 2 })
        ));
        assert!(matches!(
            metadata_id(0, &json!("not an object")),
            Err(WriterError::MissingDocumentId { row: 0 })
        ));
    }

    #[tokio::test]
    async fn test_collection_check_happens_before_request() {
        let (host, captured) = recording_server().await;
        let writer = writer_for(&host);

        let err = writer
            .column_insert(vec![json!([1.0])], vec![json!({})], None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, WriterError::NoCollection));
        assert!(captured.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_and_delete_collection() {
        let (host, captured) = recording_server().await;
        let writer = writer_for(&host);

        writer.create_collection("articles", 384).await.unwrap();
        writer.delete_collection("abc").await.unwrap();
        assert!(matches!(
            writer.create_collection("articles", 0).await,
            Err(WriterError::InvalidDimensionality)
        ));

        let requests = captured.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].path, COLLECTIONS_PATH);
        assert_eq!(requests[0].body, json!({"name": "articles", "dimensionality": 384}));
        assert_eq!(requests[1].method, "DELETE");
        assert_eq!(requests[1].body, json!({"collection_id": "abc"}));
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let router = Router::new().route(
            DOCUMENTS_PATH,
            post(|| async { (StatusCode::UNAUTHORIZED, "invalid api key") }),
        );
        let host = spawn_server(router).await;
        let writer = writer_for(&host);

        let err = writer
            .column_insert(vec![json!([1.0])], vec![json!({})], Some("abc"), None)
            .await
            .unwrap_err();
        match err {
            WriterError::Status { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connect_checks_health() {
        let (host, _captured) = recording_server().await;
        let writer = HttpColumnWriter::connect(
            &format!("{host}/"),
            SecretString::from("test-key".to_string()),
            Duration::from_secs(5),
        )
        .await
        .unwrap();
        assert_eq!(writer.host(), host);
    }

    #[tokio::test]
    async fn test_unexpected_health_body_is_not_fatal() {
        let router = Router::new().route("/", get(|| async { "busy" }));
        let host = spawn_server(router).await;
        assert!(writer_for(&host).check_health().await.is_ok());
    }

    #[tokio::test]
    async fn test_unhealthy_host_is_an_error() {
        let router = Router::new().route(
            "/",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let host = spawn_server(router).await;
        assert!(matches!(
            writer_for(&host).check_health().await,
            Err(WriterError::Unhealthy { .. })
        ));
    }

    #[tokio::test]
    async fn test_truncated_health_body_is_a_transport_error() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            // Promise more body than is sent, then hang up.
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 64\r\n\r\nhel")
                .await;
        });

        let err = writer_for(&format!("http://{addr}"))
            .check_health()
            .await
            .unwrap_err();
        assert!(matches!(err, WriterError::Transport(_)), "{err:?}");
    }
}
