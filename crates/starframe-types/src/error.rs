use thiserror::Error;

/// Errors raised by a table implementation while reading columns.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    #[error("column '{column}' has unsupported data type {data_type}")]
    UnsupportedType { column: String, data_type: String },

    #[error("table read error: {0}")]
    Io(String),

    #[error("table parse error: {0}")]
    Parse(String),
}

/// Errors from a writer client (the vector-store side of a table write).
#[derive(Debug, Error)]
pub enum WriterError {
    #[error("No host value provided. A host must be provided.")]
    NoHost,

    #[error("Provided host {0} is not a valid url format.")]
    InvalidHost(String),

    #[error("Please provide at least one value for either collection_id or collection_name.")]
    NoCollection,

    #[error("Please only provide either collection_id or collection_name in your request.")]
    MultipleCollections,

    #[error("Dimensionality must be greater than 0.")]
    InvalidDimensionality,

    #[error("metadata at row {row} has no string or numeric 'id' to address the document by")]
    MissingDocumentId { row: usize },

    #[error("host {host} cannot be validated: {message}")]
    Unhealthy { host: String, message: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("request failed with status code {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Errors resolving writer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Please only provide either api_key or filepath with the api_key in your initialization.")]
    MultipleApiKeys,

    #[error("Please provide at least one value for either api_key or filepath where the api key lives.")]
    NoApiKey,

    #[error("The provided filepath for the API key is not a valid file.")]
    ApiKeyFileMissing,

    #[error("failed to read API key file: {0}")]
    ApiKeyFileRead(String),
}

/// Errors from a table write (`insert_by_table` / `update_by_table` / `delete_by_table`).
///
/// `Validation`, `MissingColumn` and `Table` are raised before the writer is
/// called. `Writer` carries the client's error unchanged.
#[derive(Debug, Error)]
pub enum TableWriteError {
    #[error("not enough columns in table: both an embedding and a metadata column are required")]
    Validation,

    #[error("missing column '{column_name}' expected for table write")]
    MissingColumn { column_name: String },

    #[error(transparent)]
    Table(TableError),

    #[error(transparent)]
    Writer(#[from] WriterError),
}

impl TableWriteError {
    /// Name of the missing column, if this is a `MissingColumn` error.
    pub fn missing_column(&self) -> Option<&str> {
        match self {
            Self::MissingColumn { column_name } => Some(column_name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_names_the_column() {
        let err = TableWriteError::MissingColumn {
            column_name: "embedding".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "missing column 'embedding' expected for table write"
        );
        assert_eq!(err.missing_column(), Some("embedding"));
    }

    #[test]
    fn test_missing_column_is_distinct_from_column_not_found() {
        let table_err = TableWriteError::Table(TableError::ColumnNotFound("metadata".into()));
        assert!(table_err.missing_column().is_none());
        assert_eq!(table_err.to_string(), "column 'metadata' not found");
    }

    #[test]
    fn test_writer_error_is_transparent() {
        let err: TableWriteError = WriterError::Status {
            status: 503,
            body: "unavailable".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "request failed with status code 503: unavailable"
        );
        assert!(matches!(
            err,
            TableWriteError::Writer(WriterError::Status { status: 503, .. })
        ));
    }

    #[test]
    fn test_collection_error_messages() {
        assert!(WriterError::NoCollection.to_string().contains("at least one value"));
        assert!(WriterError::MultipleCollections.to_string().contains("only provide either"));
        assert!(WriterError::MissingDocumentId { row: 3 }.to_string().contains("row 3"));
    }
}
