//! Writer configuration types.
//!
//! `WriterConfig` represents the `config.toml` that points the CLI at a
//! writer host and supplies the API key.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default writer service host.
pub const DEFAULT_WRITER_URL: &str = "https://writer.starpoint.ai";

/// Configuration for the HTTP writer client.
///
/// At most one of `api_key` and `api_key_file` may be set.
#[derive(Clone, Serialize, Deserialize)]
pub struct WriterConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default)]
    pub api_key: Option<String>,

    /// Path to a file whose trimmed contents are the API key.
    #[serde(default)]
    pub api_key_file: Option<PathBuf>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    DEFAULT_WRITER_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            api_key: None,
            api_key_file: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

// No derived Debug: the API key must not end up in logs.
impl fmt::Debug for WriterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterConfig")
            .field("host", &self.host)
            .field("api_key", &self.api_key.as_ref().map(|_| "****"))
            .field("api_key_file", &self.api_key_file)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_config_defaults() {
        let config = WriterConfig::default();
        assert_eq!(config.host, DEFAULT_WRITER_URL);
        assert!(config.api_key.is_none());
        assert!(config.api_key_file.is_none());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_writer_config_deserialize_empty_uses_defaults() {
        let config: WriterConfig = toml::from_str("").unwrap();
        assert_eq!(config.host, DEFAULT_WRITER_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_writer_config_deserialize_with_values() {
        let toml_str = r#"
host = "http://localhost:8080"
api_key_file = "/etc/starframe/key"
timeout_secs = 5
"#;
        let config: WriterConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "http://localhost:8080");
        assert_eq!(
            config.api_key_file,
            Some(PathBuf::from("/etc/starframe/key"))
        );
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = WriterConfig {
            api_key: Some("super-secret-key".to_string()),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("****"));
    }
}
