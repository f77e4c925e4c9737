//! Writer configuration loader.
//!
//! Reads `config.toml` from the config directory and deserializes it into
//! [`WriterConfig`]. Falls back to defaults when the file is missing or
//! malformed.

use std::path::{Path, PathBuf};

use secrecy::SecretString;
use starframe_types::config::WriterConfig;
use starframe_types::error::ConfigError;

/// File name looked up inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the config directory.
///
/// Priority: explicit path, then `STARFRAME_CONFIG_DIR`, then
/// `{platform config dir}/starframe`, then `./.starframe`.
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }

    if let Ok(dir) = std::env::var("STARFRAME_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(config) = dirs::config_dir() {
        return config.join("starframe");
    }

    PathBuf::from(".starframe")
}

/// Load writer configuration from `{config_dir}/config.toml`.
///
/// A missing file yields [`WriterConfig::default()`]. An unreadable or
/// malformed file logs a warning and also yields the default. A relative
/// `api_key_file` is taken relative to `config_dir`.
pub async fn load_writer_config(config_dir: &Path) -> WriterConfig {
    let config_path = config_dir.join(CONFIG_FILE_NAME);

    let config = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => toml::from_str::<WriterConfig>(&content).unwrap_or_else(|err| {
            tracing::warn!(
                path = %config_path.display(),
                error = %err,
                "Invalid writer config, using defaults"
            );
            WriterConfig::default()
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => WriterConfig::default(),
        Err(err) => {
            tracing::warn!(
                path = %config_path.display(),
                error = %err,
                "Unreadable writer config, using defaults"
            );
            WriterConfig::default()
        }
    };

    let config = anchor_key_file(config, config_dir);
    tracing::debug!(
        path = %config_path.display(),
        host = %config.host,
        api_key_file = ?config.api_key_file,
        "Loaded writer config"
    );
    config
}

fn anchor_key_file(mut config: WriterConfig, config_dir: &Path) -> WriterConfig {
    if let Some(path) = config.api_key_file.take() {
        config.api_key_file = Some(if path.is_relative() {
            config_dir.join(path)
        } else {
            path
        });
    }
    config
}

/// Resolve the API key from exactly one of `api_key` or `api_key_file`.
///
/// The key file's contents are trimmed.
pub async fn resolve_api_key(config: &WriterConfig) -> Result<SecretString, ConfigError> {
    match (&config.api_key, &config.api_key_file) {
        (Some(_), Some(_)) => Err(ConfigError::MultipleApiKeys),
        (None, None) => Err(ConfigError::NoApiKey),
        (Some(key), None) => Ok(SecretString::from(key.trim().to_string())),
        (None, Some(path)) => {
            if !tokio::fs::metadata(path)
                .await
                .map(|meta| meta.is_file())
                .unwrap_or(false)
            {
                return Err(ConfigError::ApiKeyFileMissing);
            }
            let content = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ConfigError::ApiKeyFileRead(e.to_string()))?;
            Ok(SecretString::from(content.trim().to_string()))
        }
    }
}
