//! Resolved writer settings shared by the command handlers.

use std::path::PathBuf;
use std::time::Duration;

use starframe_infra::config::{load_writer_config, resolve_api_key, resolve_config_dir};
use starframe_infra::http::HttpColumnWriter;
use starframe_types::config::WriterConfig;

/// Configuration after applying `config.toml` and command-line overrides.
pub struct AppState {
    pub config_dir: PathBuf,
    pub config: WriterConfig,
}

impl AppState {
    /// Load `config.toml` from the resolved config dir and apply overrides.
    pub async fn init(
        config_dir: Option<PathBuf>,
        host: Option<&str>,
        api_key: Option<&str>,
    ) -> Self {
        let config_dir = resolve_config_dir(config_dir);
        let config = apply_overrides(load_writer_config(&config_dir).await, host, api_key);
        tracing::debug!(config_dir = %config_dir.display(), ?config, "Resolved writer config");
        Self { config_dir, config }
    }

    /// Build an HTTP writer from the resolved config.
    ///
    /// Does not contact the host; see [`HttpColumnWriter::check_health`].
    pub async fn http_writer(&self) -> anyhow::Result<HttpColumnWriter> {
        let api_key = resolve_api_key(&self.config).await?;
        let writer = HttpColumnWriter::new(
            &self.config.host,
            api_key,
            Duration::from_secs(self.config.timeout_secs),
        )?;
        Ok(writer)
    }
}

/// Command-line values win over file values. An `--api-key` also clears
/// any configured key file.
pub fn apply_overrides(
    mut config: WriterConfig,
    host: Option<&str>,
    api_key: Option<&str>,
) -> WriterConfig {
    if let Some(host) = host {
        config.host = host.to_string();
    }
    if let Some(api_key) = api_key {
        config.api_key = Some(api_key.to_string());
        config.api_key_file = None;
    }
    config
}
