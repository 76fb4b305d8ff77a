use anyhow::Context;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// The cache server the viewer reads from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    /// Per-request timeout; unset means wait indefinitely
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    pub dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5173,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: "assets".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        // Environment variables with prefix "CACHE_ANALYZER_", e.g.
        // CACHE_ANALYZER_UPSTREAM__BASE_URL=http://10.0.0.2:8000
        config = config.add_source(
            config::Environment::with_prefix("CACHE_ANALYZER")
                .separator("__")
                .prefix_separator("_")
                .try_parsing(true),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.upstream_url()?;
        Ok(app_config)
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn upstream_url(&self) -> anyhow::Result<Url> {
        let url = Url::parse(&self.upstream.base_url)
            .with_context(|| format!("invalid upstream url '{}'", self.upstream.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("upstream url '{}' must be http or https", url);
        }
        Ok(url)
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream.timeout_secs.map(Duration::from_secs)
    }
}
