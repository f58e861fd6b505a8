//! Builder for creating clients with custom configuration.
//!
//! Keep this surface area small and predictable (developer-friendly).

use crate::client::core::ChatClient;
use crate::config::ClientConfig;
use crate::{Error, Result};
use std::time::Duration;
use url::Url;

pub struct ChatClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    control_timeout: Option<Duration>,
    reload_timeout: Option<Duration>,
    probe_connection: bool,
}

impl ChatClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            control_timeout: None,
            reload_timeout: None,
            probe_connection: false,
        }
    }

    /// Set the gateway base URL (required), e.g. "http://vm-server:8000".
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Deadline for `POST /chat` in seconds. Default 180.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Deadline for `GET /status` and `GET /projects` in seconds. Default 5.
    pub fn control_timeout_secs(mut self, secs: u64) -> Self {
        self.control_timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Deadline for `POST /reload` in seconds. Default 30.
    pub fn reload_timeout_secs(mut self, secs: u64) -> Self {
        self.reload_timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Probe the gateway's `/status` endpoint at build time.
    ///
    /// An unreachable gateway is reported with a warning, not a build
    /// failure: the gateway may come up after the client does.
    pub fn probe_connection(mut self, enable: bool) -> Self {
        self.probe_connection = enable;
        self
    }

    pub async fn build(self) -> Result<ChatClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::configuration("base_url is required"))?;

        Url::parse(&base_url)
            .map_err(|e| Error::configuration(format!("base_url is not a valid URL: {}", e)))?;

        let mut config = ClientConfig::new(base_url);
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(control_timeout) = self.control_timeout {
            config.control_timeout = control_timeout;
        }
        if let Some(reload_timeout) = self.reload_timeout {
            config.reload_timeout = reload_timeout;
        }

        let client = ChatClient::from_config(config)?;

        if self.probe_connection {
            if let Err(e) = client.verify_connection().await {
                tracing::warn!(error = %e, "gateway unreachable at build time");
            }
        }

        Ok(client)
    }
}

impl Default for ChatClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_base_url_required() {
        let err = ChatClientBuilder::new().build().await.unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_invalid_base_url_rejected() {
        let err = ChatClientBuilder::new()
            .base_url("not a url")
            .build()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_timeout_overrides_applied() {
        let client = ChatClientBuilder::new()
            .base_url("http://localhost:8000")
            .timeout_secs(60)
            .control_timeout_secs(2)
            .reload_timeout_secs(10)
            .build()
            .await
            .unwrap();
        assert_eq!(client.config().timeout, Duration::from_secs(60));
        assert_eq!(client.config().control_timeout, Duration::from_secs(2));
        assert_eq!(client.config().reload_timeout, Duration::from_secs(10));
    }
}
