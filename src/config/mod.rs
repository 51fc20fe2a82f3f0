//! Configuration system for pubsub-gapic.

use crate::auth::CredentialsProvider;
use crate::core::retry::RetryPolicy;
use crate::error::{Error, Result};
use crate::transport::mtls::ClientCertSource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Metadata key reporting the client library versions.
pub const API_CLIENT_HEADER: &str = "x-goog-api-client";

/// Library version information reported on every call.
///
/// Passed explicitly to client construction; the caller decides how the
/// version is discovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Version of the hand-written layer, if any, wrapping this client.
    pub client_library_version: Option<String>,
    /// Version of this generated client.
    pub gapic_version: String,
    /// Optional user agent prefix.
    pub user_agent: Option<String>,
}

impl Default for ClientInfo {
    fn default() -> Self {
        Self {
            client_library_version: None,
            gapic_version: env!("CARGO_PKG_VERSION").to_string(),
            user_agent: None,
        }
    }
}

impl ClientInfo {
    /// Client info with an explicit gapic version.
    pub fn new(gapic_version: impl Into<String>) -> Self {
        Self {
            gapic_version: gapic_version.into(),
            ..Self::default()
        }
    }

    /// Render the `x-goog-api-client` metadata value.
    pub fn to_header_value(&self) -> String {
        let mut parts = vec![format!("gl-rust/{}", rustc_version())];
        if let Some(version) = &self.client_library_version {
            parts.push(format!("gccl/{}", version));
        }
        parts.push(format!("gapic/{}", self.gapic_version));
        if let Some(agent) = &self.user_agent {
            parts.insert(0, agent.clone());
        }
        parts.join(" ")
    }

    /// The metadata pair carrying this info.
    pub fn metadata(&self) -> (String, String) {
        (API_CLIENT_HEADER.to_string(), self.to_header_value())
    }
}

fn rustc_version() -> &'static str {
    option_env!("CARGO_PKG_RUST_VERSION")
        .filter(|v| !v.is_empty())
        .unwrap_or("unknown")
}

/// Options controlling how a client builds its transport.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Override for the API endpoint.
    pub api_endpoint: Option<String>,
    /// Client certificate callback; its presence selects mutual TLS.
    pub client_cert_source: Option<ClientCertSource>,
    /// Provider consulted when no explicit credentials are given.
    pub credentials_provider: Option<Arc<dyn CredentialsProvider>>,
    /// Version information sent with every call.
    pub client_info: ClientInfo,
    /// Retry policy for calls that do not set their own.
    pub default_retry: Option<RetryPolicy>,
}

impl ClientOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API endpoint.
    pub fn with_api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = Some(endpoint.into());
        self
    }

    /// Use mutual TLS with certificates from `source`.
    pub fn with_client_cert_source(mut self, source: ClientCertSource) -> Self {
        self.client_cert_source = Some(source);
        self
    }

    /// Resolve default credentials through `provider`.
    pub fn with_credentials_provider(mut self, provider: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials_provider = Some(provider);
        self
    }

    /// Report `info` on every call.
    pub fn with_client_info(mut self, info: ClientInfo) -> Self {
        self.client_info = info;
        self
    }

    /// Retry policy for calls that do not set their own.
    pub fn with_default_retry(mut self, retry: RetryPolicy) -> Self {
        self.default_retry = Some(retry);
        self
    }

    /// Whether neither an endpoint nor a certificate source is set.
    pub fn is_endpoint_default(&self) -> bool {
        self.api_endpoint.is_none() && self.client_cert_source.is_none()
    }
}

/// Client configuration file for the command line tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API endpoint override.
    pub api_endpoint: Option<String>,
    /// PEM client certificate path.
    pub client_cert_path: Option<PathBuf>,
    /// PEM client key path.
    pub client_key_path: Option<PathBuf>,
    /// Transport label.
    pub transport: Option<String>,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        match (&self.client_cert_path, &self.client_key_path) {
            (Some(_), None) => Err(Error::Config(
                "client_cert_path is set but client_key_path is not".to_string(),
            )),
            (None, Some(_)) => Err(Error::Config(
                "client_key_path is set but client_cert_path is not".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Convert into client options.
    pub fn client_options(&self) -> ClientOptions {
        let mut options = ClientOptions::new();
        if let Some(endpoint) = &self.api_endpoint {
            options = options.with_api_endpoint(endpoint.clone());
        }
        if let (Some(cert), Some(key)) = (&self.client_cert_path, &self.client_key_path) {
            options = options.with_client_cert_source(ClientCertSource::from_files(cert, key));
        }
        options
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    pub level: String,
    /// Log format (text or json).
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Log format enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Plain text format.
    Text,
    /// JSON format.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_info_header() {
        let info = ClientInfo::new("1.2.3");
        let header = info.to_header_value();
        assert!(header.starts_with("gl-rust/"));
        assert!(header.ends_with("gapic/1.2.3"));

        let info = ClientInfo {
            client_library_version: Some("2.0.0".to_string()),
            gapic_version: "1.2.3".to_string(),
            user_agent: Some("my-app/1.0".to_string()),
        };
        let header = info.to_header_value();
        assert!(header.starts_with("my-app/1.0 gl-rust/"));
        assert!(header.contains("gccl/2.0.0 gapic/1.2.3"));
        assert_eq!(info.metadata().0, "x-goog-api-client");
    }

    #[test]
    fn test_default_options_are_endpoint_default() {
        assert!(ClientOptions::new().is_endpoint_default());
        assert!(!ClientOptions::new()
            .with_api_endpoint("squid.clam.whelk")
            .is_endpoint_default());
    }

    #[test]
    fn test_config_validation() {
        let config = ClientConfig {
            client_cert_path: Some(PathBuf::from("cert.pem")),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let config = ClientConfig {
            client_cert_path: Some(PathBuf::from("cert.pem")),
            client_key_path: Some(PathBuf::from("key.pem")),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.client_options().client_cert_source.is_some());
    }

    #[test]
    fn test_config_deserialize() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"api_endpoint": "localhost:8085", "logging": {"level": "debug", "format": "json"}}"#,
        )
        .unwrap();
        assert_eq!(config.api_endpoint.as_deref(), Some("localhost:8085"));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(
            config.client_options().api_endpoint.as_deref(),
            Some("localhost:8085")
        );
    }

    #[test]
    fn test_config_from_missing_file() {
        let result = ClientConfig::from_file(Path::new("/nonexistent/pubsub-gapic.json"));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
