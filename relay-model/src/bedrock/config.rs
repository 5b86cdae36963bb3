//! Configuration types for the Amazon Bedrock backend.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default time allowed to establish a connection to the Bedrock endpoint.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default time allowed for a whole `converse` call, including retries made
/// by the SDK transport.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Static AWS credentials read from an env file or the process environment.
#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl StaticCredentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &self.session_token.as_ref().map(|_| "** redacted **"))
            .finish()
    }
}

/// Configuration for Amazon Bedrock.
///
/// The model identifier is not part of the client configuration: one client
/// serves every model, and each request names the model it wants.
///
/// # Example
///
/// ```rust,ignore
/// use relay_model::bedrock::{BedrockConfig, StaticCredentials};
///
/// let config = BedrockConfig::new("eu-west-1")
///     .with_credentials(StaticCredentials::new("AKIA...", "secret"))
///     .with_request_timeout(std::time::Duration::from_secs(60));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BedrockConfig {
    /// AWS region for the Bedrock endpoint (e.g., `"us-east-1"`).
    pub region: String,
    /// Optional custom endpoint URL (e.g., a VPC endpoint).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    /// Explicit credentials. When `None` the standard AWS credential chain is used.
    #[serde(skip)]
    pub credentials: Option<StaticCredentials>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            endpoint_url: None,
            credentials: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl BedrockConfig {
    /// Create a new Bedrock config for the given region.
    pub fn new(region: impl Into<String>) -> Self {
        Self { region: region.into(), ..Default::default() }
    }

    /// Set a custom endpoint URL (e.g., a VPC endpoint).
    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    pub fn with_credentials(mut self, credentials: StaticCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BedrockConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_builder() {
        let config = BedrockConfig::new("eu-west-1")
            .with_endpoint_url("https://vpce.example")
            .with_credentials(StaticCredentials::new("AKID", "SECRET").with_session_token("TOK"))
            .with_request_timeout(Duration::from_secs(90));
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.endpoint_url.as_deref(), Some("https://vpce.example"));
        assert_eq!(config.request_timeout, Duration::from_secs(90));
        assert_eq!(config.credentials.unwrap().session_token.as_deref(), Some("TOK"));
    }

    #[test]
    fn test_credentials_debug_redacts_secrets() {
        let creds = StaticCredentials::new("AKID", "SUPERSECRET").with_session_token("TOKEN123");
        let printed = format!("{creds:?}");
        assert!(printed.contains("AKID"));
        assert!(!printed.contains("SUPERSECRET"));
        assert!(!printed.contains("TOKEN123"));
    }
}
