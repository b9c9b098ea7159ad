//! Client configuration.

use std::time::Duration;

use url::Url;

/// Configuration for the KidsCare service clients.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service, e.g. `http://192.168.107.100:3000`.
    base_url: Url,
    /// HTTP request timeout (default: 10 seconds). Purely a hardening
    /// measure; no core behavior depends on it.
    request_timeout: Duration,
}

/// Errors raised while building a [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The base URL uses a scheme other than http or https.
    #[error("Unsupported URL scheme: {scheme}")]
    UnsupportedScheme {
        /// The offending scheme.
        scheme: String,
    },
}

impl ClientConfig {
    /// Creates a configuration for the service at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base_url)?;
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::UnsupportedScheme {
                    scheme: other.to_string(),
                });
            }
        }
        Ok(Self {
            base_url: url,
            request_timeout: Duration::from_secs(10),
        })
    }

    /// Sets the HTTP request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Full URL for an endpoint path under the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Builds the HTTP client used by the service clients.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created (should not happen in
    /// practice).
    pub(crate) fn http_client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()
            .expect("Failed to create HTTP client")
    }
}
