//! Client configuration options.

use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.stripe.com/v1";

/// Configuration for the Stripe client.
///
/// # Example
///
/// ```
/// use stripe_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(30))
///     .with_user_agent("my-app/1.0")
///     .with_api_version("2015-10-16");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is appended to
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Optional API version to pin to (sent as `Stripe-Version`)
    pub api_version: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(80),
            user_agent: format!("stripe-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            api_version: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another base URL (a mock server, a proxy, ...).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Pin to a specific API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Parse and validate the base URL.
    ///
    /// A trailing slash is removed so paths can be appended verbatim.
    pub(crate) fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(self.base_url.trim_end_matches('/'))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base URL must be an http(s) URL, got {}",
                self.base_url
            )));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(80));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.user_agent.starts_with("stripe-rs/"));
        assert!(config.api_version.is_none());
    }

    #[test]
    fn test_base_url_validation() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:4242/v1/");
        assert_eq!(config.parsed_base_url().unwrap().path(), "/v1");

        let config = ClientConfig::default().with_base_url("mailto:ops@example.com");
        assert!(matches!(config.parsed_base_url(), Err(Error::Config(_))));

        let config = ClientConfig::default().with_base_url("not a url");
        assert!(matches!(config.parsed_base_url(), Err(Error::UrlParse(_))));
    }
}
