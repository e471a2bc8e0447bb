//! The transport boundary between the client core and HTTP.
//!
//! The client core only needs one call: send a method, path, credential and
//! encoded parameters, and get back a status code with the raw body.
//! [`HttpTransport`] provides that over `reqwest`; anything else
//! implementing [`Transport`] (a fake in tests, a proxying adapter, ...) can
//! be plugged in with [`StripeClient::with_transport`](crate::StripeClient::with_transport).

use std::future::Future;
use std::pin::Pin;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
pub use reqwest::Method;
use url::Url;

use super::config::ClientConfig;
use super::form::Form;
use crate::auth::ApiKey;
use crate::{Error, Result};

const STRIPE_VERSION: HeaderName = HeaderName::from_static("stripe-version");

/// Type alias for a boxed future used by [`Transport`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One outbound API call.
#[derive(Debug, Clone)]
pub struct ApiRequest<'a> {
    /// HTTP method
    pub method: Method,
    /// Path relative to the API base URL, starting with `/`
    pub path: String,
    /// Key the request is authenticated with
    pub credential: &'a ApiKey,
    /// Encoded parameters: query string for GET/DELETE, body otherwise
    pub form: Form,
}

/// Status and undecoded body of an API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes API calls.
///
/// Implementations report failures to reach the API as
/// [`Error::Transport`] or [`Error::Timeout`]; any HTTP response, whatever
/// its status, is a successful [`RawResponse`].
pub trait Transport: Send + Sync {
    /// Send the request and wait for the response.
    fn invoke<'a>(&'a self, request: ApiRequest<'a>) -> BoxFuture<'a, Result<RawResponse>>;
}

/// [`Transport`] over a `reqwest` HTTP client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
    api_version: Option<String>,
}

impl HttpTransport {
    /// Build a transport from the client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: config.parsed_base_url()?,
            api_version: config.api_version.clone(),
        })
    }

    /// Build the full URL for a path.
    fn url_for(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// Build request headers with authentication.
    fn build_headers(&self, credential: &ApiKey) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", credential.expose()))
            .map_err(|_| Error::InvalidInput("Invalid API key format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        if let Some(ref version) = self.api_version {
            headers.insert(
                STRIPE_VERSION,
                HeaderValue::from_str(version)
                    .map_err(|_| Error::InvalidInput("Invalid API version".to_string()))?,
            );
        }

        Ok(headers)
    }
}

impl Transport for HttpTransport {
    fn invoke<'a>(&'a self, request: ApiRequest<'a>) -> BoxFuture<'a, Result<RawResponse>> {
        Box::pin(async move {
            let mut url = self.url_for(&request.path)?;
            let headers = self.build_headers(request.credential)?;

            let builder = if request.method == Method::GET || request.method == Method::DELETE {
                if !request.form.is_empty() {
                    url.query_pairs_mut().extend_pairs(request.form.pairs().iter());
                }
                self.http.request(request.method, url).headers(headers)
            } else {
                self.http
                    .request(request.method, url)
                    .headers(headers)
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(request.form.to_urlencoded())
            };

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();

            Ok(RawResponse { status, body })
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_paths() {
        let transport =
            HttpTransport::new(&ClientConfig::default().with_base_url("http://localhost:4242/"))
                .unwrap();
        assert_eq!(
            transport.url_for("/accounts/acct_1").unwrap().as_str(),
            "http://localhost:4242/accounts/acct_1"
        );

        let transport = HttpTransport::new(&ClientConfig::default()).unwrap();
        assert_eq!(
            transport.url_for("/account").unwrap().as_str(),
            "https://api.stripe.com/v1/account"
        );
    }

    #[test]
    fn test_headers_carry_bearer_key_and_version() {
        let transport =
            HttpTransport::new(&ClientConfig::default().with_api_version("2015-10-16")).unwrap();
        let headers = transport.build_headers(&ApiKey::new("sk_test_123")).unwrap();

        assert_eq!(headers[AUTHORIZATION], "Bearer sk_test_123");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert_eq!(headers[STRIPE_VERSION], "2015-10-16");
    }

    #[test]
    fn test_invalid_key_is_rejected() {
        let transport = HttpTransport::new(&ClientConfig::default()).unwrap();
        let err = transport.build_headers(&ApiKey::new("sk_test\n123")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
