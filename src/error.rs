//! Error types for the Stripe API client.
//!
//! Every fallible operation in this crate returns [`Result`], whose error
//! side distinguishes transport failures, remote rejections (with a dedicated
//! [`Error::NotFound`] for absent resources) and response decode failures.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Stripe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Stripe API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced an HTTP response (connection refused,
    /// DNS failure, TLS error, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request timed out in the transport.
    #[error("Request timeout")]
    Timeout,

    /// The API answered with a non-2xx status.
    #[error("API error: {0}")]
    Request(ApiError),

    /// The API answered 404 for the requested resource.
    #[error("Not found: {0}")]
    NotFound(ApiError),

    /// The response body did not match the expected JSON shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Error payload returned by the API alongside a non-2xx status.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,
    /// Error category reported by the API (e.g. `invalid_request_error`)
    pub error_type: Option<String>,
    /// Machine-readable error code, when present
    pub code: Option<String>,
    /// Human-readable error message
    pub message: String,
    /// The request parameter the error relates to, when present
    pub param: Option<String>,
    /// Raw response body for debugging
    pub body: Value,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "status={}", self.status)?;
        if let Some(error_type) = &self.error_type {
            write!(f, ", type={error_type}")?;
        }
        if let Some(code) = &self.code {
            write!(f, ", code={code}")?;
        }
        write!(f, ", message={}", self.message)
    }
}

impl ApiError {
    /// Build the payload from a status code and the decoded error body.
    ///
    /// Bodies that are not JSON objects (or have no `error` member) still
    /// produce an error carrying the status and a generic message.
    pub(crate) fn from_body(status: u16, body: Value) -> Self {
        let error = body.get("error");
        let field = |name: &str| {
            error
                .and_then(|e| e.get(name))
                .and_then(Value::as_str)
                .map(String::from)
        };

        Self {
            status,
            error_type: field("type"),
            code: field("code"),
            message: field("message").unwrap_or_else(|| "Unknown API error".to_string()),
            param: field("param"),
            body,
        }
    }
}

impl Error {
    /// Create the error for a non-2xx response, mapping 404 to
    /// [`Error::NotFound`].
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let api_error = ApiError::from_body(status, body);
        if status == 404 {
            Error::NotFound(api_error)
        } else {
            Error::Request(api_error)
        }
    }

    /// The remote error payload, for both [`Error::Request`] and
    /// [`Error::NotFound`].
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Request(e) | Error::NotFound(e) => Some(e),
            _ => None,
        }
    }

    /// The HTTP status of a remote rejection.
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(|e| e.status)
    }

    /// Returns `true` if the remote reported the resource as absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried by the caller.
    ///
    /// # Example
    ///
    /// ```
    /// use stripe_rs::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_retryable() {
    ///         println!("Retrying operation...");
    ///     }
    /// }
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(_) | Error::Timeout => true,
            Error::Request(e) => e.status == 429 || e.status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Request(e) | Error::NotFound(e) => (400..500).contains(&e.status),
            Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Request(e) if e.status >= 500)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Transport(err.to_string())
        }
    }
}
