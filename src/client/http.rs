//! Client core shared by every resource service.

use std::borrow::Cow;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{
    AccountsService, BankAccountsService, BitcoinReceiversService, BitcoinTransactionsService,
    CardsService, RecipientsService, TokensService,
};
use crate::auth::ApiKey;
use crate::{Error, Result};

use super::config::ClientConfig;
use super::form::Form;
use super::transport::{ApiRequest, HttpTransport, Method, RawResponse, Transport};

/// The main client for interacting with the Stripe API.
///
/// The client is cheap to clone; clones share one transport and key.
/// Resource operations live on service structs returned by the accessor
/// methods.
///
/// # Example
///
/// ```no_run
/// use stripe_rs::{ApiKey, ClientConfig, StripeClient};
/// use stripe_rs::models::AccountParams;
///
/// # async fn example() -> stripe_rs::Result<()> {
/// let client = StripeClient::new(ApiKey::new("sk_test_123"), ClientConfig::default())?;
///
/// let account = client
///     .accounts()
///     .create(&AccountParams {
///         managed: Some(true),
///         country: Some("CA".into()),
///         ..Default::default()
///     })
///     .await?;
/// println!("Created {}", account.id);
/// # Ok(())
/// # }
/// ```
pub struct StripeClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) key: ApiKey,
    pub(crate) config: ClientConfig,
}

impl StripeClient {
    /// Create a client that talks HTTP to `config.base_url`.
    pub fn new(key: ApiKey, config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(key, config, Arc::new(transport)))
    }

    /// Create a client over a custom transport.
    pub fn with_transport(key: ApiKey, config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                key,
                config,
            }),
        }
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the bank accounts service.
    pub fn bank_accounts(&self) -> BankAccountsService {
        BankAccountsService::new(self.inner.clone())
    }

    /// Get the cards service.
    pub fn cards(&self) -> CardsService {
        CardsService::new(self.inner.clone())
    }

    /// Get the tokens service.
    pub fn tokens(&self) -> TokensService {
        TokensService::new(self.inner.clone())
    }

    /// Get the recipients service.
    pub fn recipients(&self) -> RecipientsService {
        RecipientsService::new(self.inner.clone())
    }

    /// Get the bitcoin receivers service.
    pub fn bitcoin_receivers(&self) -> BitcoinReceiversService {
        BitcoinReceiversService::new(self.inner.clone())
    }

    /// Get the bitcoin transactions service.
    pub fn bitcoin_transactions(&self) -> BitcoinTransactionsService {
        BitcoinTransactionsService::new(self.inner.clone())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Make a GET request, with `form` as the query string.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        self.call(Method::GET, path, form).await
    }

    /// Make a POST request, with `form` as the body.
    pub(crate) async fn post<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        self.call(Method::POST, path, form).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.call(Method::DELETE, path, Form::new()).await
    }

    async fn call<T: DeserializeOwned>(&self, method: Method, path: &str, form: Form) -> Result<T> {
        tracing::debug!(%method, path, params = form.len(), "sending API request");

        let request = ApiRequest {
            method: method.clone(),
            path: path.to_string(),
            credential: &self.key,
            form,
        };
        let response = self.transport.invoke(request).await.map_err(|e| {
            tracing::debug!(%method, path, error = %e, "API request failed");
            e
        })?;

        tracing::debug!(%method, path, status = response.status, "received API response");
        Self::handle_response(response)
    }

    /// Decode a 2xx body into `T`, or turn any other status into an error.
    fn handle_response<T: DeserializeOwned>(response: RawResponse) -> Result<T> {
        if response.is_success() {
            return Ok(serde_json::from_slice(&response.body)?);
        }

        let body = serde_json::from_slice(&response.body).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&response.body).into_owned())
        });
        Err(Error::from_api_response(response.status, body))
    }
}

/// Percent-encode a caller-supplied id as one path segment.
///
/// `/`, `?` and `#` are escaped so an id can never leave its segment. Empty
/// ids and the dot segments `.` and `..` are rejected, since URL parsing
/// would collapse them into the parent path.
pub(crate) fn path_segment(id: &str) -> Result<Cow<'_, str>> {
    if matches!(id, "" | "." | "..") {
        return Err(Error::InvalidInput(format!(
            "{id:?} is not a valid object id"
        )));
    }
    Ok(urlencoding::encode(id))
}

impl Clone for StripeClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeClient")
            .field("config", &self.inner.config)
            .field("key", &self.inner.key)
            .finish()
    }
}
