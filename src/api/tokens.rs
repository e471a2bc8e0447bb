//! Tokens service.

use std::sync::Arc;

use crate::client::{path_segment, ClientInner, Form};
use crate::models::{Token, TokenParams};
use crate::Result;

/// Service for creating and retrieving tokens.
///
/// # Example
///
/// ```no_run
/// use stripe_rs::models::{CardDetails, TokenParams};
///
/// # async fn example(client: stripe_rs::StripeClient) -> stripe_rs::Result<()> {
/// let token = client
///     .tokens()
///     .create(&TokenParams {
///         card: Some(CardDetails {
///             number: Some("4000056655665556".into()),
///             exp_month: Some("10".into()),
///             exp_year: Some("20".into()),
///             ..Default::default()
///         }),
///         ..Default::default()
///     })
///     .await?;
/// println!("Token {}", token.id);
/// # Ok(())
/// # }
/// ```
pub struct TokensService {
    inner: Arc<ClientInner>,
}

impl TokensService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a token for a card or bank account.
    pub async fn create(&self, params: &TokenParams) -> Result<Token> {
        self.inner.post("/tokens", Form::encode(params)?).await
    }

    /// Get a token.
    pub async fn get(&self, id: &str) -> Result<Token> {
        self.inner
            .get(&format!("/tokens/{}", path_segment(id)?), Form::new())
            .await
    }
}
