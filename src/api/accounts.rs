//! Accounts service for connected account operations.

use std::sync::Arc;

use crate::client::paginated::{list_iter, ListIter};
use crate::client::{path_segment, ClientInner, Form};
use crate::models::{Account, AccountParams, AccountRejectParams, Deleted, ListParams};
use crate::Result;

/// Service for account-related operations.
///
/// # Example
///
/// ```no_run
/// use stripe_rs::models::{AccountParams, Dob, LegalEntityParams};
///
/// # async fn example(client: stripe_rs::StripeClient) -> stripe_rs::Result<()> {
/// // The platform's own account
/// let me = client.accounts().get().await?;
/// println!("Platform: {}", me.id);
///
/// // Create a managed account and fill in its legal entity later
/// let account = client
///     .accounts()
///     .create(&AccountParams {
///         managed: Some(true),
///         country: Some("CA".into()),
///         ..Default::default()
///     })
///     .await?;
///
/// let update = AccountParams {
///     legal_entity: Some(LegalEntityParams {
///         dob: Some(Dob::new(1, 1, 1990)),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// client.accounts().update(&account.id, &update).await?;
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a new connected account.
    pub async fn create(&self, params: &AccountParams) -> Result<Account> {
        self.inner.post("/accounts", Form::encode(params)?).await
    }

    /// Get the account the API key belongs to.
    pub async fn get(&self) -> Result<Account> {
        self.inner.get("/account", Form::new()).await
    }

    /// Get a connected account by id.
    ///
    /// `params` are sent on the query string when given.
    pub async fn get_by_id(&self, id: &str, params: Option<&AccountParams>) -> Result<Account> {
        let form = match params {
            Some(params) => Form::encode(params)?,
            None => Form::new(),
        };
        self.inner
            .get(&format!("/accounts/{}", path_segment(id)?), form)
            .await
    }

    /// Update a connected account.
    ///
    /// Only the fields set in `params` are sent.
    pub async fn update(&self, id: &str, params: &AccountParams) -> Result<Account> {
        self.inner
            .post(&format!("/accounts/{}", path_segment(id)?), Form::encode(params)?)
            .await
    }

    /// Delete a connected account.
    pub async fn delete(&self, id: &str) -> Result<Deleted> {
        self.inner
            .delete(&format!("/accounts/{}", path_segment(id)?))
            .await
    }

    /// Reject a connected account, flagging it for fraud or a terms
    /// violation.
    pub async fn reject(&self, id: &str, params: &AccountRejectParams) -> Result<Account> {
        self.inner
            .post(
                &format!("/accounts/{}/reject", path_segment(id)?),
                Form::encode(params)?,
            )
            .await
    }

    /// List connected accounts.
    pub fn list(&self, params: &ListParams) -> ListIter<Account> {
        list_iter(
            self.inner.clone(),
            Ok("/accounts".to_string()),
            Ok(Form::new()),
            params.clone(),
        )
    }
}
