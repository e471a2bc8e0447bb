//! Bank accounts service.
//!
//! Bank accounts hang off an owner: the external accounts of a connected
//! account or the payment sources of a customer.

use std::sync::Arc;

use crate::client::paginated::{list_iter, ListIter};
use crate::client::{path_segment, ClientInner, Form};
use crate::models::bank_account::{BankAccountUpdateFields, SourceDetails};
use crate::models::{
    BankAccount, BankAccountListParams, BankAccountOwner, BankAccountParams, Deleted,
};
use crate::Result;

/// Service for bank account operations.
///
/// # Example
///
/// ```no_run
/// use stripe_rs::models::{BankAccountOwner, BankAccountParams};
///
/// # async fn example(client: stripe_rs::StripeClient) -> stripe_rs::Result<()> {
/// let owner = BankAccountOwner::Account("acct_123".into());
/// let params = BankAccountParams {
///     token: Some("btok_123".into()),
///     default_for_currency: Some(true),
///     ..Default::default()
/// };
///
/// let bank_account = client.bank_accounts().create(&owner, &params).await?;
/// println!("Attached {}", bank_account.id);
/// # Ok(())
/// # }
/// ```
pub struct BankAccountsService {
    inner: Arc<ClientInner>,
}

impl BankAccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Attach a bank account to its owner.
    ///
    /// The token is sent when set, the raw details otherwise.
    pub async fn create(
        &self,
        owner: &BankAccountOwner,
        params: &BankAccountParams,
    ) -> Result<BankAccount> {
        let key = owner.source_key();
        let mut form = match &params.token {
            Some(token) => {
                let mut form = Form::new();
                form.push(key, token.clone());
                form
            }
            None => Form::nested(key, &SourceDetails::BankAccount(&params.details))?,
        };
        form.extend_encoded(None, params)?;

        self.inner.post(&owner.collection_path()?, form).await
    }

    /// Get a bank account.
    pub async fn get(&self, owner: &BankAccountOwner, id: &str) -> Result<BankAccount> {
        self.inner.get(&item_path(owner, id)?, Form::new()).await
    }

    /// Update a bank account.
    ///
    /// The holder name and type are sent at the top level when set, followed
    /// by the remaining parameters. Routing and account numbers cannot be
    /// changed and are left out.
    pub async fn update(
        &self,
        owner: &BankAccountOwner,
        id: &str,
        params: &BankAccountParams,
    ) -> Result<BankAccount> {
        let mut form = Form::encode(&BankAccountUpdateFields::from(&params.details))?;
        form.extend_encoded(None, params)?;

        self.inner.post(&item_path(owner, id)?, form).await
    }

    /// Detach and delete a bank account.
    pub async fn delete(&self, owner: &BankAccountOwner, id: &str) -> Result<Deleted> {
        self.inner.delete(&item_path(owner, id)?).await
    }

    /// List the bank accounts of an owner.
    pub fn list(&self, params: &BankAccountListParams) -> ListIter<BankAccount> {
        let mut base = Form::new();
        base.push("object", "bank_account");

        list_iter(
            self.inner.clone(),
            params.owner.collection_path(),
            Ok(base),
            params.list.clone(),
        )
    }
}

fn item_path(owner: &BankAccountOwner, id: &str) -> Result<String> {
    Ok(format!("{}/{}", owner.collection_path()?, path_segment(id)?))
}
