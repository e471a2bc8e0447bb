//! Cards service.

use std::sync::Arc;

use crate::client::paginated::{list_iter, ListIter};
use crate::client::{path_segment, ClientInner, Form};
use crate::models::bank_account::SourceDetails;
use crate::models::card::CardUpdateFields;
use crate::models::{Card, CardListParams, CardOwner, CardParams, Deleted};
use crate::Result;

/// Service for card operations.
///
/// Cards belong to a customer, a connected account (debit cards used for
/// payouts) or a recipient; the [`CardOwner`] picks the endpoint.
///
/// # Example
///
/// ```no_run
/// use stripe_rs::models::{CardDetails, CardOwner, CardParams};
///
/// # async fn example(client: stripe_rs::StripeClient) -> stripe_rs::Result<()> {
/// let owner = CardOwner::Customer("cus_123".into());
/// let params = CardParams {
///     details: CardDetails {
///         number: Some("4242424242424242".into()),
///         exp_month: Some("10".into()),
///         exp_year: Some("20".into()),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
///
/// let card = client.cards().create(&owner, &params).await?;
/// println!("{} ending in {:?}", card.id, card.last4);
/// # Ok(())
/// # }
/// ```
pub struct CardsService {
    inner: Arc<ClientInner>,
}

impl CardsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Attach a card to its owner.
    ///
    /// The token is sent when set, the raw details otherwise. Details sent
    /// to customers and accounts are tagged `object=card`.
    pub async fn create(&self, owner: &CardOwner, params: &CardParams) -> Result<Card> {
        let key = owner.source_key();
        let mut form = match (&params.token, owner) {
            (Some(token), _) => {
                let mut form = Form::new();
                form.push(key, token.clone());
                form
            }
            (None, CardOwner::Recipient(_)) => Form::nested(key, &params.details)?,
            (None, _) => Form::nested(key, &SourceDetails::Card(&params.details))?,
        };
        form.extend_encoded(None, params)?;

        self.inner.post(&owner.collection_path()?, form).await
    }

    /// Get a card.
    pub async fn get(&self, owner: &CardOwner, id: &str) -> Result<Card> {
        self.inner.get(&item_path(owner, id)?, Form::new()).await
    }

    /// Update a card's expiry, billing details or metadata.
    ///
    /// Number, security code and currency are create-only and are left out
    /// even when set in `params.details`.
    pub async fn update(&self, owner: &CardOwner, id: &str, params: &CardParams) -> Result<Card> {
        let mut form = Form::encode(&CardUpdateFields::from(&params.details))?;
        form.extend_encoded(None, params)?;

        self.inner.post(&item_path(owner, id)?, form).await
    }

    /// Detach and delete a card.
    pub async fn delete(&self, owner: &CardOwner, id: &str) -> Result<Deleted> {
        self.inner.delete(&item_path(owner, id)?).await
    }

    /// List the cards of an owner.
    pub fn list(&self, params: &CardListParams) -> ListIter<Card> {
        let mut base = Form::new();
        if params.owner.is_mixed_collection() {
            base.push("object", "card");
        }

        list_iter(
            self.inner.clone(),
            params.owner.collection_path(),
            Ok(base),
            params.list.clone(),
        )
    }
}

fn item_path(owner: &CardOwner, id: &str) -> Result<String> {
    Ok(format!("{}/{}", owner.collection_path()?, path_segment(id)?))
}
