//! Bitcoin receivers and transactions services.

use std::sync::Arc;

use crate::client::paginated::{list_iter, ListIter};
use crate::client::{path_segment, ClientInner, Form};
use crate::models::{
    BitcoinReceiver, BitcoinReceiverListParams, BitcoinReceiverParams,
    BitcoinReceiverUpdateParams, BitcoinTransaction, BitcoinTransactionListParams,
};
use crate::Result;

/// Service for bitcoin receiver operations.
///
/// # Example
///
/// ```no_run
/// use stripe_rs::Currency;
/// use stripe_rs::models::BitcoinReceiverParams;
///
/// # async fn example(client: stripe_rs::StripeClient) -> stripe_rs::Result<()> {
/// let receiver = client
///     .bitcoin_receivers()
///     .create(&BitcoinReceiverParams {
///         amount: Some(1000),
///         currency: Some(Currency::USD),
///         email: Some("a@b.com".into()),
///         ..Default::default()
///     })
///     .await?;
/// println!("Pay to {:?}", receiver.inbound_address);
/// # Ok(())
/// # }
/// ```
pub struct BitcoinReceiversService {
    inner: Arc<ClientInner>,
}

impl BitcoinReceiversService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a receiver.
    pub async fn create(&self, params: &BitcoinReceiverParams) -> Result<BitcoinReceiver> {
        self.inner
            .post("/bitcoin/receivers", Form::encode(params)?)
            .await
    }

    /// Get a receiver.
    pub async fn get(&self, id: &str) -> Result<BitcoinReceiver> {
        self.inner
            .get(&format!("/bitcoin/receivers/{}", path_segment(id)?), Form::new())
            .await
    }

    /// Update a receiver.
    pub async fn update(
        &self,
        id: &str,
        params: &BitcoinReceiverUpdateParams,
    ) -> Result<BitcoinReceiver> {
        self.inner
            .post(
                &format!("/bitcoin/receivers/{}", path_segment(id)?),
                Form::encode(params)?,
            )
            .await
    }

    /// List receivers.
    pub fn list(&self, params: &BitcoinReceiverListParams) -> ListIter<BitcoinReceiver> {
        list_iter(
            self.inner.clone(),
            Ok("/bitcoin/receivers".to_string()),
            Form::encode(params),
            params.list.clone(),
        )
    }
}

/// Service for the transactions of a bitcoin receiver.
pub struct BitcoinTransactionsService {
    inner: Arc<ClientInner>,
}

impl BitcoinTransactionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the transactions of `params.receiver`.
    pub fn list(&self, params: &BitcoinTransactionListParams) -> ListIter<BitcoinTransaction> {
        list_iter(
            self.inner.clone(),
            path_segment(&params.receiver)
                .map(|receiver| format!("/bitcoin/receivers/{receiver}/transactions")),
            Form::encode(params),
            params.list.clone(),
        )
    }
}
