//! Bitcoin receiver and transaction models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::list::{ListItem, ListParams, Page};
use super::primitives::Currency;

/// Parameters for creating a bitcoin receiver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BitcoinReceiverParams {
    /// Amount to receive, in the smallest currency unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Currency of `amount`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Email of the payer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Refund mispayments automatically
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_mispayments: Option<bool>,
    /// Arbitrary key/value metadata
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

/// Parameters for updating a bitcoin receiver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BitcoinReceiverUpdateParams {
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Email of the payer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Bitcoin address refunds are sent to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_address: Option<String>,
    /// Arbitrary key/value metadata
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

/// Parameters for listing bitcoin receivers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BitcoinReceiverListParams {
    /// Filter on receivers that can still take funds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Filter on receivers that received the full amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filled: Option<bool>,
    /// Filter on receivers holding funds not yet used for a payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncaptured_funds: Option<bool>,
    /// Pagination controls and filters
    #[serde(skip)]
    pub list: ListParams,
}

/// Parameters for listing the transactions of a bitcoin receiver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BitcoinTransactionListParams {
    /// Receiver whose transactions are listed
    #[serde(skip)]
    pub receiver: String,
    /// Only return transactions for this customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Pagination controls and filters
    #[serde(skip)]
    pub list: ListParams,
}

impl BitcoinTransactionListParams {
    /// List parameters for one receiver.
    pub fn new(receiver: impl Into<String>) -> Self {
        Self {
            receiver: receiver.into(),
            ..Default::default()
        }
    }
}

/// A funds transfer into a bitcoin receiver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BitcoinTransaction {
    /// Unique identifier
    pub id: String,
    /// Amount credited, in the smallest unit of `currency`
    #[serde(default)]
    pub amount: i64,
    /// Amount received, in satoshi
    #[serde(default)]
    pub bitcoin_amount: i64,
    /// Creation time
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Currency `amount` was converted to
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Customer the receiver belongs to
    #[serde(default)]
    pub customer: Option<String>,
    /// Receiver the funds went to
    #[serde(default)]
    pub receiver: Option<String>,
}

impl ListItem for BitcoinTransaction {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A bitcoin address awaiting a payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BitcoinReceiver {
    /// Unique identifier
    pub id: String,
    /// Whether the receiver can still take funds
    #[serde(default)]
    pub active: bool,
    /// Amount requested, in the smallest unit of `currency`
    #[serde(default)]
    pub amount: i64,
    /// Amount received so far, in the smallest unit of `currency`
    #[serde(default)]
    pub amount_received: i64,
    /// Amount requested, in satoshi
    #[serde(default)]
    pub bitcoin_amount: i64,
    /// Amount received so far, in satoshi
    #[serde(default)]
    pub bitcoin_amount_received: i64,
    /// BIP21 URI for the payment
    #[serde(default)]
    pub bitcoin_uri: Option<String>,
    /// Creation time
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Currency of `amount`
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Customer the receiver is attached to
    #[serde(default)]
    pub customer: Option<String>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Email of the payer
    #[serde(default)]
    pub email: Option<String>,
    /// Whether the full amount was received
    #[serde(default)]
    pub filled: bool,
    /// Address to send bitcoin to
    #[serde(default)]
    pub inbound_address: Option<String>,
    /// Payment created from the funds
    #[serde(default)]
    pub payment: Option<String>,
    /// Address refunds are sent to
    #[serde(default)]
    pub refund_address: Option<String>,
    /// Funds received so far
    #[serde(default)]
    pub transactions: Option<Page<BitcoinTransaction>>,
    /// Whether funds are held that were not yet used for a payment
    #[serde(default)]
    pub uncaptured_funds: bool,
    /// Whether the funds were used for a payment
    #[serde(default)]
    pub used_for_payment: bool,
    /// Whether the receiver exists in live mode
    #[serde(default)]
    pub livemode: bool,
    /// Arbitrary key/value metadata
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl ListItem for BitcoinReceiver {
    fn id(&self) -> &str {
        &self.id
    }
}
