//! Card models and the owner they attach to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::list::{ListItem, ListParams};
use super::primitives::Currency;
use crate::client::path_segment;
use crate::Result;

/// Raw card details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardDetails {
    /// Card number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Two-digit expiry month
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_month: Option<String>,
    /// Two- or four-digit expiry year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_year: Option<String>,
    /// Card security code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    /// Cardholder name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Billing address line one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    /// Billing address line two
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    /// Billing city
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    /// Billing state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    /// Billing ZIP or postal code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_zip: Option<String>,
    /// Billing country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    /// Payout currency, for debit cards attached to accounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

/// The object a card belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardOwner {
    /// Payment source of a customer
    Customer(String),
    /// Debit card used as external account of a connected account
    Account(String),
    /// Debit card of a transfer recipient
    Recipient(String),
}

impl CardOwner {
    /// Collection path of the owner's cards.
    pub(crate) fn collection_path(&self) -> Result<String> {
        Ok(match self {
            CardOwner::Customer(id) => format!("/customers/{}/sources", path_segment(id)?),
            CardOwner::Account(id) => format!("/accounts/{}/external_accounts", path_segment(id)?),
            CardOwner::Recipient(id) => format!("/recipients/{}/cards", path_segment(id)?),
        })
    }

    /// Parameter name the token or details are sent under on creation.
    pub(crate) fn source_key(&self) -> &'static str {
        match self {
            CardOwner::Customer(_) => "source",
            CardOwner::Account(_) => "external_account",
            CardOwner::Recipient(_) => "card",
        }
    }

    /// Whether the collection mixes cards with other source kinds and
    /// must be filtered with `object=card` when listing.
    pub(crate) fn is_mixed_collection(&self) -> bool {
        !matches!(self, CardOwner::Recipient(_))
    }
}

/// Parameters for creating or updating a card.
///
/// On creation exactly one of `token` or `details` is sent; `token` wins when
/// both are set. On update the set `details` fields are sent at the top level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardParams {
    /// Card token from the tokens endpoint
    #[serde(skip)]
    pub token: Option<String>,
    /// Raw card details
    #[serde(skip)]
    pub details: CardDetails,
    /// Make this the default card for its currency (accounts only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_for_currency: Option<bool>,
    /// Arbitrary key/value metadata
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

/// The card details the update endpoint accepts.
///
/// Number, security code and currency are fixed once a card exists and are
/// never sent on update.
#[derive(Debug, Serialize)]
pub(crate) struct CardUpdateFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    exp_month: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exp_year: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address_line1: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address_line2: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address_city: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address_state: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address_zip: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address_country: Option<&'a str>,
}

impl<'a> From<&'a CardDetails> for CardUpdateFields<'a> {
    fn from(details: &'a CardDetails) -> Self {
        Self {
            exp_month: details.exp_month.as_deref(),
            exp_year: details.exp_year.as_deref(),
            name: details.name.as_deref(),
            address_line1: details.address_line1.as_deref(),
            address_line2: details.address_line2.as_deref(),
            address_city: details.address_city.as_deref(),
            address_state: details.address_state.as_deref(),
            address_zip: details.address_zip.as_deref(),
            address_country: details.address_country.as_deref(),
        }
    }
}

/// Parameters for listing the cards of an owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardListParams {
    /// Customer, account or recipient whose cards are listed
    pub owner: CardOwner,
    /// Pagination controls and filters
    pub list: ListParams,
}

impl CardListParams {
    /// List parameters for one owner.
    pub fn new(owner: CardOwner) -> Self {
        Self {
            owner,
            list: ListParams::default(),
        }
    }
}

/// A payment card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier
    pub id: String,
    /// Owning connected account
    #[serde(default)]
    pub account: Option<String>,
    /// Owning customer
    #[serde(default)]
    pub customer: Option<String>,
    /// Owning recipient
    #[serde(default)]
    pub recipient: Option<String>,
    /// Card brand (`Visa`, `MasterCard`, ...)
    #[serde(default)]
    pub brand: Option<String>,
    /// `credit`, `debit`, `prepaid` or `unknown`
    #[serde(default)]
    pub funding: Option<String>,
    /// Last four digits
    #[serde(default)]
    pub last4: Option<String>,
    /// Expiry month
    #[serde(default)]
    pub exp_month: Option<u32>,
    /// Expiry year
    #[serde(default)]
    pub exp_year: Option<u32>,
    /// Cardholder name
    #[serde(default)]
    pub name: Option<String>,
    /// Issuing country
    #[serde(default)]
    pub country: Option<String>,
    /// Payout currency, for debit cards attached to accounts
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Whether this is the default card for its currency
    #[serde(default)]
    pub default_for_currency: bool,
    /// Fingerprint shared by identical card numbers
    #[serde(default)]
    pub fingerprint: Option<String>,
    /// Billing address line one
    #[serde(default)]
    pub address_line1: Option<String>,
    /// Billing city
    #[serde(default)]
    pub address_city: Option<String>,
    /// Billing ZIP or postal code
    #[serde(default)]
    pub address_zip: Option<String>,
    /// Billing country
    #[serde(default)]
    pub address_country: Option<String>,
    /// Arbitrary key/value metadata
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl ListItem for Card {
    fn id(&self) -> &str {
        &self.id
    }
}
