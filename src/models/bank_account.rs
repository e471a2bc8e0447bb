//! Bank account models and the owner they attach to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::card::{Card, CardDetails};
use super::list::{ListItem, ListParams};
use super::primitives::Currency;
use crate::client::path_segment;
use crate::Result;

/// Raw bank account details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BankAccountDetails {
    /// Two-letter country code of the bank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Currency paid out to the account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Routing number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    /// Account number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Name of the account holder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_name: Option<String>,
    /// `individual` or `company`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_type: Option<String>,
}

/// Raw payment source details tagged with their `object` kind, as the API
/// expects them under `source[...]` and `external_account[...]`.
#[derive(Debug, Serialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub(crate) enum SourceDetails<'a> {
    Card(&'a CardDetails),
    BankAccount(&'a BankAccountDetails),
}

/// The object a bank account belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankAccountOwner {
    /// External account of a connected account
    Account(String),
    /// Payment source of a customer
    Customer(String),
}

impl BankAccountOwner {
    /// Collection path of the owner's bank accounts.
    pub(crate) fn collection_path(&self) -> Result<String> {
        Ok(match self {
            BankAccountOwner::Account(id) => {
                format!("/accounts/{}/external_accounts", path_segment(id)?)
            }
            BankAccountOwner::Customer(id) => format!("/customers/{}/sources", path_segment(id)?),
        })
    }

    /// Parameter name the token or details are sent under on creation.
    pub(crate) fn source_key(&self) -> &'static str {
        match self {
            BankAccountOwner::Account(_) => "external_account",
            BankAccountOwner::Customer(_) => "source",
        }
    }
}

/// Parameters for creating or updating a bank account.
///
/// On creation exactly one of `token` or `details` is sent; `token` wins when
/// both are set. On update the set `details` fields are sent at the top level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BankAccountParams {
    /// Bank account token from the tokens endpoint
    #[serde(skip)]
    pub token: Option<String>,
    /// Raw bank account details
    #[serde(skip)]
    pub details: BankAccountDetails,
    /// Make this the default account for its currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_for_currency: Option<bool>,
    /// Arbitrary key/value metadata
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

/// The bank account details the update endpoint accepts.
#[derive(Debug, Serialize)]
pub(crate) struct BankAccountUpdateFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    account_holder_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_holder_type: Option<&'a str>,
}

impl<'a> From<&'a BankAccountDetails> for BankAccountUpdateFields<'a> {
    fn from(details: &'a BankAccountDetails) -> Self {
        Self {
            account_holder_name: details.account_holder_name.as_deref(),
            account_holder_type: details.account_holder_type.as_deref(),
        }
    }
}

/// Parameters for listing the bank accounts of an owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccountListParams {
    /// Account or customer whose bank accounts are listed
    pub owner: BankAccountOwner,
    /// Pagination controls and filters
    pub list: ListParams,
}

impl BankAccountListParams {
    /// List parameters for one owner.
    pub fn new(owner: BankAccountOwner) -> Self {
        Self {
            owner,
            list: ListParams::default(),
        }
    }
}

/// A bank account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Unique identifier
    pub id: String,
    /// Owning connected account
    #[serde(default)]
    pub account: Option<String>,
    /// Owning customer
    #[serde(default)]
    pub customer: Option<String>,
    /// Name of the account holder
    #[serde(default)]
    pub account_holder_name: Option<String>,
    /// `individual` or `company`
    #[serde(default)]
    pub account_holder_type: Option<String>,
    /// Name of the bank
    #[serde(default)]
    pub bank_name: Option<String>,
    /// Two-letter country code of the bank
    #[serde(default)]
    pub country: Option<String>,
    /// Currency paid out to the account
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Whether this is the default account for its currency
    #[serde(default)]
    pub default_for_currency: bool,
    /// Fingerprint shared by identical account numbers
    #[serde(default)]
    pub fingerprint: Option<String>,
    /// Last four digits of the account number
    #[serde(default)]
    pub last4: Option<String>,
    /// Routing number
    #[serde(default)]
    pub routing_number: Option<String>,
    /// `new`, `validated`, `verified`, `verification_failed` or `errored`
    #[serde(default)]
    pub status: Option<String>,
    /// Arbitrary key/value metadata
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl ListItem for BankAccount {
    fn id(&self) -> &str {
        &self.id
    }
}

/// An external account of a connected account: a bank account or a debit
/// card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum ExternalAccount {
    /// A bank account
    BankAccount(BankAccount),
    /// A debit card
    Card(Card),
}

impl ListItem for ExternalAccount {
    fn id(&self) -> &str {
        match self {
            ExternalAccount::BankAccount(bank_account) => &bank_account.id,
            ExternalAccount::Card(card) => &card.id,
        }
    }
}
