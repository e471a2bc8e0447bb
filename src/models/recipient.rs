//! Transfer recipient models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::bank_account::{BankAccount, BankAccountDetails};
use super::card::{Card, CardDetails};
use super::list::{ListItem, ListParams, Page};
use super::primitives::Expandable;

/// Legal kind of a recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientType {
    /// A natural person
    Individual,
    /// A company
    Corporation,
}

/// Parameters for creating or updating a recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipientParams {
    /// Full legal name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Individual or corporation
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub recipient_type: Option<RecipientType>,
    /// Tax id (SSN or EIN)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Bank account to pay out to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccountDetails>,
    /// Debit card to pay out to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardDetails>,
    /// Id of the card to use by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_card: Option<String>,
    /// Arbitrary key/value metadata
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

/// Parameters for listing recipients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipientListParams {
    /// Only return verified (or unverified) recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    /// Pagination controls and filters
    #[serde(skip)]
    pub list: ListParams,
}

/// A transfer recipient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    /// Unique identifier
    pub id: String,
    /// Full legal name
    #[serde(default)]
    pub name: Option<String>,
    /// Individual or corporation
    #[serde(rename = "type", default)]
    pub recipient_type: Option<RecipientType>,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the tax id was verified
    #[serde(default)]
    pub verified: bool,
    /// Bank account transfers go to
    #[serde(default)]
    pub active_account: Option<BankAccount>,
    /// Attached debit cards
    #[serde(default)]
    pub cards: Option<Page<Card>>,
    /// Id of the default card
    #[serde(default)]
    pub default_card: Option<String>,
    /// Account this recipient was migrated to
    #[serde(default)]
    pub migrated_to: Option<Expandable<Account>>,
    /// Creation time
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Whether the recipient exists in live mode
    #[serde(default)]
    pub livemode: bool,
    /// Arbitrary key/value metadata
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl ListItem for Recipient {
    fn id(&self) -> &str {
        &self.id
    }
}
