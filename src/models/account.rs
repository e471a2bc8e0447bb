//! Connected account models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bank_account::{BankAccountDetails, ExternalAccount, SourceDetails};
use super::list::{ListItem, Page};
use super::primitives::Currency;

/// Kind of legal entity behind an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegalEntityType {
    /// A natural person
    Individual,
    /// A registered company
    Company,
}

/// Date of birth. Each component may be set independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dob {
    /// Day of month
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    /// Month of year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    /// Four-digit year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
}

impl Dob {
    /// A fully specified date of birth.
    pub fn new(day: u32, month: u32, year: u32) -> Self {
        Self {
            day: Some(day),
            month: Some(month),
            year: Some(year),
        }
    }
}

/// Postal address, used both in parameters and responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street line one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    /// Street line two
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    /// City or locality
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State, province or region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// ZIP or postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Two-letter country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Legal entity fields accepted on account creation and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LegalEntityParams {
    /// Individual or company
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<LegalEntityType>,
    /// Registered business name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// Representative's first name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Representative's last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Representative's date of birth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<Dob>,
    /// Representative's address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Business tax id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_tax_id: Option<String>,
    /// Last four digits of the representative's SSN
    #[serde(rename = "ssn_last_4", skip_serializing_if = "Option::is_none")]
    pub ssn_last_4: Option<String>,
    /// Government-issued personal id number
    #[serde(rename = "personal_id_number", skip_serializing_if = "Option::is_none")]
    pub personal_id: Option<String>,
}

/// Terms-of-service acceptance record sent on behalf of the account holder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TosAcceptanceParams {
    /// Unix timestamp of the acceptance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    /// IP address the acceptance came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// User agent of the accepting browser
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// External account attached through account parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalAccountParams {
    /// A bank account or debit card token
    Token(String),
    /// Raw bank account details
    BankAccount(BankAccountDetails),
}

impl Serialize for ExternalAccountParams {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExternalAccountParams::Token(token) => serializer.serialize_str(token),
            ExternalAccountParams::BankAccount(details) => {
                SourceDetails::BankAccount(details).serialize(serializer)
            }
        }
    }
}

/// Parameters for creating or updating an account.
///
/// Every field left as `None` is omitted from the request, so an update only
/// touches what is set. Setting a boolean to `Some(false)` sends `false`.
///
/// # Example
///
/// ```
/// use stripe_rs::client::Form;
/// use stripe_rs::models::AccountParams;
///
/// let params = AccountParams {
///     statement_descriptor: Some("Stripe Go".into()),
///     debit_negative_balances: Some(false),
///     ..Default::default()
/// };
///
/// let form = Form::encode(&params).unwrap();
/// assert_eq!(form.get("debit_negative_balances"), Some("false"));
/// assert_eq!(form.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountParams {
    /// Whether the platform manages the account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed: Option<bool>,
    /// Two-letter country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Account holder email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Public business name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// Public business website
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_url: Option<String>,
    /// Brand colour as a hex string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_primary_color: Option<String>,
    /// Whether negative balances are debited from the bank account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit_negative_balances: Option<bool>,
    /// Default currency for the account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<Currency>,
    /// Text shown on customers' card statements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Support email shown to customers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    /// Support phone number shown to customers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_phone: Option<String>,
    /// Support website shown to customers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
    /// Migrate an existing recipient into this account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_recipient: Option<String>,
    /// Legal entity details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_entity: Option<LegalEntityParams>,
    /// Terms-of-service acceptance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tos_acceptance: Option<TosAcceptanceParams>,
    /// External account to attach
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_account: Option<ExternalAccountParams>,
    /// Arbitrary key/value metadata
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

/// Parameters for rejecting an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountRejectParams {
    /// `fraud`, `terms_of_service` or `other`
    pub reason: String,
}

/// Identity verification state of a legal entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityVerification {
    /// `unverified`, `pending` or `verified`
    #[serde(default)]
    pub status: Option<String>,
    /// Explanation of the status
    #[serde(default)]
    pub details: Option<String>,
}

/// Legal entity details as returned by the API.
///
/// Sensitive values are never returned; the `*_provided` flags report
/// whether they were submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegalEntity {
    /// Individual or company
    #[serde(rename = "type", default)]
    pub entity_type: Option<LegalEntityType>,
    /// Registered business name
    #[serde(default)]
    pub business_name: Option<String>,
    /// Representative's first name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Representative's last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Representative's date of birth
    #[serde(default)]
    pub dob: Option<Dob>,
    /// Representative's address
    #[serde(default)]
    pub address: Option<Address>,
    /// Whether a business tax id was submitted
    #[serde(default)]
    pub business_tax_id_provided: bool,
    /// Whether the last four SSN digits were submitted
    #[serde(rename = "ssn_last_4_provided", default)]
    pub ssn_provided: bool,
    /// Whether a personal id number was submitted
    #[serde(rename = "personal_id_number_provided", default)]
    pub personal_id_provided: bool,
    /// Identity verification state
    #[serde(default)]
    pub verification: Option<IdentityVerification>,
}

/// Terms-of-service acceptance as recorded by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TosAcceptance {
    /// When the terms were accepted
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub date: Option<DateTime<Utc>>,
    /// IP address the acceptance came from
    #[serde(default)]
    pub ip: Option<String>,
    /// User agent of the accepting browser
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// Verification requirements of an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    /// Why the account cannot create charges or transfers
    /// (e.g. `rejected.fraud`)
    #[serde(default)]
    pub disabled_reason: Option<String>,
    /// Deadline for providing the fields needed
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub due_by: Option<DateTime<Utc>>,
    /// Fields still required
    #[serde(default)]
    pub fields_needed: Vec<String>,
}

/// A connected account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: String,
    /// Account holder email
    #[serde(default)]
    pub email: Option<String>,
    /// Two-letter country code
    #[serde(default)]
    pub country: Option<String>,
    /// Default currency
    #[serde(default)]
    pub default_currency: Option<Currency>,
    /// Name shown in the dashboard
    #[serde(default)]
    pub display_name: Option<String>,
    /// Dashboard timezone
    #[serde(default)]
    pub timezone: Option<String>,
    /// Text shown on customers' card statements
    #[serde(default)]
    pub statement_descriptor: Option<String>,
    /// Public business name
    #[serde(default)]
    pub business_name: Option<String>,
    /// Public business website
    #[serde(default)]
    pub business_url: Option<String>,
    /// Brand colour
    #[serde(default)]
    pub business_primary_color: Option<String>,
    /// Support email shown to customers
    #[serde(default)]
    pub support_email: Option<String>,
    /// Support phone number shown to customers
    #[serde(default)]
    pub support_phone: Option<String>,
    /// Support website shown to customers
    #[serde(default)]
    pub support_url: Option<String>,
    /// Whether the platform manages the account
    #[serde(default)]
    pub managed: bool,
    /// Whether the account can create live charges
    #[serde(default)]
    pub charges_enabled: bool,
    /// Whether funds can be paid out
    #[serde(default)]
    pub transfers_enabled: bool,
    /// Whether account details have been submitted
    #[serde(default)]
    pub details_submitted: bool,
    /// Whether negative balances are debited from the bank account
    #[serde(default)]
    pub debit_negative_balances: bool,
    /// Legal entity details
    #[serde(default)]
    pub legal_entity: Option<LegalEntity>,
    /// Terms-of-service acceptance
    #[serde(default)]
    pub tos_acceptance: Option<TosAcceptance>,
    /// Verification requirements
    #[serde(default)]
    pub verification: Option<Verification>,
    /// Attached bank accounts and debit cards
    #[serde(default)]
    pub external_accounts: Option<Page<ExternalAccount>>,
    /// Arbitrary key/value metadata
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl ListItem for Account {
    fn id(&self) -> &str {
        &self.id
    }
}
