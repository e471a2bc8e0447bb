//! Token models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bank_account::{BankAccount, BankAccountDetails};
use super::card::{Card, CardDetails};
use super::list::ListItem;

/// Parameters for creating a token.
///
/// Set either `card` or `bank_account`; `customer` creates a token for a
/// customer's card on a connected account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenParams {
    /// Card to tokenize
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardDetails>,
    /// Bank account to tokenize
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccountDetails>,
    /// Customer whose default card is tokenized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
}

/// Kind of object a token stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// A card token
    Card,
    /// A bank account token
    BankAccount,
    /// A token kind this crate does not know about
    #[serde(other)]
    Unknown,
}

/// A single-use token standing in for card or bank account details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Unique identifier
    pub id: String,
    /// What the token stands for
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// Whether the token was already used
    #[serde(default)]
    pub used: bool,
    /// Whether the token was created in live mode
    #[serde(default)]
    pub livemode: bool,
    /// IP address of the client that created the token
    #[serde(default)]
    pub client_ip: Option<String>,
    /// Creation time
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Tokenized card
    #[serde(default)]
    pub card: Option<Card>,
    /// Tokenized bank account
    #[serde(default)]
    pub bank_account: Option<BankAccount>,
}

impl ListItem for Token {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Form;
    use crate::models::Currency;

    #[test]
    fn test_bank_token_encoding() {
        let params = TokenParams {
            bank_account: Some(BankAccountDetails {
                country: Some("US".into()),
                currency: Some(Currency::USD),
                routing_number: Some("110000000".into()),
                account_number: Some("000333333335".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let form = Form::encode(&params).unwrap();
        let keys: Vec<_> = form.keys().collect();
        assert_eq!(
            keys,
            vec![
                "bank_account[country]",
                "bank_account[currency]",
                "bank_account[routing_number]",
                "bank_account[account_number]",
            ]
        );
    }

    #[test]
    fn test_token_decoding() {
        let token: Token = serde_json::from_value(serde_json::json!({
            "id": "tok_123",
            "object": "token",
            "type": "card",
            "used": false,
            "created": 1437578361,
            "card": {"id": "card_1", "object": "card", "last4": "5556"}
        }))
        .unwrap();

        assert_eq!(token.token_type, TokenType::Card);
        assert_eq!(token.created.unwrap().timestamp(), 1437578361);
        assert_eq!(token.card.unwrap().last4.as_deref(), Some("5556"));
    }
}
