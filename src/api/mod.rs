//! API service modules for Stripe resources.
//!
//! Each service covers one resource and is obtained from an accessor on
//! [`StripeClient`](crate::StripeClient).

mod accounts;
mod bank_accounts;
mod bitcoin;
mod cards;
mod recipients;
mod tokens;

pub use accounts::AccountsService;
pub use bank_accounts::BankAccountsService;
pub use bitcoin::{BitcoinReceiversService, BitcoinTransactionsService};
pub use cards::CardsService;
pub use recipients::RecipientsService;
pub use tokens::TokensService;
