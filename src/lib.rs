//! # stripe-rs
//!
//! An async Rust client for the Stripe payments API.
//!
//! This crate covers connected accounts, bank accounts, cards, tokens,
//! transfer recipients and bitcoin receivers. Request parameters are typed
//! structs encoded into the API's bracketed form syntax, and list endpoints
//! are walked lazily through [`client::ListIter`].
//!
//! ## Features
//!
//! - **Typed parameters**: unset `Option` fields are never sent, so updates
//!   only touch what the caller set
//! - **Lazy pagination**: one page is buffered at a time and the next is
//!   fetched on demand
//! - **Pluggable transport**: `reqwest` by default, any [`client::Transport`]
//!   for tests or proxies
//! - **Explicit credentials**: every client carries its own [`ApiKey`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stripe_rs::{ApiKey, ClientConfig, ListParams, StripeClient};
//! use stripe_rs::models::AccountParams;
//!
//! #[tokio::main]
//! async fn main() -> stripe_rs::Result<()> {
//!     let client = StripeClient::new(ApiKey::from_env("STRIPE_KEY")?, ClientConfig::default())?;
//!
//!     // Create a managed account
//!     let account = client
//!         .accounts()
//!         .create(&AccountParams {
//!             managed: Some(true),
//!             country: Some("CA".into()),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("Created {}", account.id);
//!
//!     // Walk every connected account, ten per page
//!     let mut accounts = client.accounts().list(&ListParams::new().limit(10));
//!     while accounts.next().await {
//!         if let Some(account) = accounts.current() {
//!             println!("{}: {:?}", account.id, account.email);
//!         }
//!     }
//!     if let Some(err) = accounts.err() {
//!         eprintln!("listing stopped: {err}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Streams
//!
//! ```rust,no_run
//! use futures_util::TryStreamExt;
//! use stripe_rs::models::{CardListParams, CardOwner};
//!
//! # async fn example(client: stripe_rs::StripeClient) -> stripe_rs::Result<()> {
//! let params = CardListParams::new(CardOwner::Customer("cus_123".into()));
//! let cards: Vec<_> = client.cards().list(&params).into_stream().try_collect().await?;
//! println!("{} cards", cards.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::ApiKey;
pub use client::{ClientConfig, ListIter, StripeClient};
pub use error::{ApiError, Error, Result};
pub use models::{Currency, ListParams};

/// Prelude module for convenient imports.
///
/// ```rust
/// use stripe_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::ApiKey;
    pub use crate::client::{ClientConfig, Filters, ListIter, StripeClient};
    pub use crate::error::{ApiError, Error, Result};
    pub use crate::models::{
        // Shared
        Currency, Cursor, Deleted, Expandable, ListItem, ListMeta, ListParams, Page,
        // Accounts
        Account, AccountParams, AccountRejectParams, Address, Dob, LegalEntityParams,
        // Payment sources
        BankAccount, BankAccountListParams, BankAccountOwner, BankAccountParams, Card,
        CardListParams, CardOwner, CardParams, Token, TokenParams,
        // Recipients and bitcoin
        BitcoinReceiver, BitcoinReceiverParams, BitcoinTransaction,
        BitcoinTransactionListParams, Recipient, RecipientParams,
    };
}
