//! Data models for the Stripe API.
//!
//! Models are organized by resource:
//!
//! - [`primitives`] - Shared types like [`Currency`] and [`Expandable`]
//! - [`list`] - Pagination parameters and the list envelope
//! - [`account`] - Connected accounts and their legal entity
//! - [`bank_account`] - Bank accounts and external accounts
//! - [`card`] - Cards
//! - [`token`] - Card and bank account tokens
//! - [`recipient`] - Transfer recipients
//! - [`bitcoin`] - Bitcoin receivers and transactions
//!
//! Parameter structs (`*Params`) use `Option` for every field the caller may
//! leave unset; unset fields are never sent.

pub mod primitives;
pub mod list;
pub mod account;
pub mod bank_account;
pub mod card;
pub mod token;
pub mod recipient;
pub mod bitcoin;

// Re-export commonly used types
pub use primitives::*;
pub use list::*;
pub use account::*;
pub use bank_account::{
    BankAccount, BankAccountDetails, BankAccountListParams, BankAccountOwner, BankAccountParams,
    ExternalAccount,
};
pub use card::*;
pub use token::*;
pub use recipient::*;
pub use bitcoin::*;
