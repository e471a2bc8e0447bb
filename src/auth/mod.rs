//! Credentials for the Stripe API.
//!
//! Every request is authenticated with a single secret API key. The key is
//! an explicit value handed to [`StripeClient::new`](crate::StripeClient::new);
//! there is no process-wide key, so independent clients (for example in
//! parallel tests) can use different keys side by side.
//!
//! ```no_run
//! use stripe_rs::{ApiKey, ClientConfig, StripeClient};
//!
//! # fn example() -> stripe_rs::Result<()> {
//! let key = ApiKey::from_env("STRIPE_KEY")?;
//! let client = StripeClient::new(key, ClientConfig::default())?;
//! # Ok(())
//! # }
//! ```

mod key;

pub use key::ApiKey;
