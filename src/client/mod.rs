//! HTTP client, parameter encoding and list iteration.
//!
//! [`StripeClient`] is the entry point; it hands out one service per
//! resource. Requests travel through a [`Transport`], which is
//! [`HttpTransport`] unless the caller plugs in another.
//!
//! # Example
//!
//! ```no_run
//! use stripe_rs::{ApiKey, ClientConfig, ListParams, StripeClient};
//!
//! # async fn example() -> stripe_rs::Result<()> {
//! let client = StripeClient::new(ApiKey::from_env("STRIPE_KEY")?, ClientConfig::default())?;
//!
//! let mut accounts = client.accounts().list(&ListParams::new().limit(10));
//! while accounts.next().await {
//!     if let Some(account) = accounts.current() {
//!         println!("{}", account.id);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod form;
mod http;
pub mod paginated;
pub mod transport;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use form::{Filter, Filters, Form};
pub use http::StripeClient;
pub use paginated::{ListIter, PageFetcher};
pub use transport::{ApiRequest, BoxFuture, HttpTransport, Method, RawResponse, Transport};
pub(crate) use http::{path_segment, ClientInner};
