//! Primitive types shared by the resource models.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A lowercase three-letter ISO currency code.
///
/// No validation is performed; the API is the authority on which codes it
/// accepts.
///
/// # Example
///
/// ```
/// use stripe_rs::Currency;
///
/// assert_eq!(Currency::USD.as_str(), "usd");
/// assert_eq!(Currency::new("CHF"), Currency::new("chf"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(Cow<'static, str>);

impl Currency {
    /// United States dollar
    pub const USD: Currency = Currency(Cow::Borrowed("usd"));
    /// Canadian dollar
    pub const CAD: Currency = Currency(Cow::Borrowed("cad"));
    /// Euro
    pub const EUR: Currency = Currency(Cow::Borrowed("eur"));
    /// Pound sterling
    pub const GBP: Currency = Currency(Cow::Borrowed("gbp"));
    /// Australian dollar
    pub const AUD: Currency = Currency(Cow::Borrowed("aud"));
    /// Japanese yen
    pub const JPY: Currency = Currency(Cow::Borrowed("jpy"));

    /// Create a currency from any code, normalised to lowercase.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(Cow::Owned(code.as_ref().to_ascii_lowercase()))
    }

    /// Get the currency code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A field that holds either an object id or, when expanded, the object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    /// Only the id was returned
    Id(String),
    /// The full object was embedded
    Object(Box<T>),
}

impl<T: super::ListItem> Expandable<T> {
    /// The id, whichever form was returned.
    pub fn id(&self) -> &str {
        match self {
            Expandable::Id(id) => id,
            Expandable::Object(object) => object.id(),
        }
    }

    /// The embedded object, if the field was expanded.
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Expandable::Id(_) => None,
            Expandable::Object(object) => Some(object),
        }
    }
}

/// Minimal object returned by delete operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    /// Id of the deleted object
    pub id: String,
    /// Whether the object is now deleted
    #[serde(default)]
    pub deleted: bool,
}
