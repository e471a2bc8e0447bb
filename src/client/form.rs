//! Form encoding of request parameters.
//!
//! The API takes `application/x-www-form-urlencoded` parameters in which
//! nested objects are spelled with brackets (`legal_entity[dob][day]=1`).
//! [`Form`] is the ordered key/value sequence produced from any
//! `Serialize` parameter struct; [`Filters`] carries arbitrary caller
//! supplied `(key, op, value)` triples appended after the structured fields.

use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

/// An ordered multi-map of encoded request parameters.
///
/// # Example
///
/// ```
/// use stripe_rs::client::Form;
/// use stripe_rs::models::{Address, LegalEntityParams};
///
/// let params = LegalEntityParams {
///     address: Some(Address {
///         line1: Some("321, rue Notre-Dame Est".into()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
///
/// let form = Form::nested("legal_entity", &params).unwrap();
/// assert_eq!(form.get("legal_entity[address][line1]"), Some("321, rue Notre-Dame Est"));
/// assert_eq!(form.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pairs: Vec<(String, String)>,
}

impl Form {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a parameter struct at the top level.
    ///
    /// `None` fields are skipped by the struct's serde attributes and never
    /// reach the wire; explicitly set falsy values (`false`, `0`, `""`) do.
    pub fn encode<P: Serialize + ?Sized>(params: &P) -> Result<Self> {
        let mut form = Self::new();
        form.extend_encoded(None, params)?;
        Ok(form)
    }

    /// Encode a parameter struct with every key nested under `prefix`.
    pub fn nested<P: Serialize + ?Sized>(prefix: &str, params: &P) -> Result<Self> {
        let mut form = Self::new();
        form.extend_encoded(Some(prefix), params)?;
        Ok(form)
    }

    /// Append the encoding of `params`, optionally nested under `prefix`.
    pub fn extend_encoded<P: Serialize + ?Sized>(
        &mut self,
        prefix: Option<&str>,
        params: &P,
    ) -> Result<()> {
        let value = serde_json::to_value(params)
            .map_err(|e| Error::InvalidInput(format!("unencodable parameters: {e}")))?;

        match (prefix, value) {
            (_, Value::Null) => {}
            (Some(prefix), value) => self.flatten(prefix.to_string(), value),
            (None, Value::Object(map)) => {
                for (key, value) in map {
                    self.flatten(key, value);
                }
            }
            (None, other) => {
                return Err(Error::InvalidInput(format!(
                    "top-level parameters must encode to an object, got {other}"
                )));
            }
        }
        Ok(())
    }

    fn flatten(&mut self, key: String, value: Value) {
        match value {
            Value::Null => {}
            Value::Bool(b) => self.push(key, b.to_string()),
            Value::Number(n) => self.push(key, n.to_string()),
            Value::String(s) => self.push(key, s),
            Value::Array(items) => {
                for (i, item) in items.into_iter().enumerate() {
                    let child = match item {
                        Value::Object(_) | Value::Array(_) => format!("{key}[{i}]"),
                        _ => format!("{key}[]"),
                    };
                    self.flatten(child, item);
                }
            }
            Value::Object(map) => {
                for (name, value) in map {
                    self.flatten(format!("{key}[{name}]"), value);
                }
            }
        }
    }

    /// Append a single pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Append every pair of another form, keeping its order.
    pub fn append(&mut self, other: Form) {
        self.pairs.extend(other.pairs);
    }

    /// Append caller filters verbatim, in the order they were added.
    pub fn append_filters(&mut self, filters: &Filters) {
        for filter in filters.iter() {
            self.push(filter.encoded_key(), filter.value.clone());
        }
    }

    /// First value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if any pair uses `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// All keys, in encoding order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    /// The encoded pairs, in order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the form holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as an `application/x-www-form-urlencoded` string.
    pub fn to_urlencoded(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl IntoIterator for Form {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

/// A single caller-supplied filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// Parameter name
    pub key: String,
    /// Comparison operator (`gt`, `lte`, ...), empty for plain equality
    pub op: String,
    /// Parameter value
    pub value: String,
}

impl Filter {
    fn encoded_key(&self) -> String {
        if self.op.is_empty() {
            self.key.clone()
        } else {
            format!("{}[{}]", self.key, self.op)
        }
    }
}

/// Arbitrary filters appended to list requests.
///
/// # Example
///
/// ```
/// use stripe_rs::client::{Filters, Form};
///
/// let mut filters = Filters::new();
/// filters.add_filter("created", "gt", "1437578361");
/// filters.add_filter("limit", "", "5");
///
/// let mut form = Form::new();
/// form.append_filters(&filters);
/// assert_eq!(form.to_urlencoded(), "created%5Bgt%5D=1437578361&limit=5");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    entries: Vec<Filter>,
}

impl Filters {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter. An empty `op` encodes as `key=value`, otherwise as
    /// `key[op]=value`.
    pub fn add_filter(
        &mut self,
        key: impl Into<String>,
        op: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.entries.push(Filter {
            key: key.into(),
            op: op.into(),
            value: value.into(),
        });
    }

    /// Builder form of [`add_filter`](Self::add_filter).
    pub fn with(
        mut self,
        key: impl Into<String>,
        op: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.add_filter(key, op, value);
        self
    }

    /// Iterate over the filters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.entries.iter()
    }

    /// Returns `true` if no filters were added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[derive(Serialize, Default)]
    struct Inner {
        #[serde(skip_serializing_if = "Option::is_none")]
        day: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        month: Option<u32>,
    }

    #[derive(Serialize, Default)]
    struct Outer {
        #[serde(skip_serializing_if = "Option::is_none")]
        managed: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        country: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        inner: Option<Inner>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        expand: Vec<String>,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        metadata: BTreeMap<String, String>,
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let form = Form::encode(&Outer {
            country: Some("CA".into()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(form.pairs(), &[("country".to_string(), "CA".to_string())]);
    }

    #[test]
    fn test_explicit_falsy_values_are_emitted() {
        let form = Form::encode(&Outer {
            managed: Some(false),
            country: Some(String::new()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(form.get("managed"), Some("false"));
        assert_eq!(form.get("country"), Some(""));
    }

    #[test]
    fn test_nested_keys_follow_declaration_order() {
        let form = Form::encode(&Outer {
            managed: Some(true),
            inner: Some(Inner {
                day: Some(1),
                month: Some(2),
            }),
            ..Default::default()
        })
        .unwrap();

        let keys: Vec<_> = form.keys().collect();
        assert_eq!(keys, vec!["managed", "inner[day]", "inner[month]"]);
    }

    #[test]
    fn test_only_set_nested_field_is_emitted() {
        let form = Form::encode(&Outer {
            inner: Some(Inner {
                month: Some(0),
                ..Default::default()
            }),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(form.len(), 1);
        assert_eq!(form.get("inner[month]"), Some("0"));
    }

    #[test]
    fn test_arrays_and_maps() {
        let mut metadata = BTreeMap::new();
        metadata.insert("order".to_string(), "6735".to_string());
        metadata.insert("batch".to_string(), "7".to_string());

        let form = Form::encode(&Outer {
            expand: vec!["legal_entity".into(), "verification".into()],
            metadata,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            form.to_urlencoded(),
            "expand%5B%5D=legal_entity&expand%5B%5D=verification\
             &metadata%5Bbatch%5D=7&metadata%5Border%5D=6735"
        );
    }

    #[test]
    fn test_filters_follow_structured_fields() {
        let mut form = Form::encode(&Outer {
            country: Some("US".into()),
            ..Default::default()
        })
        .unwrap();
        form.append_filters(&Filters::new().with("limit", "", "5").with("created", "lte", "10"));

        let keys: Vec<_> = form.keys().collect();
        assert_eq!(keys, vec!["country", "limit", "created[lte]"]);
    }

    #[test]
    fn test_top_level_scalar_is_rejected() {
        assert!(matches!(Form::encode(&42), Err(Error::InvalidInput(_))));
        assert!(Form::nested("source", "tok_visa").is_ok());
    }
}
