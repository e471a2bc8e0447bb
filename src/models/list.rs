//! Pagination parameters and the list envelope.

use serde::{Deserialize, Serialize};

use crate::client::{Filters, Form};

/// Objects that can appear in a paged list.
///
/// The id of the last element seen becomes the cursor for the next page.
pub trait ListItem {
    /// The object's identifier.
    fn id(&self) -> &str;
}

/// Position to page from.
///
/// Forward and backward paging are mutually exclusive, so a request carries
/// at most one of the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor {
    /// Return objects after this id (`starting_after`)
    StartingAfter(String),
    /// Return objects before this id (`ending_before`)
    EndingBefore(String),
}

impl Cursor {
    /// The cursor's object id.
    pub fn id(&self) -> &str {
        match self {
            Cursor::StartingAfter(id) | Cursor::EndingBefore(id) => id,
        }
    }

    /// The same direction, anchored at another id.
    pub(crate) fn moved_to(&self, id: impl Into<String>) -> Self {
        match self {
            Cursor::StartingAfter(_) => Cursor::StartingAfter(id.into()),
            Cursor::EndingBefore(_) => Cursor::EndingBefore(id.into()),
        }
    }
}

/// Common parameters for list operations.
///
/// # Example
///
/// ```
/// use stripe_rs::ListParams;
///
/// let params = ListParams::new()
///     .limit(10)
///     .starting_after("acct_123")
///     .filter("created", "gt", "1437578361");
///
/// let form = params.to_form();
/// assert_eq!(form.get("limit"), Some("10"));
/// assert_eq!(form.get("starting_after"), Some("acct_123"));
/// assert_eq!(form.get("created[gt]"), Some("1437578361"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Maximum number of objects per page
    pub limit: Option<u32>,
    /// Where to start paging from
    pub cursor: Option<Cursor>,
    /// Arbitrary caller filters
    pub filters: Filters,
    /// Fetch exactly one page instead of paging lazily
    pub single: bool,
}

impl ListParams {
    /// Create empty list parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Page forward from `id`, replacing any backward cursor.
    pub fn starting_after(mut self, id: impl Into<String>) -> Self {
        self.cursor = Some(Cursor::StartingAfter(id.into()));
        self
    }

    /// Page backward from `id`, replacing any forward cursor.
    pub fn ending_before(mut self, id: impl Into<String>) -> Self {
        self.cursor = Some(Cursor::EndingBefore(id.into()));
        self
    }

    /// Add a filter triple.
    pub fn filter(
        mut self,
        key: impl Into<String>,
        op: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.filters.add_filter(key, op, value);
        self
    }

    /// Fetch only the first page.
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    /// Returns `true` when paging backward.
    pub fn is_backward(&self) -> bool {
        matches!(self.cursor, Some(Cursor::EndingBefore(_)))
    }

    /// Encode the pagination controls followed by the filters.
    pub fn to_form(&self) -> Form {
        let mut form = Form::new();
        if let Some(limit) = self.limit {
            form.push("limit", limit.to_string());
        }
        match &self.cursor {
            Some(Cursor::StartingAfter(id)) => form.push("starting_after", id.clone()),
            Some(Cursor::EndingBefore(id)) => form.push("ending_before", id.clone()),
            None => {}
        }
        form.append_filters(&self.filters);
        form
    }
}

/// Pagination metadata of a fetched page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    /// Whether the API has more objects beyond this page
    #[serde(default)]
    pub has_more: bool,
    /// Total number of objects, when the API reports it
    #[serde(default)]
    pub total_count: Option<u64>,
    /// URL of the list endpoint
    #[serde(default)]
    pub url: String,
}

/// One fetched page of a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The objects in this page, in the order returned
    pub data: Vec<T>,
    /// Pagination metadata
    #[serde(flatten)]
    pub meta: ListMeta,
}

impl<T> Page<T> {
    /// Returns `true` if the page holds no objects.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            meta: ListMeta::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Deleted;

    #[test]
    fn test_cursors_are_exclusive() {
        let params = ListParams::new().starting_after("a").ending_before("b");
        assert_eq!(params.cursor, Some(Cursor::EndingBefore("b".into())));

        let form = params.to_form();
        assert!(!form.contains_key("starting_after"));
        assert_eq!(form.get("ending_before"), Some("b"));
    }

    #[test]
    fn test_empty_params_encode_nothing() {
        assert!(ListParams::new().single().to_form().is_empty());
    }

    #[test]
    fn test_page_envelope() {
        let page: Page<Deleted> = serde_json::from_value(serde_json::json!({
            "object": "list",
            "url": "/v1/accounts",
            "has_more": true,
            "data": [{"id": "acct_1", "deleted": true}]
        }))
        .unwrap();

        assert_eq!(page.data.len(), 1);
        assert!(page.meta.has_more);
        assert_eq!(page.meta.total_count, None);
        assert_eq!(page.meta.url, "/v1/accounts");
    }
}
