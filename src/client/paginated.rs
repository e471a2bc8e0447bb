//! Lazy iteration over paged list endpoints.
//!
//! [`ListIter`] buffers one page at a time and hands out its elements one by
//! one, fetching the next page only when the buffered one is used up. The
//! fetch itself is an injected closure, so every resource type shares this
//! single state machine.

use std::sync::Arc;

use futures_util::Stream;
use serde::de::DeserializeOwned;

use super::form::Form;
use super::transport::BoxFuture;
use super::ClientInner;
use crate::models::{ListItem, ListMeta, ListParams, Page};
use crate::{Error, Result};

/// Fetches one page for the given pagination parameters.
pub type PageFetcher<T> = Box<dyn Fn(ListParams) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// A page is buffered, or no fetch was attempted yet
    Ready,
    /// No further pages and the buffered one is consumed
    Exhausted,
    /// A fetch failed; the error is pinned in `err`
    Failed,
}

/// A forward-only cursor over a paged list.
///
/// `ListIter` is returned by every `list` operation. Nothing is fetched until
/// the first call to [`next`](Self::next).
///
/// # Example
///
/// ```no_run
/// use stripe_rs::ListParams;
/// use stripe_rs::models::BitcoinTransactionListParams;
///
/// # async fn example(client: stripe_rs::StripeClient) -> stripe_rs::Result<()> {
/// let mut params = BitcoinTransactionListParams::new("btcrcv_123");
/// params.list = ListParams::new().limit(5).single();
///
/// let mut iter = client.bitcoin_transactions().list(&params);
/// while iter.next().await {
///     let txn = iter.current().unwrap();
///     println!("{}: {} satoshi", txn.id, txn.bitcoin_amount);
/// }
/// if let Some(err) = iter.err() {
///     eprintln!("listing failed: {err}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct ListIter<T> {
    /// `None` for an iterator whose request could not be built.
    fetch: Option<PageFetcher<T>>,
    /// Parameters of the most recent fetch; a private copy of the caller's.
    params: ListParams,
    page: Option<Page<T>>,
    position: Option<usize>,
    /// Consecutive empty pages seen while `has_more` was set.
    empty_pages: u8,
    state: State,
    err: Option<Error>,
}

impl<T: ListItem> ListIter<T> {
    /// Create an iterator over pages produced by `fetch`.
    pub fn new<F>(params: ListParams, fetch: F) -> Self
    where
        F: Fn(ListParams) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch: Some(Box::new(fetch)),
            params,
            page: None,
            position: None,
            empty_pages: 0,
            state: State::Ready,
            err: None,
        }
    }

    /// An iterator that fails on its first advance without fetching.
    pub(crate) fn failed(err: Error) -> Self {
        Self {
            fetch: None,
            params: ListParams::new(),
            page: None,
            position: None,
            empty_pages: 0,
            state: State::Failed,
            err: Some(err),
        }
    }

    /// Advance to the next element, fetching a page if needed.
    ///
    /// Returns `false` once the list is exhausted or a fetch failed; check
    /// [`err`](Self::err) to tell the two apart. After a failure no further
    /// fetch is attempted.
    pub async fn next(&mut self) -> bool {
        if self.state != State::Ready {
            return false;
        }

        if let Some(page) = &self.page {
            let next = self.position.map_or(0, |i| i + 1);
            if next < page.data.len() {
                self.position = Some(next);
                return true;
            }
        }

        loop {
            if !self.more_pages() {
                return self.finish();
            }
            let Some(fetch) = self.fetch.as_ref() else {
                return self.finish();
            };

            let params = self.next_params();
            tracing::debug!(cursor = ?params.cursor, limit = ?params.limit, "fetching list page");

            let mut page = match fetch(params.clone()).await {
                Ok(page) => page,
                Err(err) => {
                    tracing::debug!(error = %err, "list page fetch failed");
                    self.page = None;
                    self.position = None;
                    self.state = State::Failed;
                    self.err = Some(err);
                    return false;
                }
            };

            // Backward pages arrive in list order; walk them from the end so
            // the last element yielded anchors the next `ending_before`.
            if params.is_backward() {
                page.data.reverse();
            }
            tracing::debug!(
                items = page.data.len(),
                has_more = page.meta.has_more,
                "received list page"
            );

            self.params = params;
            let empty = page.is_empty();
            self.page = Some(page);
            self.position = None;

            if !empty {
                self.empty_pages = 0;
                self.position = Some(0);
                return true;
            }

            self.empty_pages += 1;
            if self.empty_pages > 1 {
                tracing::warn!("second consecutive empty page despite has_more; stopping");
                return self.finish();
            }
        }
    }

    /// Whether another fetch is allowed.
    fn more_pages(&self) -> bool {
        match &self.page {
            None => true,
            Some(_) if self.params.single => false,
            Some(page) => page.meta.has_more,
        }
    }

    /// Parameters for the next fetch: the last ones used, with the cursor
    /// moved to the last element of the buffered page when there is one.
    fn next_params(&self) -> ListParams {
        let mut params = self.params.clone();
        if let Some(last) = self.page.as_ref().and_then(|page| page.data.last()) {
            params.cursor = Some(match &params.cursor {
                Some(cursor) => cursor.moved_to(last.id()),
                None => crate::models::Cursor::StartingAfter(last.id().to_string()),
            });
        }
        params
    }

    fn finish(&mut self) -> bool {
        self.position = None;
        self.state = State::Exhausted;
        false
    }
}

impl<T> ListIter<T> {
    /// The element the iterator is positioned on.
    ///
    /// `None` before the first successful [`next`](Self::next) and after
    /// exhaustion or failure.
    pub fn current(&self) -> Option<&T> {
        let page = self.page.as_ref()?;
        self.position.and_then(|i| page.data.get(i))
    }

    /// Pagination metadata of the buffered page.
    pub fn meta(&self) -> Option<&ListMeta> {
        self.page.as_ref().map(|page| &page.meta)
    }

    /// The error that ended iteration, if a fetch failed or the request
    /// could not be built.
    pub fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Returns `true` once the list is fully consumed.
    pub fn is_exhausted(&self) -> bool {
        self.state == State::Exhausted
    }
}

impl<T> ListIter<T>
where
    T: ListItem + Clone + Send + 'static,
{
    /// Turn the iterator into a stream of owned elements.
    ///
    /// A fetch failure is yielded once as `Err` and ends the stream.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> + Send {
        futures_util::stream::unfold(Some(self), |state| async move {
            let mut iter = match state {
                Some(iter) => iter,
                None => return None,
            };
            if !iter.next().await {
                return iter.err.take().map(|err| (Err(err), None));
            }
            let item = iter.current().cloned().map(Ok);
            item.map(|item| (item, Some(iter)))
        })
    }
}

/// Build an iterator over a list endpoint.
///
/// `base` holds the resource-specific query fields, already encoded; each
/// fetch appends the pagination controls and filters from the current
/// [`ListParams`]. A failure building the path or the fields surfaces as the
/// iterator's error without any fetch.
pub(crate) fn list_iter<T>(
    inner: Arc<ClientInner>,
    path: Result<String>,
    base: Result<Form>,
    params: ListParams,
) -> ListIter<T>
where
    T: ListItem + DeserializeOwned + Send + 'static,
{
    let (path, base) = match (path, base) {
        (Ok(path), Ok(base)) => (path, base),
        (Err(err), _) | (_, Err(err)) => return ListIter::failed(err),
    };

    ListIter::new(params, move |params: ListParams| {
        let inner = inner.clone();
        let path = path.clone();
        let mut form = base.clone();
        form.append(params.to_form());

        Box::pin(async move { inner.get::<Page<T>>(&path, form).await })
    })
}
