//! Continuation-token paginator
//!
//! [`TokenPaginator`] is a forward-only state machine exposing a single
//! "fetch next batch" step. [`TokenPaginator::into_items`] adapts it to a
//! `futures::Stream` of individual items.

use super::types::{read_page, ContinuationState};
use crate::error::{Error, Result};
use crate::request::{PageSpec, Request};
use crate::transport::Transport;
use crate::types::JsonValue;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use std::sync::Arc;
use tracing::{debug, warn};

/// Stream of items produced by a paginated request
pub type ItemStream<T = JsonValue> = BoxStream<'static, Result<T>>;

/// Stream of whole pages produced by a paginated request
pub type PageStream = BoxStream<'static, Result<Vec<JsonValue>>>;

/// Lazily walks every page of one list request
pub struct TokenPaginator {
    transport: Arc<dyn Transport>,
    base: Request,
    spec: PageSpec,
    state: ContinuationState,
    pages_fetched: usize,
    max_pages: Option<usize>,
    truncated: bool,
}

impl TokenPaginator {
    /// Create a paginator for `request`
    ///
    /// Fails with [`Error::NotPaginated`] for one-shot requests. No request
    /// is sent until the first call to [`next_page`](Self::next_page).
    pub fn new(transport: Arc<dyn Transport>, request: Request) -> Result<Self> {
        let spec = request.pagination().ok_or_else(|| Error::NotPaginated {
            action: request.action().to_string(),
        })?;

        Ok(Self {
            transport,
            base: request,
            spec,
            state: ContinuationState::Initial,
            pages_fetched: 0,
            max_pages: None,
            truncated: false,
        })
    }

    /// Stop after `max_pages` pages (`None` for no limit)
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Number of page requests that returned a response
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// True once the last page was seen or a pull failed
    pub fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }

    /// True when the page limit ended the walk while the server still had
    /// a continuation token
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    /// The request every page is derived from
    pub fn base_request(&self) -> &Request {
        &self.base
    }

    /// Fetch the next batch of items
    ///
    /// Returns `Ok(None)` once the sequence is over. Any error leaves the
    /// paginator exhausted, so later calls return `Ok(None)` rather than
    /// resuming.
    pub async fn next_page(&mut self) -> Result<Option<Vec<JsonValue>>> {
        if self.state.is_exhausted() {
            return Ok(None);
        }

        if let Some(max_pages) = self.max_pages {
            if self.pages_fetched >= max_pages {
                warn!(
                    action = self.base.action(),
                    max_pages, "Stopping pagination at page limit"
                );
                self.state = ContinuationState::Exhausted;
                self.truncated = true;
                return Ok(None);
            }
        }

        let sent_token = self.state.token().map(str::to_string);
        let request = match &sent_token {
            Some(token) => self.base.with_field(self.spec.token_field, token.as_str()),
            None => self.base.clone(),
        };

        let result = self.fetch(&request, sent_token.as_deref()).await;
        match result {
            Ok((items, next_token)) => {
                debug!(
                    action = self.base.action(),
                    page = self.pages_fetched,
                    items = items.len(),
                    more = next_token.is_some(),
                    "Fetched page"
                );
                self.state = match next_token {
                    Some(token) => ContinuationState::Token(token),
                    None => ContinuationState::Exhausted,
                };
                Ok(Some(items))
            }
            Err(e) => {
                self.state = ContinuationState::Exhausted;
                Err(e)
            }
        }
    }

    async fn fetch(
        &mut self,
        request: &Request,
        sent_token: Option<&str>,
    ) -> Result<(Vec<JsonValue>, Option<String>)> {
        let response = self.transport.execute(request).await?;
        self.pages_fetched += 1;

        let page = read_page(self.base.action(), self.spec, response)?;

        // A server handing back the token it was just given would loop forever
        if sent_token.is_some() && page.next_token.as_deref() == sent_token {
            return Err(Error::protocol(
                self.base.action(),
                format!("'{}' repeated the previous token", self.spec.token_field),
            ));
        }

        Ok((page.items, page.next_token))
    }

    /// Adapt into a stream of pages
    pub fn into_pages(self) -> PageStream {
        stream::try_unfold(self, |mut paginator| async move {
            let batch = paginator.next_page().await?;
            Ok::<_, Error>(batch.map(|batch| (batch, paginator)))
        })
        .boxed()
    }

    /// Adapt into a flat stream of items in server order
    pub fn into_items(self) -> ItemStream {
        self.into_pages()
            .map_ok(|batch| stream::iter(batch.into_iter().map(Ok::<JsonValue, Error>)))
            .try_flatten()
            .boxed()
    }
}

impl std::fmt::Debug for TokenPaginator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPaginator")
            .field("action", &self.base.action())
            .field("spec", &self.spec)
            .field("pages_fetched", &self.pages_fetched)
            .field("exhausted", &self.state.is_exhausted())
            .field("max_pages", &self.max_pages)
            .field("truncated", &self.truncated)
            .finish_non_exhaustive()
    }
}
