//! Lazily fetched views over paginated list responses.
//!
//! A [`Pager`] starts from the first response of a list call. Further pages
//! are fetched one at a time, only when the caller asks past what is already
//! held, by re-sending the original request with its `page_token` set to the
//! latest `next_page_token`. Fetching stops at the first page whose token is
//! empty; that page is still yielded.

use crate::error::Result;
use crate::pubsub::proto;
use futures::future::BoxFuture;
use futures::stream::{self, Stream};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Fetches one page for a request.
pub type PageFn<Req, Resp> = Arc<dyn Fn(Req) -> BoxFuture<'static, Result<Resp>> + Send + Sync>;

/// A list request that can ask for a specific page.
pub trait PageRequest: Clone + Send + 'static {
    /// Set the continuation token.
    fn set_page_token(&mut self, token: String);
}

/// A list response carrying one page of items.
pub trait PageResponse: Clone + Send + 'static {
    /// Item type.
    type Item: Clone + Send + 'static;

    /// Token of the following page; empty on the last page.
    fn next_page_token(&self) -> &str;

    /// The items on this page.
    fn items(&self) -> &[Self::Item];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// The initial response has not been handed out yet.
    Fresh,
    /// The held response has been handed out.
    Yielded,
    /// The last page has been handed out.
    Done,
    /// A follow-up fetch failed; nothing more will be fetched.
    Failed,
}

/// Iterator over a paginated list call.
///
/// Offers a page view ([`Pager::next_page`], [`Pager::pages`]) and an item
/// view ([`Pager::next`], [`Pager::items`]). Both advance the same cursor.
/// [`Pager::current_page`] always reflects the most recently fetched
/// response. Dropping a pager mid-way needs no cleanup.
pub struct Pager<Req, Resp: PageResponse> {
    method: PageFn<Req, Resp>,
    request: Req,
    response: Resp,
    state: State,
    buffered: VecDeque<Resp::Item>,
}

impl<Req, Resp> Pager<Req, Resp>
where
    Req: PageRequest,
    Resp: PageResponse,
{
    /// Wrap the first page. `request` must be the exact request that
    /// produced `response`.
    pub fn new(method: PageFn<Req, Resp>, request: Req, response: Resp) -> Self {
        Self {
            method,
            request,
            response,
            state: State::Fresh,
            buffered: VecDeque::new(),
        }
    }

    /// The most recently fetched response.
    pub fn current_page(&self) -> &Resp {
        &self.response
    }

    /// The request used for the most recent fetch.
    pub fn request(&self) -> &Req {
        &self.request
    }

    /// Whether no further page can be produced.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Done | State::Failed)
    }

    /// Move to the next page, fetching it if needed. Returns `false` once
    /// there are no more pages.
    async fn advance(&mut self) -> Result<bool> {
        match self.state {
            State::Fresh => {
                self.state = State::Yielded;
                return Ok(true);
            }
            State::Done | State::Failed => return Ok(false),
            State::Yielded => {}
        }

        let token = self.response.next_page_token().to_string();
        if token.is_empty() {
            self.state = State::Done;
            return Ok(false);
        }

        debug!("Fetching page with token {}", token);
        self.request.set_page_token(token);
        match (self.method)(self.request.clone()).await {
            Ok(response) => {
                self.response = response;
                Ok(true)
            }
            Err(e) => {
                self.state = State::Failed;
                Err(e)
            }
        }
    }

    /// The next full response, or `None` after the last page.
    pub async fn next_page(&mut self) -> Result<Option<Resp>> {
        if self.advance().await? {
            Ok(Some(self.response.clone()))
        } else {
            Ok(None)
        }
    }

    /// The next item across pages, or `None` after the last one.
    pub async fn next(&mut self) -> Result<Option<Resp::Item>> {
        loop {
            if let Some(item) = self.buffered.pop_front() {
                return Ok(Some(item));
            }
            if !self.advance().await? {
                return Ok(None);
            }
            self.buffered.extend(self.response.items().iter().cloned());
        }
    }

    /// Stream of full responses in server order.
    pub fn pages(self) -> impl Stream<Item = Result<Resp>> + Send {
        stream::unfold(self, |mut pager| async move {
            match pager.next_page().await {
                Ok(Some(page)) => Some((Ok(page), pager)),
                Ok(None) => None,
                Err(e) => Some((Err(e), pager)),
            }
        })
    }

    /// Stream of items, concatenated page by page.
    pub fn items(self) -> impl Stream<Item = Result<Resp::Item>> + Send {
        stream::unfold(self, |mut pager| async move {
            match pager.next().await {
                Ok(Some(item)) => Some((Ok(item), pager)),
                Ok(None) => None,
                Err(e) => Some((Err(e), pager)),
            }
        })
    }

    /// Drain every remaining item.
    pub async fn collect_items(mut self) -> Result<Vec<Resp::Item>> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await? {
            items.push(item);
        }
        Ok(items)
    }
}

impl<Req, Resp> fmt::Debug for Pager<Req, Resp>
where
    Resp: PageResponse + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pager<{:?}>", self.response)
    }
}

macro_rules! paged {
    ($request:ty, $response:ty, $item:ty, $field:ident) => {
        impl PageRequest for $request {
            fn set_page_token(&mut self, token: String) {
                self.page_token = token;
            }
        }

        impl PageResponse for $response {
            type Item = $item;

            fn next_page_token(&self) -> &str {
                &self.next_page_token
            }

            fn items(&self) -> &[$item] {
                &self.$field
            }
        }
    };
}

paged!(proto::ListTopicsRequest, proto::ListTopicsResponse, proto::Topic, topics);
paged!(
    proto::ListTopicSubscriptionsRequest,
    proto::ListTopicSubscriptionsResponse,
    String,
    subscriptions
);
paged!(
    proto::ListTopicSnapshotsRequest,
    proto::ListTopicSnapshotsResponse,
    String,
    snapshots
);
paged!(
    proto::ListSubscriptionsRequest,
    proto::ListSubscriptionsResponse,
    proto::Subscription,
    subscriptions
);
paged!(proto::ListSnapshotsRequest, proto::ListSnapshotsResponse, proto::Snapshot, snapshots);

/// Pager over `ListTopics`.
pub type ListTopicsPager = Pager<proto::ListTopicsRequest, proto::ListTopicsResponse>;
/// Pager over `ListTopicSubscriptions`; items are subscription names.
pub type ListTopicSubscriptionsPager =
    Pager<proto::ListTopicSubscriptionsRequest, proto::ListTopicSubscriptionsResponse>;
/// Pager over `ListTopicSnapshots`; items are snapshot names.
pub type ListTopicSnapshotsPager =
    Pager<proto::ListTopicSnapshotsRequest, proto::ListTopicSnapshotsResponse>;
/// Pager over `ListSubscriptions`.
pub type ListSubscriptionsPager =
    Pager<proto::ListSubscriptionsRequest, proto::ListSubscriptionsResponse>;
/// Pager over `ListSnapshots`.
pub type ListSnapshotsPager = Pager<proto::ListSnapshotsRequest, proto::ListSnapshotsResponse>;
