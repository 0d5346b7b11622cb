//! Infinite-scroll pagination shared by the account and transaction lists.
//!
//! A [`PageController`] owns one [`PageState`] behind a mutex and fills it
//! from a [`PageSource`], twenty records at a time. The first page is loaded
//! on mount; every later page is requested by a scroll event that reaches the
//! bottom of the view. Controllers are cheap to clone so a scroll-triggered
//! load can run on its own task while the view keeps reading the state.

pub mod policy;
pub mod scroll;
pub mod state;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::api::bank::ApiError;

pub use policy::{PagingMode, PagingPolicy};
pub use scroll::{ScrollPosition, ScrollTrigger};
pub use state::PageState;

/// Records requested per page
pub const PAGE_SIZE: u32 = 20;

/// Where a controller gets its pages from
#[async_trait]
pub trait PageSource: Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;

    /// Fetch `count` records starting at offset `start`
    async fn fetch_page(&self, start: u32, count: u32) -> Result<Vec<Self::Item>, ApiError>;
}

/// Blocking, user-facing error report
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// What a single load attempt did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// This many records were appended
    Appended(usize),
    /// Server returned an empty page
    Empty,
    /// No request was made
    Skipped,
    /// Response arrived after a newer request and was dropped
    Superseded,
    /// Request failed and the user was alerted
    Failed,
}

pub struct PageController<S: PageSource> {
    source: Arc<S>,
    state: Arc<Mutex<PageState<S::Item>>>,
    notifier: Arc<dyn Notifier>,
    policy: PagingPolicy,
}

impl<S: PageSource> Clone for PageController<S> {
    fn clone(&self) -> Self {
        PageController {
            source: Arc::clone(&self.source),
            state: Arc::clone(&self.state),
            notifier: Arc::clone(&self.notifier),
            policy: self.policy,
        }
    }
}

impl<S: PageSource> PageController<S> {
    pub fn new(source: S, notifier: Arc<dyn Notifier>, policy: PagingPolicy) -> Self {
        PageController {
            source: Arc::new(source),
            state: Arc::new(Mutex::new(PageState::new())),
            notifier,
            policy,
        }
    }

    /// Copy of the current state for rendering
    pub async fn snapshot(&self) -> PageState<S::Item> {
        self.state.lock().await.clone()
    }

    /// Mount the view: load the first page
    pub async fn mount(&self) -> LoadOutcome {
        self.load_initial().await
    }

    /// Tear the view down. Requests still in flight no longer count as current,
    /// so under a stale-discarding policy their results are dropped.
    pub async fn unmount(&self) {
        let mut state = self.state.lock().await;
        state.begin_request();
        debug!("Controller unmounted with {} items", state.items.len());
    }

    /// Load offset 0 unless something is already loaded
    pub async fn load_initial(&self) -> LoadOutcome {
        let token = {
            let mut state = self.state.lock().await;
            if !state.items.is_empty() {
                return LoadOutcome::Skipped;
            }
            state.begin_request()
        };

        self.fetch_and_apply(0, token).await
    }

    /// Scroll listener: request the next page when the view hit the bottom.
    ///
    /// The busy flag is not consulted, so a second event at the bottom while a
    /// request is in flight dispatches another request for the same cursor.
    pub async fn on_scroll(&self, position: ScrollPosition) -> LoadOutcome {
        if !self.policy.scroll_trigger.is_at_bottom(position) {
            return LoadOutcome::Skipped;
        }

        let (start, token) = {
            let mut state = self.state.lock().await;
            if self.policy.latch_exhausted && state.exhausted {
                debug!("End of data reached at cursor {}, not requesting", state.cursor);
                return LoadOutcome::Skipped;
            }
            state.busy = true;
            (state.cursor, state.begin_request())
        };

        self.fetch_and_apply(start, token).await
    }

    async fn fetch_and_apply(&self, start: u32, token: u64) -> LoadOutcome {
        debug!("Requesting page at {} (token {})", start, token);
        let result = self.source.fetch_page(start, PAGE_SIZE).await;

        let mut state = self.state.lock().await;
        if self.policy.discard_stale && !state.is_current(token) {
            debug!("Dropping stale response for page at {} (token {})", start, token);
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(page) if page.is_empty() => {
                state.busy = false;
                if self.policy.latch_exhausted {
                    state.exhausted = true;
                }
                info!("No records at offset {}", start);
                LoadOutcome::Empty
            }
            Ok(page) => {
                let count = page.len();
                state.append_page(start, page, PAGE_SIZE);
                info!("Loaded {} records at offset {}, {} in view", count, start, state.items.len());
                LoadOutcome::Appended(count)
            }
            Err(e) => {
                if self.policy.clear_busy_on_error {
                    state.busy = false;
                }
                drop(state);

                error!("Failed to load page at {}: {}", start, e);
                self.notifier.alert(&e.to_string());
                LoadOutcome::Failed
            }
        }
    }
}
