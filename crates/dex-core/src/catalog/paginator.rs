//! Incremental, deduplicating pagination engine.
//!
//! The paginator owns the session collection and the fetch cursor. Callers
//! decide *when* to ask for more (mount, sentinel visible); the paginator
//! decides whether a fetch may start and how its result is merged.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::{CursorAdvance, DexConfig};
use crate::error::FetchError;

use super::collection::{FilterQuery, SessionCollection};
use super::item::CatalogItem;
use super::source::PageSource;

/// Result of one [`Paginator::fetch_next`] call.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Another fetch was already in flight; nothing was requested.
    Skipped,
    /// A page arrived and was merged.
    Merged {
        /// Items the page carried.
        received: usize,
        /// Items that were new to the collection.
        added: usize,
        /// Cursor after the merge.
        cursor: u64,
    },
    /// The request failed; cursor and collection are unchanged.
    Failed(FetchError),
}

#[derive(Debug, Default)]
struct PaginatorState {
    items: SessionCollection,
    cursor: u64,
    exhausted: bool,
}

/// Clears the in-flight flag when dropped, including when the fetch future is dropped mid-flight.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

pub struct Paginator<S> {
    source: S,
    page_size: usize,
    advance: CursorAdvance,
    busy: AtomicBool,
    state: Mutex<PaginatorState>,
}

impl<S: PageSource> Paginator<S> {
    pub fn new(source: S, page_size: usize, advance: CursorAdvance) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
            advance,
            busy: AtomicBool::new(false),
            state: Mutex::new(PaginatorState::default()),
        }
    }

    pub fn from_config(source: S, cfg: &DexConfig) -> Self {
        Self::new(source, cfg.page_size, cfg.cursor_advance())
    }

    fn state(&self) -> MutexGuard<'_, PaginatorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Offset the next fetch will request.
    pub fn cursor(&self) -> u64 {
        self.state().cursor
    }

    /// True when the last merged page carried no `next` link. Informational only:
    /// `fetch_next` keeps requesting further windows regardless.
    pub fn is_exhausted(&self) -> bool {
        self.state().exhausted
    }

    pub fn len(&self) -> usize {
        self.state().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().items.is_empty()
    }

    /// Copy of the whole collection in insertion order.
    pub fn items(&self) -> Vec<CatalogItem> {
        self.state().items.items().to_vec()
    }

    /// Items whose name contains `query` (case-insensitive); empty query returns all.
    pub fn filter_by_query(&self, query: &FilterQuery) -> Vec<CatalogItem> {
        self.state().items.filter(query).cloned().collect()
    }

    /// Requests the page at the current cursor and merges it.
    ///
    /// A no-op returning [`FetchOutcome::Skipped`] while another fetch is in
    /// flight. Failures are logged and returned as [`FetchOutcome::Failed`];
    /// the cursor only moves on success, so calling again retries the same window.
    pub async fn fetch_next(&self) -> FetchOutcome {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("fetch already in flight, skipping");
            return FetchOutcome::Skipped;
        }
        let _guard = BusyGuard { flag: &self.busy };

        let cursor = self.cursor();
        tracing::debug!(cursor, limit = self.page_size, "requesting catalog page");

        let page = match self.source.fetch_page(cursor, self.page_size).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(cursor, kind = ?e.kind(), "catalog page fetch failed: {}", e);
                return FetchOutcome::Failed(e);
            }
        };

        let received = page.results.len();
        let mut state = self.state();
        let added = state.items.merge(page.results);
        let step = match self.advance {
            CursorAdvance::PageSize => self.page_size as u64,
            CursorAdvance::Returned => received as u64,
        };
        state.cursor += step;
        state.exhausted = page.next.is_none();
        tracing::debug!(
            received,
            added,
            cursor = state.cursor,
            total = state.items.len(),
            "merged catalog page"
        );
        FetchOutcome::Merged {
            received,
            added,
            cursor: state.cursor,
        }
    }
}
