// src/browse/list.rs
//! A listing wired to the API: the async half of the reconciler.

use super::reconciler::{ListState, Merge, Ticket};
use crate::api::{DirectoryApi, ListingRequest, PageFetch};
use crate::error::AppError;
use crate::model::Entity;
use crate::query::QueryFragment;
use crate::types::{AuthToken, CategoryKey, FilterState};
use parking_lot::Mutex;
use serde::Serialize;

/// Result of a "load more" trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// A fetch was already running or there is nothing more to load.
    Skipped,
    Appended { count: usize, has_more: bool },
    /// A filter or search change overtook this fetch.
    Superseded,
}

/// Result of applying filters or a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FilterOutcome {
    /// The requested fragment is already active; nothing was fetched.
    Unchanged,
    /// The list now holds page 1 under `fragment`.
    Applied {
        fragment: QueryFragment,
        count: usize,
        has_more: bool,
    },
    /// A later filter or search change overtook this one.
    Superseded,
}

/// Snapshot of a list for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView<T> {
    pub items: Vec<T>,
    pub has_more: bool,
    pub is_fetching: bool,
}

/// One infinite-scrolling listing of `T`, optionally scoped to a hub.
///
/// The state lock is only held for the synchronous check-and-mark before a
/// fetch and for the merge after it, never across an await.
pub struct BrowseList<T: Entity> {
    api: DirectoryApi,
    category: Option<CategoryKey>,
    state: Mutex<ListState<T>>,
}

impl<T: Entity> BrowseList<T> {
    /// Wraps the page-1 result the page controller loaded up front.
    pub fn new(api: DirectoryApi, category: Option<CategoryKey>, initial: PageFetch<T>) -> Self {
        Self {
            api,
            category,
            state: Mutex::new(ListState::from_initial(initial)),
        }
    }

    /// Appends the next page, unless a fetch is running or the listing is exhausted.
    pub async fn load_more(&self, token: Option<&AuthToken>) -> Result<LoadOutcome, AppError> {
        let ticket = {
            let mut state = self.state.lock();
            state.begin_load_more()
        };
        let Some(ticket) = ticket else {
            return Ok(LoadOutcome::Skipped);
        };

        log::debug!("Loading page {} of {}", ticket.page, T::KIND);
        let result = self.fetch(&ticket, token).await;

        let mut state = self.state.lock();
        match state.complete(ticket, result) {
            Ok(Merge::Appended { count }) | Ok(Merge::Replaced { count }) => {
                Ok(LoadOutcome::Appended {
                    count,
                    has_more: state.has_more(),
                })
            }
            Ok(Merge::Stale) => Ok(LoadOutcome::Superseded),
            Err(e) => {
                log::error!("Loading more {} failed: {}", T::KIND, e);
                Err(e)
            }
        }
    }

    /// Replaces the list with page 1 under `filters`.
    pub async fn apply_filters(
        &self,
        filters: &FilterState,
        token: Option<&AuthToken>,
    ) -> Result<FilterOutcome, AppError> {
        self.apply_fragment(QueryFragment::from_filters(filters), token)
            .await
    }

    /// Replaces the list with page 1 of the search results for `term`.
    pub async fn apply_search(
        &self,
        term: &str,
        token: Option<&AuthToken>,
    ) -> Result<FilterOutcome, AppError> {
        self.apply_fragment(QueryFragment::search(term), token).await
    }

    async fn apply_fragment(
        &self,
        fragment: QueryFragment,
        token: Option<&AuthToken>,
    ) -> Result<FilterOutcome, AppError> {
        let ticket = {
            let mut state = self.state.lock();
            state.begin_reset(fragment.clone())
        };
        let Some(ticket) = ticket else {
            log::debug!("{} query unchanged, not refetching", T::KIND);
            return Ok(FilterOutcome::Unchanged);
        };

        let result = self.fetch(&ticket, token).await;

        let mut state = self.state.lock();
        match state.complete(ticket, result) {
            Ok(Merge::Replaced { count }) | Ok(Merge::Appended { count }) => {
                Ok(FilterOutcome::Applied {
                    fragment,
                    count,
                    has_more: state.has_more(),
                })
            }
            Ok(Merge::Stale) => Ok(FilterOutcome::Superseded),
            Err(e) => {
                log::error!("Filtering {} failed: {}", T::KIND, e);
                Err(e)
            }
        }
    }

    async fn fetch(
        &self,
        ticket: &Ticket,
        token: Option<&AuthToken>,
    ) -> Result<PageFetch<T>, AppError> {
        let request = ListingRequest::new(ticket.page)
            .in_hub(self.category.clone())
            .with_fragment(ticket.fragment.clone());
        self.api.fetch_page::<T>(&request, token).await
    }

    pub fn items(&self) -> Vec<T> {
        self.state.lock().items().to_vec()
    }

    pub fn len(&self) -> usize {
        self.state.lock().items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_more(&self) -> bool {
        self.state.lock().has_more()
    }

    pub fn is_fetching(&self) -> bool {
        self.state.lock().is_fetching()
    }

    pub fn active_fragment(&self) -> Option<QueryFragment> {
        self.state.lock().active_fragment().cloned()
    }

    pub fn view(&self) -> ListView<T> {
        let state = self.state.lock();
        ListView {
            items: state.items().to_vec(),
            has_more: state.has_more(),
            is_fetching: state.is_fetching(),
        }
    }
}
