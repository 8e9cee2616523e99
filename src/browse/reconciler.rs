// src/browse/reconciler.rs
//! Pure state of one infinite-scrolling list.
//!
//! Fetches happen outside this type. A fetch starts by taking a [`Ticket`]
//! (a synchronous check-and-mark) and ends by handing the ticket back with
//! the result. Every ticket carries a sequence number; only a completion for
//! the most recently issued sequence may touch the list, so a response that
//! was overtaken by a filter or search change is dropped.

use crate::api::PageFetch;
use crate::constants::FIRST_PAGE;
use crate::error::AppError;
use crate::query::QueryFragment;

/// Why a ticket was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketPurpose {
    /// Next page, appended to the list.
    LoadMore,
    /// Page 1 under a new filter or search, replacing the list.
    Reset,
}

/// Permission to run exactly one fetch for a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub sequence: u64,
    pub page: u32,
    pub fragment: Option<QueryFragment>,
    pub purpose: TicketPurpose,
}

/// What a completed ticket did to the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Merge {
    Appended { count: usize },
    Replaced { count: usize },
    /// A newer ticket was issued meanwhile; the result was discarded.
    Stale,
}

#[derive(Debug, Clone)]
pub struct ListState<T> {
    items: Vec<T>,
    has_more: bool,
    page: u32,
    active_fragment: Option<QueryFragment>,
    /// Fragment of the reset currently in flight, if the running fetch is one.
    pending_fragment: Option<QueryFragment>,
    last_issued: u64,
    in_flight: Option<u64>,
}

impl<T> ListState<T> {
    /// State after the initial page-1 load, which ran without a fragment.
    pub fn from_initial(initial: PageFetch<T>) -> Self {
        let (items, has_more) = initial.into_parts();
        Self {
            items,
            has_more,
            page: FIRST_PAGE,
            active_fragment: None,
            pending_fragment: None,
            last_issued: 0,
            in_flight: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Last page merged into the list.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn active_fragment(&self) -> Option<&QueryFragment> {
        self.active_fragment.as_ref()
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Claims the next page, or `None` when a fetch is already running or the
    /// listing is exhausted.
    pub fn begin_load_more(&mut self) -> Option<Ticket> {
        if self.in_flight.is_some() || !self.has_more {
            return None;
        }
        let sequence = self.issue();
        Some(Ticket {
            sequence,
            page: self.page + 1,
            fragment: self.active_fragment.clone(),
            purpose: TicketPurpose::LoadMore,
        })
    }

    /// Claims a page-1 fetch under `fragment`, or `None` when the list already
    /// shows that fragment or a running reset is about to.
    ///
    /// A reset for a different fragment is never blocked by a running fetch:
    /// it supersedes it.
    pub fn begin_reset(&mut self, fragment: QueryFragment) -> Option<Ticket> {
        let target = self
            .pending_fragment
            .as_ref()
            .or(self.active_fragment.as_ref());
        if target == Some(&fragment) {
            return None;
        }
        let sequence = self.issue();
        self.pending_fragment = Some(fragment.clone());
        Some(Ticket {
            sequence,
            page: FIRST_PAGE,
            fragment: Some(fragment),
            purpose: TicketPurpose::Reset,
        })
    }

    /// Hands a ticket back with the outcome of its fetch.
    ///
    /// On error the list is left untouched and the error is returned to the caller.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<PageFetch<T>, AppError>,
    ) -> Result<Merge, AppError> {
        if ticket.sequence != self.last_issued {
            log::debug!(
                "Discarding stale response for page {} (ticket {}, latest {})",
                ticket.page,
                ticket.sequence,
                self.last_issued
            );
            if let Err(e) = result {
                log::warn!("Stale fetch for page {} failed: {}", ticket.page, e);
            }
            return Ok(Merge::Stale);
        }
        self.in_flight = None;
        self.pending_fragment = None;

        let (items, has_more) = result?.into_parts();
        let count = items.len();
        self.has_more = has_more;
        self.page = ticket.page;

        match ticket.purpose {
            TicketPurpose::LoadMore => {
                self.items.extend(items);
                Ok(Merge::Appended { count })
            }
            TicketPurpose::Reset => {
                self.items = items;
                self.active_fragment = ticket.fragment;
                Ok(Merge::Replaced { count })
            }
        }
    }

    fn issue(&mut self) -> u64 {
        self.pending_fragment = None;
        self.last_issued += 1;
        self.in_flight = Some(self.last_issued);
        self.last_issued
    }
}
