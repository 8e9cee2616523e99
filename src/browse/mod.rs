//! Infinite-scrolling lists: paging, filtering, and searching a listing
//! while keeping the displayed items consistent with what was requested.

mod list;
mod reconciler;

pub use list::{BrowseList, FilterOutcome, ListView, LoadOutcome};
pub use reconciler::{ListState, Merge, Ticket, TicketPurpose};
