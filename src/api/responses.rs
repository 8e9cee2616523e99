// src/api/responses.rs
//! Response envelopes of the directory API and the shapes callers receive.

use serde::{Deserialize, Serialize};

/// Django REST framework page-number pagination envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// One successfully loaded page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchedPage<T> {
    pub items: Vec<T>,
    pub has_more: bool,
}

/// Outcome of a listing fetch that reached the server and succeeded.
///
/// `NoData` is not an error: the listing simply has nothing to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageFetch<T> {
    Loaded(FetchedPage<T>),
    NoData,
}

impl<T> PageFetch<T> {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    /// Items and `has_more`, reading `NoData` as an empty final page.
    pub fn into_parts(self) -> (Vec<T>, bool) {
        match self {
            Self::Loaded(page) => (page.items, page.has_more),
            Self::NoData => (Vec::new(), false),
        }
    }
}
