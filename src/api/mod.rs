// src/api/mod.rs
//! Directory API interaction: read-only access to hubs, listings, and vocabularies.
//!
//! Transport lives behind [`DirectorySource`]; parsing and normalization
//! live in [`parser`]; [`DirectoryApi`] composes the two into the typed
//! operations the page controllers use.

pub mod client;
mod fetcher;
pub mod parser;
mod responses;

use crate::error::AppError;
use crate::types::AuthToken;
use client::ApiResponse;

/// The ability to GET a resource from the directory API.
///
/// Business logic depends on this trait, never on HTTP details. The token is
/// an explicit argument on every call; `None` means an anonymous request.
#[async_trait::async_trait]
pub trait DirectorySource: Send + Sync {
    /// Performs a GET on `endpoint` (relative to the API base, no leading slash)
    /// and hands back the raw body with its status, whatever the status is.
    async fn get(
        &self,
        endpoint: &str,
        token: Option<&AuthToken>,
    ) -> Result<ApiResponse<String>, AppError>;
}

// Re-export the public interface
pub use client::DirectoryHttpClient;
pub use fetcher::{DirectoryApi, ListingRequest};
pub use responses::{FetchedPage, PageFetch, PaginatedResponse};
