// src/lib.rs
//! climate-directory library: the data layer behind the climate-solutions
//! directory frontend.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `FetchError`, `ValidationError`
//! - **Configuration**: `ClientConfig`, `CommandLineInput`
//! - **Domain types**: `CategoryKey`, `AuthToken`, `FilterState`, `ResourceKind`
//! - **Query strings**: `QueryFragment`
//! - **Domain model**: `Project`, `Organization`, `Member`, `Hub`, `FilterOption`
//! - **API client**: `DirectorySource`, `DirectoryHttpClient`, `DirectoryApi`
//! - **Browsing**: `BrowseList`, `ListState`
//! - **Pages**: `HubPage`, `LandingPage`

mod api;
mod browse;
mod config;
mod constants;
mod error;
mod model;
mod pages;
mod query;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, FetchError};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{ClientConfig, Command, CommandLineInput};

// --- Domain Types ---
pub use crate::types::{ApiBaseUrl, AuthToken, CategoryKey, FilterState, FilterValue, ResourceKind};

// --- Query Strings ---
pub use crate::query::{encode_uri, QueryFragment};

// --- Domain Model ---
pub use crate::model::{
    build_option_tree, AdditionalInfo, Entity, Featured, FilterChoices, FilterOption, Hub,
    Importance, Member, OptionRecord, Organization, OrganizationInfo, Project, SearchBarLabels,
    Vocabulary,
};

// --- API Client ---
pub use crate::api::{
    client::{extract_response_text, ApiResponse},
    parser::{parse_api_response, parse_hub, parse_hub_list, parse_listing, parse_vocabulary},
    DirectoryApi, DirectoryHttpClient, DirectorySource, FetchedPage, ListingRequest, PageFetch,
    PaginatedResponse,
};

// --- Browsing ---
pub use crate::browse::{
    BrowseList, FilterOutcome, ListState, ListView, LoadOutcome, Merge, Ticket, TicketPurpose,
};

// --- Pages ---
pub use crate::pages::{HubPage, HubPageView, LandingPage};
