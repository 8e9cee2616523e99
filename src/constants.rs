// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Directory API layout
// ---------------------------------------------------------------------------

/// Path prefix shared by every REST resource of the directory API.
pub const API_PREFIX: &str = "api";

/// Hub (category) metadata and the hub list.
pub const HUBS_RESOURCE: &str = "hubs";

/// Unpaginated list of featured projects shown on the landing page.
pub const FEATURED_PROJECTS_RESOURCE: &str = "featured_projects";

/// Unpaginated list of featured organizations shown on the landing page.
pub const FEATURED_ORGANIZATIONS_RESOURCE: &str = "featured_organizations";

/// Query parameter restricting a listing to one hub.
pub const HUB_FILTER_PARAM: &str = "project_category_parent";

/// Query parameter carrying a free-text search term.
pub const SEARCH_PARAM: &str = "search";

/// The first page of every paginated listing.
pub const FIRST_PAGE: u32 = 1;

// ---------------------------------------------------------------------------
// Filter vocabularies
// ---------------------------------------------------------------------------

pub const PROJECT_TAGS_RESOURCE: &str = "projecttags";
pub const ORGANIZATION_TAGS_RESOURCE: &str = "organizationtags";
pub const SKILLS_RESOURCE: &str = "skills";
pub const PROJECT_STATUS_RESOURCE: &str = "projectstatus";

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

/// Name of the cookie the login flow stores the session token in.
pub const TOKEN_COOKIE_NAME: &str = "token";

/// Environment variable consulted when no token is passed on the command line.
pub const TOKEN_ENV_VAR: &str = "CLIMATE_DIRECTORY_TOKEN";

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// Request timeout applied by the HTTP client when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
