// src/error.rs
//! Application error types with structured error handling.
//!
//! An empty listing is not an error: it is reported as
//! [`PageFetch::NoData`](crate::api::PageFetch). Everything in here is a
//! genuine failure that the caller has to see.

use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::types::{ResourceKind, ValidationError};
use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// An upstream response with a non-success status.
///
/// Carries whatever the server sent back so the failure can be logged with
/// its body, the way the directory API reports problems (`{"detail": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub status: StatusCode,
    pub url: String,
    pub body: Option<String>,
}

impl FetchError {
    pub fn new(status: StatusCode, url: impl Into<String>, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            status,
            url: url.into(),
            body: if body.trim().is_empty() {
                None
            } else {
                Some(body)
            },
        }
    }

    /// The `detail` message of a Django REST framework error body, if any.
    pub fn detail(&self) -> Option<String> {
        let body = self.body.as_deref()?;
        let json: serde_json::Value = serde_json::from_str(body).ok()?;
        json.get("detail")?.as_str().map(str::to_string)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
    }

    /// Body shortened for log lines and error messages.
    pub fn body_preview(&self) -> Option<String> {
        self.body.as_deref().map(preview)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} from {}", self.status, self.url)?;
        match (self.detail(), self.body_preview()) {
            (Some(detail), _) => write!(f, ": {}", detail),
            (None, Some(body)) => write!(f, ": {}", body),
            (None, None) => Ok(()),
        }
    }
}

impl std::error::Error for FetchError {}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Directory API returned an error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },

    #[error("The hub page does not list {0}")]
    UnsupportedListing(ResourceKind),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AppError {
    /// Builds a [`AppError::MalformedResponse`] with a shortened body preview.
    pub fn malformed(url: &str, source: &serde_json::Error, body: &str) -> Self {
        AppError::MalformedResponse {
            url: url.to_string(),
            reason: format!("{} (body: {})", source, preview(body)),
        }
    }

    /// Whether this failure came from talking to the server, as opposed to
    /// local configuration or output problems.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::Network(_) | AppError::Fetch(_) | AppError::MalformedResponse { .. }
        )
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let cut: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}
