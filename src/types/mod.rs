use thiserror::Error;

mod domain_types;
mod filters;
mod ids;
mod resource;

pub use domain_types::*;
pub use filters::*;
pub use ids::*;
pub use resource::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid hub category key: {key} - {reason}")]
    InvalidCategoryKey { key: String, reason: String },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid auth token: {reason}")]
    InvalidToken { reason: String },

    #[error("Invalid filter '{input}': expected key=value[,value...]")]
    InvalidFilter { input: String },
}
