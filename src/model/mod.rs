//! Directory records as the frontend displays them.
//!
//! Every listing entity is deserialized from its raw API shape and then
//! normalized: derived fields (locations, flattened tag lists, preview info)
//! are computed once here, and fields the crate does not interpret are kept
//! in an opaque remainder so renderers can still reach them.

mod entities;
mod hub;
mod options;

pub use entities::*;
pub use hub::*;
pub use options::*;

use crate::types::ResourceKind;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record type served by one of the paginated listings.
pub trait Entity: Clone + Serialize + Send + Sync + 'static {
    /// Shape of one element of the API's `results` array.
    type Raw: DeserializeOwned + Send;

    /// Listing this entity is served from.
    const KIND: ResourceKind;

    /// Applies the entity-specific post-processing to a raw record.
    fn normalize(raw: Self::Raw) -> Self;

    /// Stable identity used by renderers as a list key.
    fn key(&self) -> &str;
}

/// An entity that also has an unpaginated "featured" list for the landing page.
pub trait Featured: Entity {
    const FEATURED_RESOURCE: &'static str;
}

/// `"{city}, {country}"`, or whichever part is present.
pub(crate) fn join_location(city: Option<&str>, country: Option<&str>) -> Option<String> {
    let city = city.map(str::trim).filter(|c| !c.is_empty());
    let country = country.map(str::trim).filter(|c| !c.is_empty());
    match (city, country) {
        (Some(city), Some(country)) => Some(format!("{}, {}", city, country)),
        (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
        (None, None) => None,
    }
}
