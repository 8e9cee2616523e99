//! Page controllers: what each server-rendered page loads up front and the
//! operations its interactive parts call afterwards.

mod hub;
mod landing;

pub use hub::{HubPage, HubPageView};
pub use landing::LandingPage;

use crate::types::AuthToken;

/// Anonymous requests are allowed but usually not what the caller intended.
fn note_missing_token(token: Option<&AuthToken>, page: &str) {
    if token.is_none() {
        log::warn!("No auth token supplied, loading {} anonymously", page);
    }
}
