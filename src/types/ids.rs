use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The url slug identifying a hub, e.g. `food` or `mobility`.
///
/// Accepts either the bare slug or a hub page URL ending in `/hubs/<slug>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        let slug = if input.starts_with("http://") || input.starts_with("https://") {
            extract_slug_from_url(input).ok_or_else(|| ValidationError::InvalidCategoryKey {
                key: input.to_string(),
                reason: "could not find a hub slug in the URL".to_string(),
            })?
        } else {
            input
        };

        if slug.is_empty() {
            return Err(ValidationError::EmptyField("category key"));
        }

        if let Some(bad) = slug
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(ValidationError::InvalidCategoryKey {
                key: slug.to_string(),
                reason: format!("unexpected character '{}'", bad),
            });
        }

        Ok(Self(slug.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pulls the slug out of `https://host/hubs/<slug>[/]`.
fn extract_slug_from_url(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next()?.trim_end_matches('/');
    let (before, slug) = path.rsplit_once('/')?;
    if before.ends_with("/hubs") {
        Some(slug)
    } else {
        None
    }
}
