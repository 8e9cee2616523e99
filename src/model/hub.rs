use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A hub: a named category grouping projects and organizations.
///
/// The hub list endpoint returns the same shape with most of the long-form
/// fields left out, so everything besides name and slug is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hub {
    pub name: String,
    pub url_slug: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub sub_headline: Option<String>,
    #[serde(default)]
    pub segway_text: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub thumbnail_image: Option<String>,
    #[serde(default)]
    pub quick_info: Option<String>,
    #[serde(default)]
    pub stats: Vec<Value>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Placeholder texts of the hub page's search bars, one per listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBarLabels {
    pub projects: String,
    pub organizations: String,
}

impl SearchBarLabels {
    pub fn for_hub(hub_name: &str) -> Self {
        Self {
            projects: format!("Search for climate solutions in the {} sector", hub_name.to_lowercase()),
            organizations: format!(
                "Search for climate organizations in the {} sector",
                hub_name.to_lowercase()
            ),
        }
    }
}
