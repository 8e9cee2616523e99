use super::{join_location, Entity, Featured};
use crate::constants::{FEATURED_ORGANIZATIONS_RESOURCE, FEATURED_PROJECTS_RESOURCE};
use crate::types::ResourceKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    pub url_slug: String,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A climate project card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub url_slug: String,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub location: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Entity for Project {
    type Raw = ProjectRecord;
    const KIND: ResourceKind = ResourceKind::Projects;

    fn normalize(raw: ProjectRecord) -> Self {
        Self {
            location: join_location(raw.city.as_deref(), raw.country.as_deref()),
            url_slug: raw.url_slug,
            name: raw.name,
            city: raw.city,
            country: raw.country,
            rest: raw.rest,
        }
    }

    fn key(&self) -> &str {
        &self.url_slug
    }
}

impl Featured for Project {
    const FEATURED_RESOURCE: &'static str = FEATURED_PROJECTS_RESOURCE;
}

// ---------------------------------------------------------------------------
// Organizations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationTypeRecord {
    pub organization_tag: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationRecord {
    pub url_slug: String,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub types: Vec<OrganizationTypeRecord>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrganizationInfo {
    pub location: Option<String>,
}

/// An organization card; `types` holds the bare organization tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organization {
    pub url_slug: String,
    pub name: String,
    pub types: Vec<Value>,
    pub info: OrganizationInfo,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Entity for Organization {
    type Raw = OrganizationRecord;
    const KIND: ResourceKind = ResourceKind::Organizations;

    fn normalize(raw: OrganizationRecord) -> Self {
        Self {
            info: OrganizationInfo {
                location: join_location(raw.city.as_deref(), raw.country.as_deref()),
            },
            types: raw.types.into_iter().map(|t| t.organization_tag).collect(),
            url_slug: raw.url_slug,
            name: raw.name,
            rest: raw.rest,
        }
    }

    fn key(&self) -> &str {
        &self.url_slug
    }
}

impl Featured for Organization {
    const FEATURED_RESOURCE: &'static str = FEATURED_ORGANIZATIONS_RESOURCE;
}

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct MemberRecord {
    pub url_slug: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Low,
}

/// One line of extra information on a member preview card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdditionalInfo {
    pub text: String,
    pub icon_name: &'static str,
    pub importance: Importance,
}

/// A member card, enriched with the info lines its preview shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub url_slug: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub location: Option<String>,
    pub biography: Option<String>,
    pub additional_info: Vec<AdditionalInfo>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Entity for Member {
    type Raw = MemberRecord;
    const KIND: ResourceKind = ResourceKind::Members;

    fn normalize(raw: MemberRecord) -> Self {
        let location = join_location(raw.city.as_deref(), raw.country.as_deref());
        let biography = raw
            .biography
            .as_deref()
            .map(str::trim)
            .filter(|bio| !bio.is_empty());

        let mut additional_info = Vec::new();
        if let Some(text) = &location {
            additional_info.push(AdditionalInfo {
                text: text.clone(),
                icon_name: "LocationOnIcon",
                importance: Importance::High,
            });
        }
        if let Some(bio) = biography {
            additional_info.push(AdditionalInfo {
                text: bio.to_string(),
                icon_name: "InfoIcon",
                importance: Importance::Low,
            });
        }
        let name = format!("{} {}", raw.first_name, raw.last_name)
            .trim()
            .to_string();

        Self {
            url_slug: raw.url_slug,
            name,
            first_name: raw.first_name,
            last_name: raw.last_name,
            location,
            biography: raw.biography,
            additional_info,
            rest: raw.rest,
        }
    }

    fn key(&self) -> &str {
        &self.url_slug
    }
}
