use crate::constants::{
    ORGANIZATION_TAGS_RESOURCE, PROJECT_STATUS_RESOURCE, PROJECT_TAGS_RESOURCE, SKILLS_RESOURCE,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The option lists the hub page's filter panels are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    ProjectTags,
    OrganizationTags,
    Skills,
    ProjectStatuses,
}

impl Vocabulary {
    pub fn resource(&self) -> &'static str {
        match self {
            Self::ProjectTags => PROJECT_TAGS_RESOURCE,
            Self::OrganizationTags => ORGANIZATION_TAGS_RESOURCE,
            Self::Skills => SKILLS_RESOURCE,
            Self::ProjectStatuses => PROJECT_STATUS_RESOURCE,
        }
    }

    /// Only project tags can be narrowed to one hub.
    pub fn is_hub_scoped(&self) -> bool {
        matches!(self, Self::ProjectTags)
    }
}

/// One entry of a vocabulary as the API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionRecord {
    pub id: u64,
    pub name: String,
    #[serde(default, alias = "parent_tag", alias = "parent_skill")]
    pub parent: Option<u64>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A selectable filter option with its nested sub-options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOption {
    pub key: u64,
    pub name: String,
    pub subcategories: Vec<FilterOption>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Arranges a flat vocabulary into a tree.
///
/// Entries without a parent are roots; order within each level follows the
/// API's order. Entries pointing at a parent that is not in the list are dropped.
pub fn build_option_tree(records: Vec<OptionRecord>) -> Vec<FilterOption> {
    fn children_of(parent: Option<u64>, records: &[OptionRecord]) -> Vec<FilterOption> {
        records
            .iter()
            .filter(|r| r.parent == parent)
            .map(|r| FilterOption {
                key: r.id,
                name: r.name.clone(),
                subcategories: children_of(Some(r.id), records),
                rest: r.rest.clone(),
            })
            .collect()
    }

    children_of(None, &records)
}

/// Every vocabulary the hub page offers as filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterChoices {
    pub project_categories: Vec<FilterOption>,
    pub organization_types: Vec<FilterOption>,
    pub skills: Vec<FilterOption>,
    pub project_statuses: Vec<FilterOption>,
}
