// src/pages/hub.rs
//! The hub page: hub header, then browsable project and organization lists.

use crate::api::{DirectoryApi, ListingRequest};
use crate::browse::{BrowseList, FilterOutcome, ListView, LoadOutcome};
use crate::error::AppError;
use crate::model::{FilterChoices, Hub, Organization, Project, SearchBarLabels};
use crate::types::{AuthToken, CategoryKey, FilterState, ResourceKind};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;

/// Controller state of one hub page.
///
/// Hubs browse projects and organizations only; member requests are rejected
/// with [`AppError::UnsupportedListing`].
pub struct HubPage {
    category_key: CategoryKey,
    hub: Hub,
    filter_choices: FilterChoices,
    search_labels: SearchBarLabels,
    projects: BrowseList<Project>,
    organizations: BrowseList<Organization>,
    filters: Mutex<HashMap<ResourceKind, FilterState>>,
    searches: Mutex<HashMap<ResourceKind, String>>,
    token: Option<AuthToken>,
}

/// Everything the hub page renders, as one serializable value.
#[derive(Debug, Clone, Serialize)]
pub struct HubPageView {
    pub category_key: CategoryKey,
    pub hub: Hub,
    pub filter_choices: FilterChoices,
    pub search_labels: SearchBarLabels,
    pub projects: ListView<Project>,
    pub organizations: ListView<Organization>,
}

impl HubPage {
    /// Loads hub metadata, page 1 of both listings, and every filter
    /// vocabulary concurrently. Any failure fails the whole load.
    pub async fn load(
        api: &DirectoryApi,
        category_key: CategoryKey,
        token: Option<AuthToken>,
    ) -> Result<Self, AppError> {
        log::info!("Loading hub page for {}", category_key);
        super::note_missing_token(token.as_ref(), "hub page");

        let first_page = ListingRequest::first_page().in_hub(Some(category_key.clone()));
        let (hub, projects, organizations, filter_choices) = futures::try_join!(
            api.fetch_hub(&category_key),
            api.fetch_page::<Project>(&first_page, token.as_ref()),
            api.fetch_page::<Organization>(&first_page, token.as_ref()),
            api.fetch_filter_choices(Some(&category_key)),
        )?;

        let search_labels = SearchBarLabels::for_hub(&hub.name);
        let scope = Some(category_key.clone());

        Ok(Self {
            projects: BrowseList::new(api.clone(), scope.clone(), projects),
            organizations: BrowseList::new(api.clone(), scope, organizations),
            category_key,
            hub,
            filter_choices,
            search_labels,
            filters: Mutex::new(HashMap::new()),
            searches: Mutex::new(HashMap::new()),
            token,
        })
    }

    pub fn category_key(&self) -> &CategoryKey {
        &self.category_key
    }

    pub fn hub(&self) -> &Hub {
        &self.hub
    }

    pub fn filter_choices(&self) -> &FilterChoices {
        &self.filter_choices
    }

    pub fn projects(&self) -> &BrowseList<Project> {
        &self.projects
    }

    pub fn organizations(&self) -> &BrowseList<Organization> {
        &self.organizations
    }

    /// Filters last requested for `kind`, applied or not.
    pub fn filters(&self, kind: ResourceKind) -> FilterState {
        self.filters.lock().get(&kind).cloned().unwrap_or_default()
    }

    /// Search term last requested for `kind`, applied or not.
    pub fn search_term(&self, kind: ResourceKind) -> Option<String> {
        self.searches.lock().get(&kind).cloned()
    }

    /// Infinite-scroll trigger for one of the lists.
    pub async fn load_more(&self, kind: ResourceKind) -> Result<LoadOutcome, AppError> {
        let token = self.token.as_ref();
        match kind {
            ResourceKind::Projects => self.projects.load_more(token).await,
            ResourceKind::Organizations => self.organizations.load_more(token).await,
            ResourceKind::Members => Err(AppError::UnsupportedListing(kind)),
        }
    }

    /// Records `filters` for `kind` and, if they change the query, reloads
    /// that list from page 1.
    pub async fn apply_new_filters(
        &self,
        kind: ResourceKind,
        filters: FilterState,
    ) -> Result<FilterOutcome, AppError> {
        if kind == ResourceKind::Members {
            return Err(AppError::UnsupportedListing(kind));
        }
        self.filters.lock().insert(kind, filters.clone());

        let token = self.token.as_ref();
        match kind {
            ResourceKind::Projects => self.projects.apply_filters(&filters, token).await,
            ResourceKind::Organizations => self.organizations.apply_filters(&filters, token).await,
            ResourceKind::Members => Err(AppError::UnsupportedListing(kind)),
        }
    }

    /// Records `term` for `kind` and reloads that list from page 1 with the
    /// results of a free-text search.
    pub async fn apply_search(
        &self,
        kind: ResourceKind,
        term: &str,
    ) -> Result<FilterOutcome, AppError> {
        if kind == ResourceKind::Members {
            return Err(AppError::UnsupportedListing(kind));
        }
        self.searches.lock().insert(kind, term.to_string());

        let token = self.token.as_ref();
        match kind {
            ResourceKind::Projects => self.projects.apply_search(term, token).await,
            ResourceKind::Organizations => self.organizations.apply_search(term, token).await,
            ResourceKind::Members => Err(AppError::UnsupportedListing(kind)),
        }
    }

    pub fn view(&self) -> HubPageView {
        HubPageView {
            category_key: self.category_key.clone(),
            hub: self.hub.clone(),
            filter_choices: self.filter_choices.clone(),
            search_labels: self.search_labels.clone(),
            projects: self.projects.view(),
            organizations: self.organizations.view(),
        }
    }
}
