// src/api/fetcher.rs
//! Typed read operations over a [`DirectorySource`].

use super::parser;
use super::responses::PageFetch;
use super::DirectorySource;
use crate::constants::{API_PREFIX, FIRST_PAGE, HUBS_RESOURCE, HUB_FILTER_PARAM};
use crate::error::AppError;
use crate::model::{Entity, Featured, FilterChoices, FilterOption, Hub, Vocabulary};
use crate::query::QueryFragment;
use crate::types::{AuthToken, CategoryKey, ResourceKind};
use std::sync::Arc;

/// Which page of a listing to load, under which hub and filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub page: u32,
    pub category: Option<CategoryKey>,
    pub fragment: Option<QueryFragment>,
}

impl ListingRequest {
    pub fn new(page: u32) -> Self {
        Self {
            page,
            category: None,
            fragment: None,
        }
    }

    pub fn first_page() -> Self {
        Self::new(FIRST_PAGE)
    }

    pub fn in_hub(mut self, category: Option<CategoryKey>) -> Self {
        self.category = category;
        self
    }

    pub fn with_fragment(mut self, fragment: Option<QueryFragment>) -> Self {
        self.fragment = fragment;
        self
    }

    /// `api/{kind}/?page={page}[&project_category_parent={key}]{fragment}`
    pub fn endpoint(&self, kind: ResourceKind) -> String {
        let mut endpoint = format!("{}/{}/?page={}", API_PREFIX, kind.path(), self.page);
        if let Some(category) = &self.category {
            endpoint.push_str(&format!("&{}={}", HUB_FILTER_PARAM, category));
        }
        if let Some(fragment) = &self.fragment {
            endpoint.push_str(fragment.as_str());
        }
        endpoint
    }
}

/// Typed access to the directory API.
#[derive(Clone)]
pub struct DirectoryApi {
    source: Arc<dyn DirectorySource>,
}

impl DirectoryApi {
    pub fn new(source: Arc<dyn DirectorySource>) -> Self {
        Self { source }
    }

    /// Loads one page of the listing `T` is served from.
    pub async fn fetch_page<T: Entity>(
        &self,
        request: &ListingRequest,
        token: Option<&AuthToken>,
    ) -> Result<PageFetch<T>, AppError> {
        let endpoint = request.endpoint(T::KIND);
        match &request.category {
            Some(category) => log::debug!("getting {} data for category {}", T::KIND, category),
            None => log::debug!("getting {} data", T::KIND),
        }
        log::debug!("Getting data for {} at {}", T::KIND, endpoint);

        let response = self.source.get(&endpoint, token).await?;
        parser::parse_listing(response)
    }

    pub async fn fetch_hub(&self, category: &CategoryKey) -> Result<Hub, AppError> {
        log::debug!("getting data for hub {}", category);
        let endpoint = format!("{}/{}/{}/", API_PREFIX, HUBS_RESOURCE, category);
        let response = self.source.get(&endpoint, None).await?;
        parser::parse_hub(response)
    }

    pub async fn fetch_hubs(&self) -> Result<Vec<Hub>, AppError> {
        let endpoint = format!("{}/{}/", API_PREFIX, HUBS_RESOURCE);
        let response = self.source.get(&endpoint, None).await?;
        parser::parse_hub_list(response)
    }

    /// Loads the featured list of `T`, normalized like a listing page.
    ///
    /// Nothing featured yields [`PageFetch::NoData`].
    pub async fn fetch_featured<T: Featured>(
        &self,
        token: Option<&AuthToken>,
    ) -> Result<PageFetch<T>, AppError> {
        let endpoint = format!("{}/{}/", API_PREFIX, T::FEATURED_RESOURCE);
        log::debug!("Getting featured {} at {}", T::KIND, endpoint);
        let response = self.source.get(&endpoint, token).await?;
        parser::parse_listing(response)
    }

    pub async fn fetch_vocabulary(
        &self,
        vocabulary: Vocabulary,
        hub: Option<&CategoryKey>,
    ) -> Result<Vec<FilterOption>, AppError> {
        let mut endpoint = format!("{}/{}/", API_PREFIX, vocabulary.resource());
        if let (true, Some(hub)) = (vocabulary.is_hub_scoped(), hub) {
            endpoint.push_str(&format!("?hub={}", hub));
        }
        let response = self.source.get(&endpoint, None).await?;
        parser::parse_vocabulary(response)
    }

    /// Loads all four filter vocabularies concurrently.
    pub async fn fetch_filter_choices(
        &self,
        hub: Option<&CategoryKey>,
    ) -> Result<FilterChoices, AppError> {
        let (project_categories, organization_types, skills, project_statuses) = futures::try_join!(
            self.fetch_vocabulary(Vocabulary::ProjectTags, hub),
            self.fetch_vocabulary(Vocabulary::OrganizationTags, hub),
            self.fetch_vocabulary(Vocabulary::Skills, hub),
            self.fetch_vocabulary(Vocabulary::ProjectStatuses, hub),
        )?;

        Ok(FilterChoices {
            project_categories,
            organization_types,
            skills,
            project_statuses,
        })
    }
}
