// src/pages/landing.rs
//! The landing page: featured projects and organizations plus the hub list.

use crate::api::DirectoryApi;
use crate::error::AppError;
use crate::model::{Hub, Organization, Project};
use crate::types::AuthToken;
use serde::Serialize;

/// Everything the landing page renders. No paging or filtering happens here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandingPage {
    pub projects: Vec<Project>,
    pub organizations: Vec<Organization>,
    pub hubs: Vec<Hub>,
}

impl LandingPage {
    /// Loads the three lists concurrently.
    ///
    /// Featured-list failures propagate. A failing hub list only costs the
    /// hub section, so it is logged and rendered empty.
    pub async fn load(api: &DirectoryApi, token: Option<&AuthToken>) -> Result<Self, AppError> {
        log::info!("Loading landing page");
        super::note_missing_token(token, "landing page");

        let (projects, organizations, hubs) = futures::join!(
            api.fetch_featured::<Project>(token),
            api.fetch_featured::<Organization>(token),
            api.fetch_hubs(),
        );

        let hubs = hubs.unwrap_or_else(|e| {
            log::error!("Could not load the hub list: {}", e);
            Vec::new()
        });

        let (projects, _) = projects?.into_parts();
        let (organizations, _) = organizations?.into_parts();
        if projects.is_empty() && organizations.is_empty() {
            log::info!("Nothing is featured on the landing page");
        }

        Ok(Self {
            projects,
            organizations,
            hubs,
        })
    }
}
