//! In-memory directory API serving fixtures, with a request log.

use climate_directory::{ApiResponse, AppError, AuthToken, DirectoryApi, DirectorySource};
use parking_lot::Mutex;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Notify;

pub const HUB_FOOD: &str = include_str!("../fixtures/api_responses/hub_food.json");
pub const HUBS: &str = include_str!("../fixtures/api_responses/hubs.json");
pub const PROJECTS_PAGE_1: &str = include_str!("../fixtures/api_responses/projects_food_page1.json");
pub const PROJECTS_PAGE_2: &str = include_str!("../fixtures/api_responses/projects_food_page2.json");
pub const PROJECTS_PYTHON: &str = include_str!("../fixtures/api_responses/projects_food_python.json");
pub const ORGANIZATIONS_PAGE_1: &str =
    include_str!("../fixtures/api_responses/organizations_food_page1.json");
pub const MEMBERS_PAGE_1: &str = include_str!("../fixtures/api_responses/members_page1.json");
pub const EMPTY_PAGE: &str = include_str!("../fixtures/api_responses/empty_page.json");
pub const FEATURED_PROJECTS: &str = include_str!("../fixtures/api_responses/featured_projects.json");
pub const FEATURED_ORGANIZATIONS: &str =
    include_str!("../fixtures/api_responses/featured_organizations.json");
pub const PROJECT_TAGS_FOOD: &str = include_str!("../fixtures/api_responses/projecttags_food.json");
pub const ORGANIZATION_TAGS: &str = include_str!("../fixtures/api_responses/organizationtags.json");
pub const SKILLS: &str = include_str!("../fixtures/api_responses/skills.json");
pub const PROJECT_STATUSES: &str = include_str!("../fixtures/api_responses/projectstatus.json");

pub const FOOD_PROJECTS_1: &str = "api/projects/?page=1&project_category_parent=food";
pub const FOOD_PROJECTS_2: &str = "api/projects/?page=2&project_category_parent=food";
pub const FOOD_ORGANIZATIONS_1: &str = "api/organizations/?page=1&project_category_parent=food";

/// One request as the directory saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub endpoint: String,
    pub token: Option<String>,
}

/// Serves canned responses by exact endpoint; unknown endpoints get a 404.
#[derive(Default)]
pub struct MockDirectory {
    routes: Mutex<HashMap<String, (StatusCode, String)>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    calls: Mutex<Vec<Call>>,
}

impl MockDirectory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn route(&self, endpoint: &str, body: &str) -> &Self {
        self.respond(endpoint, StatusCode::OK, body)
    }

    pub fn respond(&self, endpoint: &str, status: StatusCode, body: &str) -> &Self {
        self.routes
            .lock()
            .insert(endpoint.to_string(), (status, body.to_string()));
        self
    }

    /// Holds every request to `endpoint` until the returned handle is notified.
    pub fn hold(&self, endpoint: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.lock().insert(endpoint.to_string(), gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn endpoints(&self) -> Vec<String> {
        self.calls.lock().iter().map(|c| c.endpoint.clone()).collect()
    }

    pub fn count(&self, endpoint: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.endpoint == endpoint).count()
    }
}

#[async_trait::async_trait]
impl DirectorySource for MockDirectory {
    async fn get(
        &self,
        endpoint: &str,
        token: Option<&AuthToken>,
    ) -> Result<ApiResponse<String>, AppError> {
        self.calls.lock().push(Call {
            endpoint: endpoint.to_string(),
            token: token.map(|t| t.as_str().to_string()),
        });

        let gate = self.gates.lock().get(endpoint).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        // Give concurrently polled callers a chance to run before we answer.
        tokio::task::yield_now().await;

        let (status, body) = self
            .routes
            .lock()
            .get(endpoint)
            .cloned()
            .unwrap_or((StatusCode::NOT_FOUND, r#"{"detail": "Not found."}"#.to_string()));
        Ok(ApiResponse::new(status, format!("http://mock/{}", endpoint), body))
    }
}

/// A directory with everything the food hub page loads up front.
pub fn food_hub_directory() -> Arc<MockDirectory> {
    let directory = MockDirectory::new();
    directory
        .route("api/hubs/food/", HUB_FOOD)
        .route(FOOD_PROJECTS_1, PROJECTS_PAGE_1)
        .route(FOOD_PROJECTS_2, PROJECTS_PAGE_2)
        .route(FOOD_ORGANIZATIONS_1, ORGANIZATIONS_PAGE_1)
        .route("api/projecttags/?hub=food", PROJECT_TAGS_FOOD)
        .route("api/organizationtags/", ORGANIZATION_TAGS)
        .route("api/skills/", SKILLS)
        .route("api/projectstatus/", PROJECT_STATUSES);
    directory
}

pub fn api(directory: &Arc<MockDirectory>) -> DirectoryApi {
    DirectoryApi::new(directory.clone())
}

pub fn token() -> AuthToken {
    AuthToken::new("f00dcafe0123").expect("test token should be valid")
}
