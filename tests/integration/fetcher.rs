//! Data fetcher: URL construction, auth, normalization, and failure modes.

use crate::common::*;
use climate_directory::{
    AppError, CategoryKey, FilterState, ListingRequest, Member, Organization, PageFetch, Project,
    QueryFragment,
};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;

fn food() -> Option<CategoryKey> {
    Some(CategoryKey::parse("food").unwrap())
}

#[tokio::test]
async fn builds_url_and_attaches_token() {
    let directory = MockDirectory::new();
    let endpoint = "api/projects/?page=1&project_category_parent=food&skills=python,policy&";
    directory.route(endpoint, PROJECTS_PYTHON);

    let fragment = QueryFragment::from_filters(
        &FilterState::new().with("skills", vec!["python", "policy"]),
    );
    let request = ListingRequest::first_page()
        .in_hub(food())
        .with_fragment(Some(fragment));
    let token = token();

    let fetched = api(&directory)
        .fetch_page::<Project>(&request, Some(&token))
        .await
        .unwrap();

    assert_eq!(
        directory.calls(),
        vec![Call {
            endpoint: endpoint.to_string(),
            token: Some("f00dcafe0123".to_string()),
        }]
    );
    let (items, has_more) = fetched.into_parts();
    assert_eq!(items[0].location.as_deref(), Some("Nairobi, Kenya"));
    assert!(!has_more);
}

#[tokio::test]
async fn anonymous_requests_carry_no_token() {
    let directory = food_hub_directory();
    api(&directory)
        .fetch_page::<Project>(&ListingRequest::first_page().in_hub(food()), None)
        .await
        .unwrap();
    assert_eq!(directory.calls()[0].token, None);
}

#[tokio::test]
async fn zero_results_are_no_data() {
    let directory = MockDirectory::new();
    directory.route("api/projects/?page=1&project_category_parent=food", EMPTY_PAGE);

    let fetched = api(&directory)
        .fetch_page::<Project>(&ListingRequest::first_page().in_hub(food()), None)
        .await
        .unwrap();
    assert!(fetched.is_no_data());
}

#[tokio::test]
async fn next_link_means_more_pages() {
    let directory = food_hub_directory();
    let fetched = api(&directory)
        .fetch_page::<Project>(&ListingRequest::first_page().in_hub(food()), None)
        .await
        .unwrap();
    let PageFetch::Loaded(page) = fetched else {
        panic!("expected a loaded page");
    };
    assert!(page.has_more);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].location.as_deref(), Some("Berlin, Germany"));
}

#[tokio::test]
async fn organizations_are_normalized() {
    let directory = food_hub_directory();
    let (items, _) = api(&directory)
        .fetch_page::<Organization>(&ListingRequest::first_page().in_hub(food()), None)
        .await
        .unwrap()
        .into_parts();
    let organization = &items[0];
    assert_eq!(organization.info.location.as_deref(), Some("Cologne, Germany"));
    assert_eq!(
        organization.types,
        vec![
            serde_json::json!({"id": 1, "name": "NGO"}),
            serde_json::json!({"id": 5, "name": "Community"})
        ]
    );
}

#[tokio::test]
async fn members_get_additional_info() {
    let directory = MockDirectory::new();
    directory.route("api/members/?page=1", MEMBERS_PAGE_1);
    let (items, _) = api(&directory)
        .fetch_page::<Member>(&ListingRequest::first_page(), None)
        .await
        .unwrap()
        .into_parts();
    assert_eq!(items[0].name, "Grace Hopper");
    assert_eq!(items[0].additional_info[0].text, "Arlington, USA");
    assert_eq!(items[0].additional_info[1].text, "Building greener compilers.");
    assert_eq!(items[0].biography.as_deref(), Some("Building greener compilers."));
}

#[tokio::test]
async fn http_failure_propagates_with_body() {
    let directory = MockDirectory::new();
    directory.respond(
        "api/projects/?page=1&project_category_parent=food",
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"detail": "Database unavailable"}"#,
    );

    let result = api(&directory)
        .fetch_page::<Project>(&ListingRequest::first_page().in_hub(food()), None)
        .await;

    match result {
        Err(AppError::Fetch(err)) => {
            assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.detail().as_deref(), Some("Database unavailable"));
            assert!(err.url.ends_with("project_category_parent=food"));
        }
        other => panic!("expected AppError::Fetch, got {:?}", other),
    }
}

#[tokio::test]
async fn featured_lists_and_hubs() {
    let directory = MockDirectory::new();
    directory
        .route("api/featured_projects/", FEATURED_PROJECTS)
        .route("api/featured_organizations/", EMPTY_PAGE)
        .route("api/hubs/", HUBS);
    let api = api(&directory);

    let (projects, has_more) = api
        .fetch_featured::<Project>(None)
        .await
        .unwrap()
        .into_parts();
    assert_eq!(projects[0].location.as_deref(), Some("Accra, Ghana"));
    assert!(!has_more);

    let organizations = api.fetch_featured::<Organization>(None).await.unwrap();
    assert_eq!(organizations, PageFetch::NoData);

    let hubs = api.fetch_hubs().await.unwrap();
    let slugs: Vec<_> = hubs.iter().map(|h| h.url_slug.as_str()).collect();
    assert_eq!(slugs, vec!["food", "mobility"]);
}

#[tokio::test]
async fn filter_choices_load_every_vocabulary() {
    let directory = food_hub_directory();
    let choices = api(&directory)
        .fetch_filter_choices(food().as_ref())
        .await
        .unwrap();

    assert_eq!(choices.project_categories.len(), 1);
    assert_eq!(choices.project_categories[0].subcategories.len(), 2);
    assert_eq!(choices.organization_types.len(), 2);
    assert_eq!(choices.skills[0].subcategories[0].name, "Python");
    assert_eq!(choices.project_statuses.len(), 2);
    assert_eq!(directory.count("api/projecttags/?hub=food"), 1);
}

#[tokio::test]
async fn missing_hub_is_not_found() {
    let directory = MockDirectory::new();
    let result = api(&directory)
        .fetch_hub(&CategoryKey::parse("nowhere").unwrap())
        .await;
    assert!(matches!(result, Err(AppError::Fetch(ref e)) if e.is_not_found()));
}
