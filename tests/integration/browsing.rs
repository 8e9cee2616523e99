//! Infinite scroll and filter reconciliation against the in-memory directory.

use crate::common::*;
use climate_directory::{
    BrowseList, CategoryKey, FilterOutcome, FilterState, ListingRequest, LoadOutcome, Project,
    QueryFragment,
};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use std::sync::Arc;

const PYTHON_PAGE_1: &str = "api/projects/?page=1&project_category_parent=food&skills=python&";
const POLICY_PAGE_1: &str = "api/projects/?page=1&project_category_parent=food&skills=policy&";

async fn food_projects(directory: &Arc<MockDirectory>) -> BrowseList<Project> {
    let api = api(directory);
    let food = Some(CategoryKey::parse("food").unwrap());
    let initial = api
        .fetch_page::<Project>(&ListingRequest::first_page().in_hub(food.clone()), None)
        .await
        .unwrap();
    BrowseList::new(api, food, initial)
}

fn slugs(list: &BrowseList<Project>) -> Vec<String> {
    list.items().into_iter().map(|p| p.url_slug).collect()
}

fn skills(skill: &str) -> FilterState {
    FilterState::new().with("skills", vec![skill])
}

#[tokio::test]
async fn load_more_appends_next_page_in_order() {
    let directory = food_hub_directory();
    let list = food_projects(&directory).await;
    assert!(list.has_more());

    let outcome = list.load_more(None).await.unwrap();

    assert_eq!(outcome, LoadOutcome::Appended { count: 1, has_more: false });
    assert_eq!(
        slugs(&list),
        vec!["urban-gardening-berlin", "zero-waste-canteen", "seed-library"]
    );
    assert_eq!(list.load_more(None).await.unwrap(), LoadOutcome::Skipped);
    assert_eq!(directory.count(FOOD_PROJECTS_2), 1);
}

#[tokio::test]
async fn simultaneous_triggers_issue_one_request() {
    let directory = food_hub_directory();
    let list = food_projects(&directory).await;

    let (first, second) = tokio::join!(list.load_more(None), list.load_more(None));

    assert_eq!(first.unwrap(), LoadOutcome::Appended { count: 1, has_more: false });
    assert_eq!(second.unwrap(), LoadOutcome::Skipped);
    assert_eq!(directory.count(FOOD_PROJECTS_2), 1);
    assert_eq!(list.len(), 3);
}

#[tokio::test]
async fn failed_load_more_keeps_list_and_allows_retry() {
    let directory = food_hub_directory();
    directory.respond(FOOD_PROJECTS_2, StatusCode::BAD_GATEWAY, "upstream down");
    let list = food_projects(&directory).await;

    assert!(list.load_more(None).await.is_err());
    assert_eq!(list.len(), 2);
    assert!(list.has_more());
    assert!(!list.is_fetching());

    directory.route(FOOD_PROJECTS_2, PROJECTS_PAGE_2);
    let outcome = list.load_more(None).await.unwrap();
    assert_eq!(outcome, LoadOutcome::Appended { count: 1, has_more: false });
}

#[tokio::test]
async fn filters_replace_the_list() {
    let directory = food_hub_directory();
    directory.route(PYTHON_PAGE_1, PROJECTS_PYTHON);
    let list = food_projects(&directory).await;

    let outcome = list.apply_filters(&skills("python"), None).await.unwrap();

    assert_eq!(
        outcome,
        FilterOutcome::Applied {
            fragment: QueryFragment::from_filters(&skills("python")),
            count: 1,
            has_more: false,
        }
    );
    assert_eq!(slugs(&list), vec!["crop-forecasting"]);
}

#[tokio::test]
async fn identical_filters_fetch_once() {
    let directory = food_hub_directory();
    directory.route(PYTHON_PAGE_1, PROJECTS_PYTHON);
    let list = food_projects(&directory).await;

    list.apply_filters(&skills("python"), None).await.unwrap();
    let again = list.apply_filters(&skills("python"), None).await.unwrap();

    assert_eq!(again, FilterOutcome::Unchanged);
    assert_eq!(directory.count(PYTHON_PAGE_1), 1);
}

#[tokio::test]
async fn identical_filter_while_first_is_running_fetches_once() {
    let directory = food_hub_directory();
    directory.route(PYTHON_PAGE_1, PROJECTS_PYTHON);
    let python_gate = directory.hold(PYTHON_PAGE_1);
    let list = food_projects(&directory).await;
    let python = skills("python");

    let (first, second) = tokio::join!(list.apply_filters(&python, None), async {
        tokio::task::yield_now().await;
        let outcome = list.apply_filters(&python, None).await;
        python_gate.notify_one();
        outcome
    });

    assert_eq!(second.unwrap(), FilterOutcome::Unchanged);
    assert!(matches!(first.unwrap(), FilterOutcome::Applied { count: 1, .. }));
    assert_eq!(directory.count(PYTHON_PAGE_1), 1);
    assert_eq!(slugs(&list), vec!["crop-forecasting"]);
}

#[tokio::test]
async fn filter_with_no_results_empties_the_list() {
    let directory = food_hub_directory();
    directory.route(PYTHON_PAGE_1, EMPTY_PAGE);
    let list = food_projects(&directory).await;

    let outcome = list.apply_filters(&skills("python"), None).await.unwrap();

    assert!(matches!(outcome, FilterOutcome::Applied { count: 0, has_more: false, .. }));
    assert!(list.is_empty());
    assert_eq!(list.load_more(None).await.unwrap(), LoadOutcome::Skipped);
}

#[tokio::test]
async fn search_replaces_the_list() {
    let directory = food_hub_directory();
    directory.route(
        "api/projects/?page=1&project_category_parent=food&search=crop",
        PROJECTS_PYTHON,
    );
    let list = food_projects(&directory).await;

    list.apply_search("crop", None).await.unwrap();
    assert_eq!(slugs(&list), vec!["crop-forecasting"]);
    assert_eq!(list.active_fragment(), Some(QueryFragment::search("crop")));

    assert_eq!(list.apply_search("crop", None).await.unwrap(), FilterOutcome::Unchanged);
}

#[tokio::test]
async fn late_response_for_older_filter_is_dropped() {
    let directory = food_hub_directory();
    directory
        .route(PYTHON_PAGE_1, PROJECTS_PYTHON)
        .route(POLICY_PAGE_1, PROJECTS_PAGE_2);
    let python_gate = directory.hold(PYTHON_PAGE_1);
    let list = food_projects(&directory).await;
    let python = skills("python");

    let (older, newer) = tokio::join!(list.apply_filters(&python, None), async {
        tokio::task::yield_now().await;
        let outcome = list.apply_filters(&skills("policy"), None).await;
        python_gate.notify_one();
        outcome
    });

    assert_eq!(older.unwrap(), FilterOutcome::Superseded);
    assert!(matches!(newer.unwrap(), FilterOutcome::Applied { count: 1, .. }));
    assert_eq!(slugs(&list), vec!["seed-library"]);
    assert_eq!(
        list.active_fragment(),
        Some(QueryFragment::from_filters(&skills("policy")))
    );
}

#[tokio::test]
async fn filter_change_overtakes_running_load_more() {
    let directory = food_hub_directory();
    directory.route(PYTHON_PAGE_1, PROJECTS_PYTHON);
    let page_two_gate = directory.hold(FOOD_PROJECTS_2);
    let list = food_projects(&directory).await;

    let (load_more, filtered) = tokio::join!(list.load_more(None), async {
        tokio::task::yield_now().await;
        let outcome = list.apply_filters(&skills("python"), None).await;
        page_two_gate.notify_one();
        outcome
    });

    assert_eq!(load_more.unwrap(), LoadOutcome::Superseded);
    assert!(matches!(filtered.unwrap(), FilterOutcome::Applied { .. }));
    assert_eq!(slugs(&list), vec!["crop-forecasting"]);
}

#[tokio::test]
async fn load_more_keeps_the_active_filter() {
    let directory = food_hub_directory();
    let python_page_2 = "api/projects/?page=2&project_category_parent=food&skills=python&";
    directory
        .route(PYTHON_PAGE_1, PROJECTS_PAGE_1)
        .route(python_page_2, PROJECTS_PAGE_2);
    let list = food_projects(&directory).await;

    list.apply_filters(&skills("python"), None).await.unwrap();
    list.load_more(None).await.unwrap();

    assert_eq!(directory.count(python_page_2), 1);
    assert_eq!(directory.count(FOOD_PROJECTS_2), 0);
    assert_eq!(list.len(), 3);
}
