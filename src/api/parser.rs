// src/api/parser.rs
//! Turns raw API responses into typed, normalized values.

use super::client::ApiResponse;
use super::responses::{FetchedPage, PageFetch, PaginatedResponse};
use crate::error::{AppError, FetchError};
use crate::model::{build_option_tree, Entity, FilterOption, Hub, OptionRecord};
use serde::de::DeserializeOwned;

/// Parses a response body, or turns a non-success status into [`FetchError`].
///
/// Failures are logged with the response body before they are returned.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    if !result.status.is_success() {
        let error = FetchError::new(result.status, result.url, result.data);
        match error.body_preview() {
            Some(body) => log::error!("Error: HTTP {} from {}: {}", error.status, error.url, body),
            None => log::error!("Error: HTTP {} from {}", error.status, error.url),
        }
        return Err(error.into());
    }

    serde_json::from_str(&result.data).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", result.url, e);
        AppError::malformed(&result.url, &e, &result.data)
    })
}

/// Parses one page of a listing and normalizes its records.
///
/// Zero results yield [`PageFetch::NoData`] rather than an empty page.
pub fn parse_listing<T: Entity>(result: ApiResponse<String>) -> Result<PageFetch<T>, AppError> {
    let response: PaginatedResponse<T::Raw> = parse_api_response(result)?;

    if response.results.is_empty() {
        log::info!("No data of type {} found...", T::KIND);
        return Ok(PageFetch::NoData);
    }

    Ok(PageFetch::Loaded(FetchedPage {
        has_more: response.next.is_some(),
        items: response.results.into_iter().map(T::normalize).collect(),
    }))
}

pub fn parse_hub(result: ApiResponse<String>) -> Result<Hub, AppError> {
    parse_api_response(result)
}

pub fn parse_hub_list(result: ApiResponse<String>) -> Result<Vec<Hub>, AppError> {
    let response: PaginatedResponse<Hub> = parse_api_response(result)?;
    Ok(response.results)
}

pub fn parse_vocabulary(result: ApiResponse<String>) -> Result<Vec<FilterOption>, AppError> {
    let response: PaginatedResponse<OptionRecord> = parse_api_response(result)?;
    Ok(build_option_tree(response.results))
}
