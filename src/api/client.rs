// src/api/client.rs
//! Thin reqwest wrapper for the directory API.
//!
//! Handles the base URL, the optional bearer token, and turning a response
//! into text plus metadata. No parsing happens here.

use crate::error::AppError;
use crate::types::{ApiBaseUrl, AuthToken};
use reqwest::{header, Client, Response};
use std::time::Duration;

/// A thin wrapper around reqwest Client for directory API requests.
#[derive(Clone)]
pub struct DirectoryHttpClient {
    client: Client,
    base_url: ApiBaseUrl,
}

impl DirectoryHttpClient {
    pub fn new(base_url: ApiBaseUrl, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers())
            .timeout(timeout)
            .build()?;
        Ok(Self { client, base_url })
    }

    fn create_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers
    }

    fn auth_header(token: &AuthToken) -> Result<header::HeaderValue, AppError> {
        header::HeaderValue::from_str(&format!("Bearer {}", token.as_str())).map_err(|e| {
            AppError::MissingConfiguration(format!("Invalid auth token format: {}", e))
        })
    }

    pub fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl super::DirectorySource for DirectoryHttpClient {
    async fn get(
        &self,
        endpoint: &str,
        token: Option<&AuthToken>,
    ) -> Result<ApiResponse<String>, AppError> {
        let url = self.base_url.join(endpoint);
        log::debug!("GET {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, Self::auth_header(token)?);
        }

        let response = request.send().await.map_err(|e| {
            log::error!("Request to {} failed: {}", url, e);
            AppError::from(e)
        })?;
        log::debug!("{} -> {}", url, response.status());

        extract_response_text(response).await
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

impl ApiResponse<String> {
    /// Builds a response by hand; used by in-memory sources.
    pub fn new(status: reqwest::StatusCode, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            data: body.into(),
            status,
            url: url.into(),
        }
    }
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
