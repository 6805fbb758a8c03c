// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for listing the athlete's activities.
//!
//! Handles:
//! - Authenticated, paginated `GET /athlete/activities`
//! - Status checking (401 and 429 get well-known messages, never retried)
//! - Walking every page until Strava returns an empty one

use std::future::Future;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;

/// Maximum page size Strava allows for activity listing.
pub const MAX_PER_PAGE: u32 = 200;

/// A paginated source of raw activity objects.
///
/// Pages are 1-based. An empty page means there is nothing further.
pub trait ActivitySource {
    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<Vec<Value>, AppError>> + Send;
}

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl StravaClient {
    /// Create a client against `base_url`, normally
    /// [`DEFAULT_STRAVA_API_URL`](crate::config::DEFAULT_STRAVA_API_URL).
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, access_token)
    }

    /// Create a client around a preconfigured `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    /// List one page of activities for the authenticated athlete.
    pub async fn list_activities(&self, page: u32, per_page: u32) -> Result<Vec<Value>, AppError> {
        let url = format!("{}/athlete/activities", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();

            if status == StatusCode::TOO_MANY_REQUESTS {
                tracing::warn!("Strava rate limit hit (429)");
                return Err(AppError::StravaApi(AppError::STRAVA_RATE_LIMIT.to_string()));
            }

            if status == StatusCode::UNAUTHORIZED {
                return Err(AppError::StravaApi(
                    AppError::STRAVA_TOKEN_ERROR.to_string(),
                ));
            }

            return Err(AppError::StravaApi(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::StravaApi(format!("JSON parse error: {}", e)))
    }
}

impl ActivitySource for StravaClient {
    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<Vec<Value>, AppError>> + Send {
        self.list_activities(page, MAX_PER_PAGE)
    }
}

/// Fetch every activity, one page at a time, until an empty page.
///
/// Pages are concatenated in order. The first error aborts the walk and
/// nothing fetched so far is returned.
pub async fn fetch_all<S: ActivitySource>(source: &S) -> Result<Vec<Value>, AppError> {
    let mut activities = Vec::new();
    let mut page = 1;

    loop {
        tracing::info!(page, "Fetching page");
        let batch = source.fetch_page(page).await?;
        if batch.is_empty() {
            break;
        }
        tracing::debug!(page, count = batch.len(), "Page received");
        activities.extend(batch);
        page += 1;
    }

    tracing::info!(
        count = activities.len(),
        pages = page - 1,
        "Fetched all activities"
    );
    Ok(activities)
}
