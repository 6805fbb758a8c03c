// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use strava_mileage::services::StravaClient;

/// Bearer token the fake Strava server accepts.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-access-token";

/// Load the recorded activity page fixture.
#[allow(dead_code)]
pub fn fixture_page() -> Vec<Value> {
    let json = std::fs::read_to_string("tests/fixtures/activity_page.json")
        .expect("Failed to read fixture");
    serde_json::from_str(&json).expect("Fixture is not a JSON array")
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: u32,
    per_page: u32,
}

/// In-process stand-in for `GET /athlete/activities`.
#[derive(Default)]
pub struct FakeStrava {
    /// Pages served in order; anything past the end is an empty page.
    pub pages: Vec<Vec<Value>>,
    /// Answer this page with the given status instead of data.
    pub fail_on: Option<(u32, StatusCode)>,
    /// JSON body for the failing page; plain text when unset.
    pub fail_body: Option<Value>,
    /// `(page, per_page)` of every request received.
    pub requests: Mutex<Vec<(u32, u32)>>,
}

#[allow(dead_code)]
impl FakeStrava {
    pub fn with_pages(pages: Vec<Vec<Value>>) -> Arc<Self> {
        Arc::new(Self {
            pages,
            ..Default::default()
        })
    }

    pub fn failing(pages: Vec<Vec<Value>>, page: u32, status: StatusCode) -> Arc<Self> {
        Arc::new(Self {
            pages,
            fail_on: Some((page, status)),
            ..Default::default()
        })
    }

    pub fn failing_with_body(page: u32, status: StatusCode, body: Value) -> Arc<Self> {
        Arc::new(Self {
            fail_on: Some((page, status)),
            fail_body: Some(body),
            ..Default::default()
        })
    }

    pub fn requests(&self) -> Vec<(u32, u32)> {
        self.requests.lock().unwrap().clone()
    }
}

async fn list_activities(
    State(state): State<Arc<FakeStrava>>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Response {
    state
        .requests
        .lock()
        .unwrap()
        .push((query.page, query.per_page));

    let expected = format!("Bearer {}", TEST_TOKEN);
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if auth != Some(expected.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Authorization Error"})),
        )
            .into_response();
    }

    if let Some((page, status)) = state.fail_on {
        if query.page == page {
            return match &state.fail_body {
                Some(body) => (status, Json(body.clone())).into_response(),
                None => (status, "upstream exploded").into_response(),
            };
        }
    }

    let batch = (query.page as usize)
        .checked_sub(1)
        .and_then(|idx| state.pages.get(idx))
        .cloned()
        .unwrap_or_default();
    Json(Value::Array(batch)).into_response()
}

/// Serve `state` on an ephemeral local port; returns the API base URL.
#[allow(dead_code)]
pub async fn spawn_fake_strava(state: Arc<FakeStrava>) -> String {
    let app = Router::new()
        .route("/api/v3/athlete/activities", get(list_activities))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake Strava server");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api/v3", addr)
}

/// Client pointed at the fake server, bypassing any proxy settings.
#[allow(dead_code)]
pub fn test_client(base_url: &str, token: &str) -> StravaClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client");
    StravaClient::with_client(http, base_url, token)
}
