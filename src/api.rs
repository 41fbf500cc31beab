// src/api.rs
//! HTTP front end. Thin adapter over the orchestrator: query parsing, the
//! service-side default timeout, and JSON encoding. A deadline firing is a
//! 200 with `truncated: true`, never an error status.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::fetch::types::Article;
use crate::orchestrator::SearchOrchestrator;
use crate::request::{SearchMode, SearchRequest, DEFAULT_DAYS_BACK};
use crate::sources::Region;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<SearchOrchestrator>,
    pub default_timeout_secs: f64,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/search/body", get(search_body))
        .route("/search/url", get(search_url))
        .route("/status/sources", get(status_sources))
        .route("/admin/mock-mode", post(set_mock_mode))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    /// Comma-separated include keywords.
    keywords_include: Option<String>,
    /// Comma-separated exclude keywords (url mode only).
    keywords_exclude: Option<String>,
    max_articles: Option<usize>,
    days_back: Option<u32>,
    timeout_seconds: Option<f64>,
    /// Comma-separated source names.
    sources: Option<String>,
}

#[derive(Serialize)]
struct SearchResponse {
    message: String,
    articles: Vec<Article>,
    truncated: bool,
}

async fn search_body(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    run_search(state, params, SearchMode::Body).await
}

async fn search_url(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    run_search(state, params, SearchMode::Url).await
}

async fn run_search(
    state: AppState,
    params: SearchParams,
    mode: SearchMode,
) -> axum::response::Response {
    let sources = split_terms(params.sources.as_deref());
    let request = SearchRequest {
        mode,
        include: split_terms(params.keywords_include.as_deref()),
        exclude: split_terms(params.keywords_exclude.as_deref()),
        max_articles: params.max_articles,
        days_back: params.days_back.unwrap_or(DEFAULT_DAYS_BACK),
        // The service owns the default timeout; the caller can still ask for
        // a longer or shorter one.
        timeout_seconds: params.timeout_seconds.or(Some(state.default_timeout_secs)),
        sources: if sources.is_empty() { None } else { Some(sources) },
    };

    match state.orchestrator.execute(&request).await {
        Ok(result) => {
            let label = match mode {
                SearchMode::Body => "Body",
                SearchMode::Url => "URL",
            };
            let response = SearchResponse {
                message: format!(
                    "{} search completed with {} article(s) found",
                    label,
                    result.articles.len()
                ),
                articles: result.articles,
                truncated: result.truncated,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

#[derive(Serialize)]
struct RegionGroup {
    region: Region,
    count: usize,
    sources: Vec<String>,
}

async fn status_sources(State(state): State<AppState>) -> Json<Vec<RegionGroup>> {
    let groups = state
        .orchestrator
        .grouping_summary()
        .into_iter()
        .map(|(region, (count, sources))| RegionGroup {
            region,
            count,
            sources,
        })
        .collect();
    Json(groups)
}

#[derive(Deserialize)]
struct MockModeReq {
    enabled: bool,
}

#[derive(Serialize)]
struct MockModeResp {
    previous: bool,
    enabled: bool,
}

async fn set_mock_mode(
    State(state): State<AppState>,
    Json(body): Json<MockModeReq>,
) -> Json<MockModeResp> {
    let previous = state.orchestrator.set_mock_mode(body.enabled);
    Json(MockModeResp {
        previous,
        enabled: body.enabled,
    })
}

fn split_terms(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
