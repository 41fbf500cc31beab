// tests/api_http.rs
//
// HTTP-level tests for the public API Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot, with the
// mock provider active so nothing touches the network.
//
// Covered:
// - GET /health
// - GET /search/body (results, validation, zero timeout)
// - GET /search/url  (include + exclude semantics)
// - POST /admin/mock-mode
// - GET /status/sources

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value as Json;
use tower::ServiceExt as _; // for `oneshot`

use news_keyword_search::api::{self, AppState};
use news_keyword_search::fetch::live::RssProvider;
use news_keyword_search::fetch::mock::MockProvider;
use news_keyword_search::orchestrator::SearchOrchestrator;
use news_keyword_search::sources::SourceCatalog;

const BODY_LIMIT: usize = 1024 * 1024; // 1MB, safe for tests

/// Build the same Router the binary uses, with the mock provider active.
fn test_router() -> Router {
    let orchestrator = Arc::new(SearchOrchestrator::new(
        SourceCatalog::new(),
        Arc::new(RssProvider::new()),
        Arc::new(MockProvider::new()),
        true,
    ));
    api::router(AppState {
        orchestrator,
        default_timeout_secs: 25.0,
    })
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Json) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    let resp = app.oneshot(req).await.expect("oneshot");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    let v: Json = serde_json::from_slice(&bytes).expect("parse json body");
    (status, v)
}

#[tokio::test]
async fn api_health_returns_200_and_ok_body() {
    let app = test_router();

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("build GET /health");

    let resp = app.oneshot(req).await.expect("oneshot /health");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    assert_eq!(String::from_utf8(bytes).expect("utf8").trim(), "OK");
}

#[tokio::test]
async fn api_body_search_returns_matching_mock_articles() {
    let (status, v) = get_json(test_router(), "/search/body?keywords_include=climate").await;
    assert_eq!(status, StatusCode::OK);

    let articles = v["articles"].as_array().expect("articles array");
    assert_eq!(articles.len(), 3, "3 of 5 mock bodies mention climate");
    assert_eq!(v["truncated"], Json::Bool(false));
    for a in articles {
        let body_text = a["body_text"].as_str().expect("body_text");
        assert!(
            body_text.to_lowercase().contains("climate"),
            "body must contain the keyword: {body_text}"
        );
    }
    assert!(
        v["message"].as_str().unwrap_or_default().contains("3"),
        "message should report the count"
    );
}

#[tokio::test]
async fn api_body_search_without_keywords_is_400() {
    let (status, v) = get_json(test_router(), "/search/body").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(v.get("error").is_some(), "error body expected");
}

#[tokio::test]
async fn api_url_search_applies_include_and_exclude() {
    // "tech" appears only in .../tech-regulations, which the exclude kills.
    let (status, v) = get_json(
        test_router(),
        "/search/url?keywords_include=tech&keywords_exclude=regulations",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["articles"].as_array().expect("articles").len(), 0);

    // Without the exclude the same include matches it.
    let (_, v) = get_json(test_router(), "/search/url?keywords_include=tech").await;
    let articles = v["articles"].as_array().expect("articles");
    assert_eq!(articles.len(), 1);
    assert!(articles[0]["url"]
        .as_str()
        .expect("url")
        .contains("tech-regulations"));
}

#[tokio::test]
async fn api_zero_timeout_returns_promptly_truncated() {
    let (status, v) = get_json(
        test_router(),
        "/search/body?keywords_include=climate&timeout_seconds=0",
    )
    .await;
    assert_eq!(status, StatusCode::OK, "deadline firing is not an error");
    assert_eq!(v["truncated"], Json::Bool(true));
    assert!(
        v["articles"].as_array().expect("articles").len() <= 1,
        "at most one pull before the expired deadline stops collection"
    );
}

#[tokio::test]
async fn api_mock_mode_toggle_reports_previous_state() {
    let app = test_router();

    let post = |app: Router, enabled: bool| async move {
        let req = Request::builder()
            .method("POST")
            .uri("/admin/mock-mode")
            .header("content-type", "application/json")
            .body(Body::from(format!("{{\"enabled\":{enabled}}}")))
            .expect("build POST /admin/mock-mode");
        let resp = app.oneshot(req).await.expect("oneshot mock-mode");
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
            .await
            .expect("read body")
            .to_vec();
        serde_json::from_slice::<Json>(&bytes).expect("parse json")
    };

    // Router starts in mock mode; disabling reports previous=true.
    let v = post(app.clone(), false).await;
    assert_eq!(v["previous"], Json::Bool(true));
    assert_eq!(v["enabled"], Json::Bool(false));

    // And re-enabling reports previous=false.
    let v = post(app, true).await;
    assert_eq!(v["previous"], Json::Bool(false));
}

#[tokio::test]
async fn api_status_sources_groups_by_region() {
    let (status, v) = get_json(test_router(), "/status/sources").await;
    assert_eq!(status, StatusCode::OK);

    let groups = v.as_array().expect("array of region groups");
    let regions: Vec<&str> = groups
        .iter()
        .map(|g| g["region"].as_str().expect("region"))
        .collect();
    for expected in ["US", "UK", "AU", "CA"] {
        assert!(regions.contains(&expected), "missing region {expected}");
    }
    for g in groups {
        assert_eq!(
            g["count"].as_u64().expect("count") as usize,
            g["sources"].as_array().expect("sources").len()
        );
    }
}
