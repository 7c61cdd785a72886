//! Exercises `ApiClient` against an in-process mock of the news API.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use nn_client::ApiClient;
use nn_core::{FetchError, NewsApi};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Captured {
    queries: Arc<Mutex<Vec<String>>>,
    cache_headers: Arc<Mutex<Vec<String>>>,
}

async fn article(
    State(captured): State<Captured>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(value) = headers.get("cache-control").and_then(|v| v.to_str().ok()) {
        captured.cache_headers.lock().unwrap().push(value.to_string());
    }
    match params.get("id").map(String::as_str) {
        Some("42") => Json(json!({
            "id": 42,
            "title": "",
            "page_title": "Quarterly Report",
            "author": null,
            "source_link": "https://example.com/report",
            "pdf_url": "https://example.com/report.pdf",
            "content": "Revenue grew.",
            "feed_title": "Tech News",
            "date_processed": "2024-10-15T14:05:09Z"
        }))
        .into_response(),
        Some("500") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Some("garbled") => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({"error": "Article not found"}))).into_response(),
    }
}

async fn feed_articles(
    State(captured): State<Captured>,
    axum::extract::RawQuery(query): axum::extract::RawQuery,
) -> Response {
    let query = query.unwrap_or_default();
    captured.queries.lock().unwrap().push(query.clone());
    if query.contains("Missing") {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(json!({ "articles": [{ "id": "a1", "title": "One" }] })).into_response()
}

async fn recent_articles() -> Json<serde_json::Value> {
    Json(json!({ "articles": [] }))
}

async fn feeds() -> Json<serde_json::Value> {
    Json(json!({ "feed_titles": ["Tech News", "Q&A/Daily"] }))
}

async fn start_mock_api() -> (SocketAddr, Captured) {
    let captured = Captured::default();
    let app = Router::new()
        .route("/api/article", get(article))
        .route("/api/articles/all", get(recent_articles))
        .route("/api/articles/feed", get(feed_articles))
        .route("/api/feeds", get(feeds))
        .with_state(captured.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, captured)
}

fn client_for(addr: SocketAddr) -> ApiClient {
    ApiClient::new(Some(format!("http://{}", addr))).unwrap()
}

#[tokio::test]
async fn test_article_success_decodes_fields() {
    let (addr, captured) = start_mock_api().await;
    let client = client_for(addr);

    let article = client.article("42").await.unwrap();
    assert_eq!(article.id.as_str(), "42");
    assert_eq!(article.display_title(), "Quarterly Report");
    assert_eq!(article.display_author(), "Unknown");
    assert_eq!(article.pdf_url.as_deref(), Some("https://example.com/report.pdf"));

    let cache_headers = captured.cache_headers.lock().unwrap().clone();
    assert_eq!(cache_headers, vec!["no-cache, no-store".to_string()]);
}

#[tokio::test]
async fn test_article_404_is_not_found() {
    let (addr, _) = start_mock_api().await;
    let err = client_for(addr).article("missing").await.unwrap_err();
    assert_eq!(err, FetchError::NotFound);
}

#[tokio::test]
async fn test_article_500_is_request_failed() {
    let (addr, _) = start_mock_api().await;
    let err = client_for(addr).article("500").await.unwrap_err();
    assert_eq!(err, FetchError::RequestFailed { status: 500 });
}

#[tokio::test]
async fn test_non_json_body_is_unexpected() {
    let (addr, _) = start_mock_api().await;
    let err = client_for(addr).article("garbled").await.unwrap_err();
    assert!(matches!(err, FetchError::Unexpected(_)));
}

#[tokio::test]
async fn test_feed_404_is_generic_failure() {
    let (addr, _) = start_mock_api().await;
    let err = client_for(addr).feed_articles("Missing").await.unwrap_err();
    assert_eq!(err, FetchError::RequestFailed { status: 404 });
}

#[tokio::test]
async fn test_feed_title_is_percent_encoded_in_query() {
    let (addr, captured) = start_mock_api().await;
    let client = client_for(addr);

    let list = client.feed_articles("Tech News").await.unwrap();
    assert_eq!(list.articles.len(), 1);
    client.feed_articles("Q&A/Daily").await.unwrap();

    let queries = captured.queries.lock().unwrap().clone();
    assert_eq!(
        queries,
        vec![
            "feed_title=Tech%20News".to_string(),
            "feed_title=Q%26A%2FDaily".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_collections() {
    let (addr, _) = start_mock_api().await;
    let client = client_for(addr);

    assert!(client.recent_articles().await.unwrap().articles.is_empty());
    let feeds = client.feed_titles().await.unwrap();
    assert_eq!(feeds.feed_titles, vec!["Tech News".to_string(), "Q&A/Daily".to_string()]);
}

#[tokio::test]
async fn test_unreachable_api_is_unexpected() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr).feed_titles().await.unwrap_err();
    assert!(matches!(err, FetchError::Unexpected(_)));
}

#[tokio::test]
async fn test_unconfigured_client_fails_every_fetch() {
    let client = ApiClient::new(None).unwrap();
    assert!(matches!(client.feed_titles().await, Err(FetchError::Unexpected(_))));
    assert!(matches!(client.article("1").await, Err(FetchError::Unexpected(_))));
}
