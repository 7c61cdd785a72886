use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use nn_core::feed::decode_segment;
use nn_core::{FailureCopy, ViewState};
use serde::Serialize;
use std::sync::Arc;
use crate::logging::Logger;
use crate::mount::mount;
use crate::render::{self, Template};
use crate::AppState;

/// `GET /`: client-driven, one mount cycle over the recent articles.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Response {
    let log = Logger::for_page("📊", "dashboard");
    let api = state.api.clone();
    let view_state = mount(
        async move { api.recent_articles().await.map(|list| list.articles) },
        FailureCopy::ARTICLES,
    )
    .settled()
    .await;
    log_outcome(&log, &view_state, |articles| format!("{} articles", articles.len()));
    let view = render::dashboard::view(&view_state);
    render_page(&state, Template::Listing, "Dashboard", &view, StatusCode::OK)
}

/// `GET /feeds`: client-driven, one mount cycle over the feed titles.
pub async fn feeds(State(state): State<Arc<AppState>>) -> Response {
    let log = Logger::for_page("📚", "feeds");
    let api = state.api.clone();
    let view_state = mount(
        async move { api.feed_titles().await.map(|list| list.feed_titles) },
        FailureCopy::FEEDS,
    )
    .settled()
    .await;
    log_outcome(&log, &view_state, |titles| format!("{} feeds", titles.len()));
    let view = render::feeds::view(&view_state);
    render_page(&state, Template::Feeds, "Feeds", &view, StatusCode::OK)
}

/// `GET /feeds/{feedTitle}`: the raw segment is decoded once, then
/// re-encoded by the client for the query.
pub async fn feed_articles(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let Some(segment) = route_segment(&uri, "/feeds/") else {
        return not_found(State(state)).await;
    };
    let feed_title = decode_segment(segment);
    let log = Logger::for_page("🗞️", "feed").with_prefix(format!("[{}]", feed_title));

    let result = state.api.feed_articles(&feed_title).await.map(|list| list.articles);
    let view_state = ViewState::settle(result, &FailureCopy::ARTICLES);
    log_outcome(&log, &view_state, |articles| format!("{} articles", articles.len()));

    let view = render::feed_articles::view(&feed_title, &view_state);
    render_page(&state, Template::Listing, &view.heading, &view, StatusCode::OK)
}

/// `GET /articles/{id}`: server-driven; a missing article answers 404.
pub async fn article(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let Some(segment) = route_segment(&uri, "/articles/") else {
        return not_found(State(state)).await;
    };
    let id = decode_segment(segment);
    let log = Logger::for_page("📰", "article").with_prefix(format!("[{}]", id));

    let view_state = ViewState::settle(state.api.article(&id).await, &FailureCopy::ARTICLE);
    log_outcome(&log, &view_state, |a| format!("{:?}", a.display_title()));

    let view = render::article::view(&view_state);
    let status = if view.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    render_page(&state, Template::Article, &view.heading, &view, status)
}

pub async fn not_found(State(state): State<Arc<AppState>>) -> Response {
    let view = render::not_found();
    render_page(&state, Template::NotFound, "Not Found", &view, StatusCode::NOT_FOUND)
}

/// The undecoded path segment after `prefix`, if it is a single segment.
fn route_segment<'a>(uri: &'a Uri, prefix: &str) -> Option<&'a str> {
    uri.path()
        .strip_prefix(prefix)
        .filter(|segment| !segment.is_empty() && !segment.contains('/'))
}

fn log_outcome<T>(log: &Logger, state: &ViewState<T>, describe: impl FnOnce(&T) -> String) {
    match state {
        ViewState::Loading => log.debug("still loading"),
        ViewState::Error(failure) => log.warn(&format!("showing error: {}", failure.message)),
        ViewState::Empty => log.info("nothing to show"),
        ViewState::Ready(payload) => log.info(&format!("showing {}", describe(payload))),
    }
}

fn render_page<V: Serialize>(
    state: &AppState,
    template: Template,
    title: &str,
    view: &V,
    status: StatusCode,
) -> Response {
    match state.pages.render(template, title, view) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            let log = Logger::for_page("🧱", template.name());
            log.error(&format!("failed to render: {}", e));
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
