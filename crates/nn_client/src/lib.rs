use async_trait::async_trait;
use nn_core::{Article, ArticleList, FeedTitles, FetchError, FetchResult, NewsApi, Result};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{debug, warn};
use url::Url;

pub mod endpoint;

pub use endpoint::Endpoint;

const USER_AGENT: &str = concat!("nn/", env!("CARGO_PKG_VERSION"));

/// `reqwest` client for the news API. Every request bypasses caches and is
/// attempted exactly once.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    /// A missing or malformed base URL is not an error here; every fetch
    /// through such a client fails with `Unexpected`.
    pub fn new(base_url: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
        })
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn url_for(&self, endpoint: &Endpoint<'_>) -> FetchResult<Url> {
        let base = self
            .base_url
            .as_deref()
            .ok_or_else(|| FetchError::unexpected("API base URL is not configured"))?;
        let joined = format!("{}{}", base, endpoint.path_and_query());
        Url::parse(&joined)
            .map_err(|e| FetchError::Unexpected(format!("Invalid API URL {:?}: {}", joined, e)))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> FetchResult<T> {
        let result = self.fetch(&endpoint).await;
        if let Err(e) = &result {
            warn!("Failed to fetch {}: {}", endpoint.name(), e);
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint<'_>) -> FetchResult<T> {
        let url = self.url_for(endpoint)?;
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(FetchError::unexpected)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND && endpoint.distinguishes_not_found() {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::unexpected)?;
        serde_json::from_slice(&body).map_err(FetchError::unexpected)
    }
}

#[async_trait]
impl NewsApi for ApiClient {
    async fn article(&self, id: &str) -> FetchResult<Article> {
        self.get_json(Endpoint::Article { id }).await
    }

    async fn recent_articles(&self) -> FetchResult<ArticleList> {
        self.get_json(Endpoint::RecentArticles).await
    }

    async fn feed_articles(&self, feed_title: &str) -> FetchResult<ArticleList> {
        self.get_json(Endpoint::FeedArticles { feed_title }).await
    }

    async fn feed_titles(&self) -> FetchResult<FeedTitles> {
        self.get_json(Endpoint::FeedTitles).await
    }
}
