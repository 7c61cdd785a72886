use async_trait::async_trait;
use crate::error::FetchResult;
use crate::types::{Article, ArticleList, FeedTitles};

#[async_trait]
pub trait NewsApi: Send + Sync {
    /// `GET /api/article?id={id}`; a 404 is reported as `NotFound`
    async fn article(&self, id: &str) -> FetchResult<Article>;

    /// `GET /api/articles/all`, the API's recency window
    async fn recent_articles(&self) -> FetchResult<ArticleList>;

    /// `GET /api/articles/feed?feed_title={feed_title}`
    async fn feed_articles(&self, feed_title: &str) -> FetchResult<ArticleList>;

    /// `GET /api/feeds`
    async fn feed_titles(&self) -> FetchResult<FeedTitles>;
}
