use nn_core::feed::encode_segment;

/// The read-only endpoints of the news API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Article { id: &'a str },
    RecentArticles,
    FeedArticles { feed_title: &'a str },
    FeedTitles,
}

impl Endpoint<'_> {
    pub fn path_and_query(&self) -> String {
        match self {
            Endpoint::Article { id } => format!("/api/article?id={}", encode_segment(id)),
            Endpoint::RecentArticles => "/api/articles/all".to_string(),
            Endpoint::FeedArticles { feed_title } => {
                format!("/api/articles/feed?feed_title={}", encode_segment(feed_title))
            }
            Endpoint::FeedTitles => "/api/feeds".to_string(),
        }
    }

    /// Only the single-article lookup treats 404 as "absent".
    pub fn distinguishes_not_found(&self) -> bool {
        matches!(self, Endpoint::Article { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Article { .. } => "article",
            Endpoint::RecentArticles => "recent articles",
            Endpoint::FeedArticles { .. } => "feed articles",
            Endpoint::FeedTitles => "feed titles",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Endpoint::Article { id: "42" }.path_and_query(), "/api/article?id=42");
        assert_eq!(Endpoint::RecentArticles.path_and_query(), "/api/articles/all");
        assert_eq!(
            Endpoint::FeedArticles { feed_title: "Tech News" }.path_and_query(),
            "/api/articles/feed?feed_title=Tech%20News"
        );
        assert_eq!(
            Endpoint::FeedArticles { feed_title: "Q&A/Daily" }.path_and_query(),
            "/api/articles/feed?feed_title=Q%26A%2FDaily"
        );
        assert_eq!(Endpoint::FeedTitles.path_and_query(), "/api/feeds");
    }

    #[test]
    fn test_only_article_lookup_distinguishes_not_found() {
        assert!(Endpoint::Article { id: "1" }.distinguishes_not_found());
        assert!(!Endpoint::RecentArticles.distinguishes_not_found());
        assert!(!Endpoint::FeedArticles { feed_title: "x" }.distinguishes_not_found());
        assert!(!Endpoint::FeedTitles.distinguishes_not_found());
    }
}
