use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_AUTHOR: &str = "Unknown";
pub const NO_CONTENT: &str = "No content extracted.";
pub const INVALID_DATE: &str = "Invalid Date";

/// Opaque article identifier. The API sends either a number or a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawArticleId")]
pub struct ArticleId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawArticleId {
    Number(i64),
    Text(String),
}

impl From<RawArticleId> for ArticleId {
    fn from(raw: RawArticleId) -> Self {
        match raw {
            RawArticleId::Number(n) => ArticleId(n.to_string()),
            RawArticleId::Text(s) => ArticleId(s),
        }
    }
}

impl ArticleId {
    pub fn new(id: impl Into<String>) -> Self {
        ArticleId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single ingested document as served by the news API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub id: ArticleId,
    pub title: Option<String>,
    pub page_title: Option<String>,
    pub author: Option<String>,
    pub source_link: Option<String>,
    pub pdf_url: Option<String>,
    pub content: Option<String>,
    pub feed_title: Option<String>,
    pub date_processed: Option<String>,
}

impl Article {
    /// `title`, then `page_title`, then "Untitled".
    pub fn display_title(&self) -> &str {
        first_present([self.title.as_deref(), self.page_title.as_deref()], UNTITLED)
    }

    pub fn display_author(&self) -> &str {
        first_present([self.author.as_deref()], UNKNOWN_AUTHOR)
    }

    pub fn display_content(&self) -> &str {
        first_present([self.content.as_deref()], NO_CONTENT)
    }

    pub fn display_feed(&self) -> &str {
        self.feed_title.as_deref().unwrap_or_default()
    }

    pub fn display_date(&self) -> String {
        format_timestamp(self.date_processed.as_deref())
    }

    /// Route of the detail page for this article.
    pub fn href(&self) -> String {
        format!("/articles/{}", crate::feed::encode_segment(self.id.as_str()))
    }
}

/// Returns the first candidate that is present and non-empty, else `fallback`.
pub fn first_present<'a, I>(candidates: I, fallback: &'a str) -> &'a str
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or(fallback)
}

/// Envelope of `/api/articles/all` and `/api/articles/feed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub articles: Vec<Article>,
}

/// Envelope of `/api/feeds`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedTitles {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub feed_titles: Vec<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses the timestamp shapes the API is known to emit.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Renders a timestamp as `M/D/YYYY, h:mm:ss AM` in UTC.
pub fn format_timestamp(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: Option<&str>, page_title: Option<&str>, author: Option<&str>) -> Article {
        Article {
            id: ArticleId::new("1"),
            title: title.map(String::from),
            page_title: page_title.map(String::from),
            author: author.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_title_fallback_chain() {
        assert_eq!(article(Some("Title"), Some("Page"), None).display_title(), "Title");
        assert_eq!(article(None, Some("Page"), None).display_title(), "Page");
        assert_eq!(article(Some(""), Some("Page"), None).display_title(), "Page");
        assert_eq!(article(Some(""), Some(""), None).display_title(), UNTITLED);
        assert_eq!(article(None, None, None).display_title(), UNTITLED);
    }

    #[test]
    fn test_author_and_content_fallbacks() {
        assert_eq!(article(None, None, Some("Ada")).display_author(), "Ada");
        assert_eq!(article(None, None, Some("")).display_author(), UNKNOWN_AUTHOR);
        assert_eq!(article(None, None, None).display_author(), UNKNOWN_AUTHOR);
        assert_eq!(Article::default().display_content(), NO_CONTENT);
    }

    #[test]
    fn test_article_deserializes_numeric_and_string_ids() {
        let a: Article = serde_json::from_str(r#"{"id": 42, "title": "A"}"#).unwrap();
        assert_eq!(a.id.as_str(), "42");
        assert_eq!(a.href(), "/articles/42");

        let b: Article = serde_json::from_str(r#"{"id": "abc", "author": null}"#).unwrap();
        assert_eq!(b.id.as_str(), "abc");
        assert_eq!(b.display_author(), UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_envelopes_tolerate_missing_and_null_collections() {
        let list: ArticleList = serde_json::from_str("{}").unwrap();
        assert!(list.articles.is_empty());
        let list: ArticleList = serde_json::from_str(r#"{"articles": null}"#).unwrap();
        assert!(list.articles.is_empty());
        let feeds: FeedTitles = serde_json::from_str(r#"{"feed_titles": ["Tech News"]}"#).unwrap();
        assert_eq!(feeds.feed_titles, vec!["Tech News".to_string()]);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp(Some("2024-10-15T14:05:09Z")),
            "10/15/2024, 2:05:09 PM"
        );
        assert_eq!(
            format_timestamp(Some("2024-10-15T14:05:09.123+02:00")),
            "10/15/2024, 12:05:09 PM"
        );
        assert_eq!(
            format_timestamp(Some("2024-10-15 09:30:00")),
            "10/15/2024, 9:30:00 AM"
        );
        assert_eq!(
            format_timestamp(Some("Tue, 15 Oct 2024 10:00:00 GMT")),
            "10/15/2024, 10:00:00 AM"
        );
        assert_eq!(format_timestamp(Some("2024-01-02")), "1/2/2024, 12:00:00 AM");
        assert_eq!(format_timestamp(Some("yesterday")), INVALID_DATE);
        assert_eq!(format_timestamp(None), INVALID_DATE);
    }
}
