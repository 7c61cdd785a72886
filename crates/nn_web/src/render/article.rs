use super::{Frame, Link, Notice};
use nn_core::view::ARTICLE_NOT_FOUND;
use nn_core::{Article, FailureKind, ViewState};
use serde::Serialize;

pub const LOADING_HEADING: &str = "Loading Article...";
pub const NOT_FOUND_HEADING: &str = "Article Not Found";
pub const ERROR_HEADING: &str = "Error";
pub const GO_BACK: &str = "Go Back to Home";

/// Skeleton blocks: title, two metadata lines, content area.
pub const SKELETON: [&str; 4] = ["short", "line", "line", "block"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleDetail {
    pub author: String,
    pub source_link: String,
    pub pdf_url: String,
    pub content: String,
}

impl From<&Article> for ArticleDetail {
    fn from(article: &Article) -> Self {
        Self {
            author: article.display_author().to_string(),
            source_link: article.source_link.clone().unwrap_or_default(),
            pdf_url: article.pdf_url.clone().unwrap_or_default(),
            content: article.display_content().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleView {
    pub heading: String,
    #[serde(flatten)]
    pub frame: Frame,
    pub article: Option<ArticleDetail>,
}

impl ArticleView {
    pub fn is_not_found(&self) -> bool {
        self.heading == NOT_FOUND_HEADING
    }
}

pub fn view(state: &ViewState<Article>) -> ArticleView {
    let back = Some(Link::home(GO_BACK));
    match state {
        ViewState::Loading => ArticleView {
            heading: LOADING_HEADING.to_string(),
            frame: Frame::loading(&SKELETON),
            article: None,
        },
        ViewState::Error(failure) => ArticleView {
            heading: match failure.kind {
                FailureKind::NotFound => NOT_FOUND_HEADING,
                _ => ERROR_HEADING,
            }
            .to_string(),
            frame: Frame::error(failure, back),
            article: None,
        },
        // The lookup never yields an empty payload; treat it like absence.
        ViewState::Empty => ArticleView {
            heading: NOT_FOUND_HEADING.to_string(),
            frame: Frame {
                error: Some(Notice::new(ARTICLE_NOT_FOUND, back)),
                ..Default::default()
            },
            article: None,
        },
        ViewState::Ready(article) => ArticleView {
            heading: article.display_title().to_string(),
            frame: Frame::ready(),
            article: Some(ArticleDetail::from(article)),
        },
    }
}
