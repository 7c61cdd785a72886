//! Pure mappings from a page's `ViewState` to a serializable view, plus the
//! handlebars registry that turns views into HTML.

use handlebars::Handlebars;
use nn_core::{Article, Error, Failure, Result, ViewState};
use serde::Serialize;

pub mod article;
pub mod dashboard;
pub mod feed_articles;
pub mod feeds;

/// Skeleton rows shown by list pages while loading.
pub const LIST_SKELETON: [&str; 5] = [""; 5];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Listing,
    Feeds,
    Article,
    NotFound,
}

impl Template {
    pub fn name(&self) -> &'static str {
        match self {
            Template::Listing => "listing",
            Template::Feeds => "feeds",
            Template::Article => "article",
            Template::NotFound => "not_found",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub label: String,
}

impl Link {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }

    pub fn home(label: &str) -> Self {
        Self::new("/", label)
    }

    pub fn feeds(label: &str) -> Self {
        Self::new("/feeds", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
    pub link: Option<Link>,
}

impl Notice {
    pub fn new(message: impl Into<String>, link: Option<Link>) -> Self {
        Self {
            message: message.into(),
            link,
        }
    }
}

/// The non-payload part of a page. At most one of `loading`, `error` and
/// `empty` is set; none is set when the page is ready.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub loading: bool,
    pub skeleton: Vec<&'static str>,
    pub error: Option<Notice>,
    pub empty: Option<Notice>,
}

impl Frame {
    pub fn loading(skeleton: &[&'static str]) -> Self {
        Self {
            loading: true,
            skeleton: skeleton.to_vec(),
            ..Default::default()
        }
    }

    pub fn error(failure: &Failure, link: Option<Link>) -> Self {
        Self {
            error: Some(Notice::new(failure.message.clone(), link)),
            ..Default::default()
        }
    }

    pub fn empty(notice: Notice) -> Self {
        Self {
            empty: Some(notice),
            ..Default::default()
        }
    }

    pub fn ready() -> Self {
        Self::default()
    }

    /// Builds the frame for `state`; `ready` is only called for `Ready`.
    pub fn for_state<T>(
        state: &ViewState<T>,
        skeleton: &[&'static str],
        error_link: Option<Link>,
        empty: Notice,
    ) -> Self {
        match state {
            ViewState::Loading => Frame::loading(skeleton),
            ViewState::Error(failure) => Frame::error(failure, error_link),
            ViewState::Empty => Frame::empty(empty),
            ViewState::Ready(_) => Frame::ready(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRow {
    pub href: String,
    pub title: String,
    pub detail: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleTable {
    pub detail_heading: &'static str,
    pub rows: Vec<ArticleRow>,
}

impl ArticleTable {
    /// One row per article; `detail` fills the middle column.
    pub fn new(
        detail_heading: &'static str,
        articles: &[Article],
        detail: fn(&Article) -> &str,
    ) -> Self {
        let rows = articles
            .iter()
            .map(|article| ArticleRow {
                href: article.href(),
                title: article.display_title().to_string(),
                detail: detail(article).to_string(),
                date: article.display_date(),
            })
            .collect();
        Self { detail_heading, rows }
    }
}

/// A table page: the dashboard and the per-feed listing share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingView {
    pub heading: String,
    #[serde(flatten)]
    pub frame: Frame,
    pub table: Option<ArticleTable>,
}

#[derive(Serialize)]
struct LayoutContext<'a> {
    title: &'a str,
    body: &'a str,
}

/// Compiled templates. Built once at startup and shared read-only.
pub struct Pages {
    registry: Handlebars<'static>,
}

impl Pages {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        let templates = [
            ("layout", include_str!("../../templates/layout.hbs")),
            ("skeleton", include_str!("../../templates/skeleton.hbs")),
            ("article_table", include_str!("../../templates/article_table.hbs")),
            (Template::Listing.name(), include_str!("../../templates/listing.hbs")),
            (Template::Feeds.name(), include_str!("../../templates/feeds.hbs")),
            (Template::Article.name(), include_str!("../../templates/article.hbs")),
            (Template::NotFound.name(), include_str!("../../templates/not_found.hbs")),
        ];
        for (name, source) in templates {
            registry
                .register_template_string(name, source)
                .map_err(|e| Error::Template(format!("{}: {}", name, e)))?;
        }
        Ok(Self { registry })
    }

    /// Renders `view` with `template` and wraps it in the shared layout.
    pub fn render<V: Serialize>(
        &self,
        template: Template,
        title: &str,
        view: &V,
    ) -> Result<String> {
        let body = self
            .registry
            .render(template.name(), view)
            .map_err(|e| Error::Template(format!("{}: {}", template.name(), e)))?;
        self.registry
            .render("layout", &LayoutContext { title, body: &body })
            .map_err(|e| Error::Template(format!("layout: {}", e)))
    }
}

/// View for unknown routes.
#[derive(Debug, Clone, Serialize)]
pub struct NotFoundView {
    pub heading: &'static str,
    pub notice: Notice,
}

pub fn not_found() -> NotFoundView {
    NotFoundView {
        heading: "Page Not Found",
        notice: Notice::new(
            "The page you are looking for does not exist.",
            Some(Link::home("Return to Home")),
        ),
    }
}
