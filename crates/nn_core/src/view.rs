use crate::error::{FetchError, FetchResult};
use crate::types::Article;

pub const ARTICLE_NOT_FOUND: &str = "Article not found.";

/// What a page currently shows. One fetch cycle moves it from `Loading` to
/// exactly one of the other variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Error(Failure),
    Empty,
    Ready(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    RequestFailed,
    Unexpected,
}

/// A failed fetch, reduced to something a page can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn is_not_found(&self) -> bool {
        self.kind == FailureKind::NotFound
    }
}

/// User-facing messages a page shows for each failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureCopy {
    pub not_found: &'static str,
    pub request_failed: &'static str,
    pub unexpected: &'static str,
}

impl FailureCopy {
    pub const ARTICLE: FailureCopy = FailureCopy {
        not_found: ARTICLE_NOT_FOUND,
        request_failed: "Failed to fetch the article.",
        unexpected: "An unexpected error occurred.",
    };

    pub const FEEDS: FailureCopy = FailureCopy::uniform("Failed to fetch feeds");

    pub const ARTICLES: FailureCopy = FailureCopy::uniform("Failed to fetch articles");

    pub const fn uniform(message: &'static str) -> Self {
        FailureCopy {
            not_found: message,
            request_failed: message,
            unexpected: message,
        }
    }

    pub fn failure(&self, err: &FetchError) -> Failure {
        let (kind, message) = match err {
            FetchError::NotFound => (FailureKind::NotFound, self.not_found),
            FetchError::RequestFailed { .. } => (FailureKind::RequestFailed, self.request_failed),
            FetchError::Unexpected(_) => (FailureKind::Unexpected, self.unexpected),
        };
        Failure {
            kind,
            message: message.to_string(),
        }
    }
}

/// Where a fetch cycle currently stands.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    InFlight,
    Settled(FetchResult<T>),
}

impl<T> From<FetchResult<T>> for FetchOutcome<T> {
    fn from(result: FetchResult<T>) -> Self {
        FetchOutcome::Settled(result)
    }
}

/// Derives the view state for a fetch outcome.
pub fn reduce<T, F>(outcome: FetchOutcome<T>, is_empty: F, copy: &FailureCopy) -> ViewState<T>
where
    F: FnOnce(&T) -> bool,
{
    match outcome {
        FetchOutcome::InFlight => ViewState::Loading,
        FetchOutcome::Settled(Err(err)) => ViewState::Error(copy.failure(&err)),
        FetchOutcome::Settled(Ok(payload)) if is_empty(&payload) => ViewState::Empty,
        FetchOutcome::Settled(Ok(payload)) => ViewState::Ready(payload),
    }
}

/// Emptiness predicates for the payloads the pages fetch.
pub trait Collection {
    fn is_empty_collection(&self) -> bool;
}

impl<T> Collection for Vec<T> {
    fn is_empty_collection(&self) -> bool {
        self.is_empty()
    }
}

/// A single article is never "empty": absence is reported as `NotFound`.
impl Collection for Article {
    fn is_empty_collection(&self) -> bool {
        false
    }
}

impl<T> ViewState<T> {
    /// Settles a cycle using the payload's own emptiness predicate.
    pub fn settle(result: FetchResult<T>, copy: &FailureCopy) -> Self
    where
        T: Collection,
    {
        reduce(result.into(), T::is_empty_collection, copy)
    }
}
