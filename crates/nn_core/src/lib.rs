pub mod api;
pub mod error;
pub mod feed;
pub mod types;
pub mod view;

pub use api::NewsApi;
pub use error::{Error, FetchError, FetchResult};
pub use types::{Article, ArticleId, ArticleList, FeedTitles};
pub use view::{Failure, FailureCopy, FailureKind, FetchOutcome, ViewState};

pub type Result<T> = std::result::Result<T, Error>;

