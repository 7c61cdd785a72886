use super::{ArticleTable, Frame, Link, ListingView, Notice, LIST_SKELETON};
use nn_core::{Article, ViewState};

pub const EMPTY_MESSAGE: &str = "No articles found for this feed.";
pub const RETURN_TO_FEEDS: &str = "Return to Feeds";

pub fn heading(feed_title: &str) -> String {
    format!("Articles from {}", feed_title)
}

/// Articles of one feed with their author. `feed_title` is already decoded.
pub fn view(feed_title: &str, state: &ViewState<Vec<Article>>) -> ListingView {
    let frame = Frame::for_state(
        state,
        &LIST_SKELETON,
        Some(Link::feeds(RETURN_TO_FEEDS)),
        Notice::new(EMPTY_MESSAGE, Some(Link::feeds(RETURN_TO_FEEDS))),
    );
    let table = match state {
        ViewState::Ready(articles) => {
            Some(ArticleTable::new("Author", articles, Article::display_author))
        }
        _ => None,
    };
    ListingView {
        heading: heading(feed_title),
        frame,
        table,
    }
}
