use super::{ArticleTable, Frame, Link, ListingView, Notice, LIST_SKELETON};
use nn_core::{Article, ViewState};

pub const HEADING: &str = "PDF Dashboard (Last 24 Hours)";
pub const EMPTY_MESSAGE: &str = "No PDF articles found in the last 24 hours.";

/// Recent articles with their feed and processing date.
pub fn view(state: &ViewState<Vec<Article>>) -> ListingView {
    let frame = Frame::for_state(
        state,
        &LIST_SKELETON,
        Some(Link::home("Try Again")),
        Notice::new(EMPTY_MESSAGE, None),
    );
    let table = match state {
        ViewState::Ready(articles) => {
            Some(ArticleTable::new("Feed", articles, Article::display_feed))
        }
        _ => None,
    };
    ListingView {
        heading: HEADING.to_string(),
        frame,
        table,
    }
}
