use super::{Frame, Link, Notice, LIST_SKELETON};
use nn_core::feed::feed_href;
use nn_core::ViewState;
use serde::Serialize;

pub const HEADING: &str = "Available Feeds";
pub const EMPTY_MESSAGE: &str = "No feeds available.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedsView {
    pub heading: &'static str,
    #[serde(flatten)]
    pub frame: Frame,
    pub feeds: Vec<Link>,
}

/// Every feed title becomes a link to its article table.
pub fn view(state: &ViewState<Vec<String>>) -> FeedsView {
    let frame = Frame::for_state(
        state,
        &LIST_SKELETON,
        Some(Link::home("Return to Home")),
        Notice::new(EMPTY_MESSAGE, None),
    );
    let feeds = match state {
        ViewState::Ready(titles) => titles
            .iter()
            .map(|title| Link::new(feed_href(title), title.as_str()))
            .collect(),
        _ => Vec::new(),
    };
    FeedsView {
        heading: HEADING,
        frame,
        feeds,
    }
}
