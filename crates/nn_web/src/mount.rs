//! One fetch cycle for client-driven pages: the view starts in `Loading`,
//! a single task performs the fetch, and its completion publishes exactly
//! one transition.

use nn_core::view::Collection;
use nn_core::{FailureCopy, FailureKind, Failure, FetchResult, ViewState};
use std::future::Future;
use tokio::sync::watch;

pub struct Mounted<T> {
    rx: watch::Receiver<ViewState<T>>,
    copy: FailureCopy,
}

/// Spawns the fetch and returns the view in its `Loading` state.
pub fn mount<T, F>(fetch: F, copy: FailureCopy) -> Mounted<T>
where
    T: Collection + Send + Sync + 'static,
    F: Future<Output = FetchResult<T>> + Send + 'static,
{
    let (tx, rx) = watch::channel(ViewState::Loading);
    tokio::spawn(async move {
        let next = ViewState::settle(fetch.await, &copy);
        if tx.send(next).is_err() {
            tracing::debug!("View was dropped before its fetch resolved; discarding result");
        }
    });
    Mounted { rx, copy }
}

impl<T: Clone> Mounted<T> {
    pub fn current(&self) -> ViewState<T> {
        self.rx.borrow().clone()
    }

    /// Waits for the single transition out of `Loading`.
    pub async fn settled(mut self) -> ViewState<T> {
        while matches!(*self.rx.borrow_and_update(), ViewState::Loading) {
            if self.rx.changed().await.is_err() {
                let state = self.rx.borrow().clone();
                if matches!(state, ViewState::Loading) {
                    return ViewState::Error(Failure {
                        kind: FailureKind::Unexpected,
                        message: self.copy.unexpected.to_string(),
                    });
                }
                return state;
            }
        }
        self.current()
    }
}
