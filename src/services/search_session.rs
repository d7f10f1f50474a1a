use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{SearchResult, SearchState},
};

pub const ABANDONED_SEARCH_MESSAGE: &str = "The search was cancelled before it finished.";

/// Tracks the one search that may be active at a time.
#[derive(Debug, Default)]
pub struct SearchSession {
    state: RwLock<SearchState>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears any previous result or error and marks a search as loading.
    /// Fails if another search is still in flight.
    ///
    /// The returned guard must be settled with [`ActiveSearch::complete`] or
    /// [`ActiveSearch::fail`]; dropping it first moves the session to an
    /// error state so the next search is not rejected.
    pub async fn begin(
        self: &Arc<Self>,
        query: &str,
        deep_search: bool,
    ) -> AppResult<ActiveSearch> {
        let mut state = self.state.write().await;
        if state.is_loading() {
            return Err(AppError::Conflict(
                "A search is already in progress".to_string(),
            ));
        }
        *state = SearchState::Loading {
            query: query.to_string(),
            deep_search,
        };
        Ok(ActiveSearch {
            session: Arc::clone(self),
            settled: false,
        })
    }

    pub async fn reset(&self) {
        *self.state.write().await = SearchState::Idle;
    }

    pub async fn snapshot(&self) -> SearchState {
        self.state.read().await.clone()
    }
}

/// Handle on the loading search returned by [`SearchSession::begin`].
#[derive(Debug)]
pub struct ActiveSearch {
    session: Arc<SearchSession>,
    settled: bool,
}

impl ActiveSearch {
    pub async fn complete(mut self, result: SearchResult) {
        self.settle(SearchState::Ready {
            result: Box::new(result),
        })
        .await;
    }

    pub async fn fail(mut self, message: impl Into<String>) {
        self.settle(SearchState::Error {
            message: message.into(),
        })
        .await;
    }

    async fn settle(&mut self, next: SearchState) {
        let mut state = self.session.state.write().await;
        *state = next;
        self.settled = true;
    }
}

impl Drop for ActiveSearch {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        log::warn!("Search dropped before finishing, clearing loading state");

        let abandoned = SearchState::Error {
            message: ABANDONED_SEARCH_MESSAGE.to_string(),
        };
        match self.session.state.try_write() {
            Ok(mut state) => *state = abandoned,
            // Lock is busy; finish the transition on the runtime instead.
            Err(_) => match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    let session = Arc::clone(&self.session);
                    handle.spawn(async move {
                        *session.state.write().await = abandoned;
                    });
                }
                Err(_) => log::error!("No runtime to clear abandoned search state"),
            },
        }
    }
}
