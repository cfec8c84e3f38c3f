//! Page Orchestrator
//!
//! Read-path state machine for the list route. Every navigation or
//! invalidation starts a new fetch; only the latest one may settle.

use crate::api::ApiError;
use crate::models::Item;

#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    /// A fetch is in flight
    Loading,
    Ready(Vec<Item>),
    /// Terminal until the next navigation
    Failed(String),
}

impl PageState {
    pub fn from_result(result: Result<Vec<Item>, ApiError>) -> Self {
        match result {
            Ok(items) => PageState::Ready(items),
            Err(err) => PageState::Failed(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NavigationId(u64);

/// Hands out monotonically increasing navigation ids
#[derive(Debug, Default)]
pub struct NavigationTracker {
    latest: u64,
}

impl NavigationTracker {
    pub fn begin(&mut self) -> NavigationId {
        self.latest += 1;
        NavigationId(self.latest)
    }

    pub fn is_current(&self, id: NavigationId) -> bool {
        id.0 == self.latest
    }

    /// State to show for a finished read, `None` if a newer navigation started
    pub fn settle(&self, id: NavigationId, result: Result<Vec<Item>, ApiError>) -> Option<PageState> {
        if !self.is_current(id) {
            return None;
        }
        Some(PageState::from_result(result))
    }
}
