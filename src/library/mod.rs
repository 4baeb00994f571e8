// SPDX-License-Identifier: MPL-2.0
//! Cached list of the user's stored content.
//!
//! The dashboard renders from this cache. It is refreshed on startup, on
//! demand, and after every successful creation. Only one refresh runs at a
//! time; a request made while one is running is queued and issued once the
//! running one lands, since that response may predate the change.

use crate::api::{ApiError, ContentItem};

/// Content list plus the state of its last refresh.
#[derive(Debug, Clone, Default)]
pub struct Library {
    items: Vec<ContentItem>,
    loading: bool,
    /// A refresh was requested while one was in flight.
    queued: bool,
    last_error: Option<ApiError>,
}

impl Library {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a refresh as started.
    ///
    /// Returns `false` when one is already running, in which case the caller
    /// must not issue another request. The refresh is queued instead and
    /// reported by [`Library::take_queued`] after the running one lands.
    pub fn begin_refresh(&mut self) -> bool {
        if self.loading {
            tracing::debug!("library refresh already in flight, queueing another");
            self.queued = true;
            return false;
        }
        self.loading = true;
        true
    }

    /// Stores the outcome of a refresh.
    ///
    /// On failure the previous items are kept so the dashboard does not go
    /// blank on a transient error.
    pub fn apply(&mut self, result: Result<Vec<ContentItem>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "library refreshed");
                self.items = items;
                self.last_error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "library refresh failed");
                self.last_error = Some(err);
            }
        }
    }

    /// Whether a refresh is waiting for the running one to land.
    #[must_use]
    pub fn has_queued_refresh(&self) -> bool {
        self.queued
    }

    /// Clears the queued refresh, returning whether one was waiting.
    ///
    /// Always `false` while a refresh is running.
    pub fn take_queued(&mut self) -> bool {
        if self.loading {
            return false;
        }
        std::mem::take(&mut self.queued)
    }

    #[must_use]
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(title: &str) -> ContentItem {
        serde_json::from_value(json!({
            "_id": title,
            "title": title,
            "type": "link",
            "link": "https://example.com",
            "tags": ["a"]
        }))
        .expect("valid item")
    }

    #[test]
    fn only_one_refresh_at_a_time() {
        let mut library = Library::new();
        assert!(library.begin_refresh());
        assert!(!library.begin_refresh());
        assert!(library.is_loading());

        library.apply(Ok(vec![]));
        assert!(!library.is_loading());
        assert!(library.begin_refresh());
    }

    #[test]
    fn refresh_requested_while_loading_is_queued() {
        let mut library = Library::new();
        assert!(library.begin_refresh());
        assert!(!library.take_queued());

        assert!(!library.begin_refresh());
        assert!(library.has_queued_refresh());
        // Not released until the running refresh lands
        assert!(!library.take_queued());

        library.apply(Ok(vec![]));
        assert!(library.take_queued());
        assert!(!library.has_queued_refresh());
        assert!(!library.take_queued());
    }

    #[test]
    fn successful_refresh_replaces_items_and_clears_error() {
        let mut library = Library::new();
        library.begin_refresh();
        library.apply(Err(ApiError::Transport("offline".into())));
        assert!(library.last_error().is_some());

        library.begin_refresh();
        library.apply(Ok(vec![item("one"), item("two")]));

        assert_eq!(library.items().len(), 2);
        assert!(library.last_error().is_none());
    }

    #[test]
    fn failed_refresh_keeps_previous_items() {
        let mut library = Library::new();
        library.begin_refresh();
        library.apply(Ok(vec![item("kept")]));

        library.begin_refresh();
        library.apply(Err(ApiError::Rejected {
            status: 401,
            message: Some("Unauthorized".into()),
        }));

        assert_eq!(library.items().len(), 1);
        assert_eq!(library.items()[0].title, "kept");
        assert!(!library.is_loading());
    }
}
