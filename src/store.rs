//! Notification Store
//!
//! Transient notices raised by mutations, kept in a reactive store.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;

/// How long a notice stays on screen
pub const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    pub toasts: Vec<Toast>,
    pub next_toast_id: u64,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a notice and return its toast id
pub fn store_push_notice(store: &UiStore, notice: Notice) -> u64 {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id + 1);
    store.toasts().write().push(Toast { id, notice });
    id
}

/// Remove a toast by id
pub fn store_dismiss_toast(store: &UiStore, id: u64) {
    store.toasts().write().retain(|toast| toast.id != id);
}

/// Current toasts, oldest first
pub fn store_toasts(store: &UiStore) -> Vec<Toast> {
    store.toasts().get()
}

/// Show a notice and dismiss it after `NOTICE_TTL_MS`
pub fn store_notify(store: &UiStore, notice: Notice) {
    let id = store_push_notice(store, notice);
    let store = *store;
    Timeout::new(NOTICE_TTL_MS, move || store_dismiss_toast(&store, id)).forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let owner = Owner::new();
        owner.set();

        let store = Store::new(UiState::default());
        let first = store_push_notice(&store, Notice::success("Item added"));
        let second = store_push_notice(&store, Notice::error("task required"));
        assert_ne!(first, second);
        assert_eq!(store.toasts().get_untracked().len(), 2);

        store_dismiss_toast(&store, first);
        let remaining = store.toasts().get_untracked();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].notice, Notice::error("task required"));
    }
}
