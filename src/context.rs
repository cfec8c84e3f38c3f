//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after every successful write; the list page refetches on change
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    api: StoredValue<ApiClient>,
}

impl AppContext {
    pub fn new(api: ApiClient) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            reload_trigger,
            set_reload_trigger,
            api: StoredValue::new(api),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Mark the fetched list as stale
    pub fn invalidate(&self) {
        log::debug!("[CTX] list invalidated");
        self.set_reload_trigger.update(|v| *v = v.wrapping_add(1));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
