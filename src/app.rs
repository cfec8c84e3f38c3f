//! Todo List App
//!
//! Root component: shared context, notices and the single list route.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{ErrorPanel, NoticeTray};
use crate::config::Config;
use crate::context::AppContext;
use crate::page::TodoPage;
use crate::store::UiState;

#[component]
pub fn App() -> impl IntoView {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            log::error!("[APP] {}", err);
            return view! {
                <main class="main-content">
                    <ErrorPanel title="Configuration error" message=err.to_string() />
                </main>
            }
            .into_any();
        }
    };
    log::info!("[APP] item API at {}", config.api_base_url);

    // Provide context to all children
    provide_context(AppContext::new(ApiClient::new(&config)));
    provide_context(Store::new(UiState::default()));

    view! {
        <Router>
            <Routes fallback=|| view! {
                <main class="main-content">
                    <p>"Page not found. "<a href="/">"Back to the list"</a></p>
                </main>
            }>
                <Route path=path!("/") view=TodoPage />
            </Routes>
        </Router>
        <NoticeTray />
    }
    .into_any()
}
