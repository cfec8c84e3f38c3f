//! Todo Page
//!
//! The list route. Each URL change or invalidation starts a fresh read;
//! responses from superseded reads are dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::components::{ErrorPanel, FilterBar, ItemList, LoadingSkeleton, NewItemForm};
use crate::context::use_app_context;
use crate::filter::filter_from_query;
use crate::orchestrator::{NavigationTracker, PageState};

#[component]
pub fn TodoPage() -> impl IntoView {
    let ctx = use_app_context();
    let query = use_query_map();
    let (page, set_page) = signal(PageState::Loading);
    let navigations = StoredValue::new(NavigationTracker::default());

    Effect::new(move |_| {
        let filter = query.with(filter_from_query);
        let trigger = ctx.reload_trigger.get();

        let mut started = None;
        navigations.update_value(|tracker| started = Some(tracker.begin()));
        let Some(nav) = started else { return };

        log::info!(
            "[PAGE] {:?} list query={:?} status={:?} (reload {})",
            nav,
            filter.query,
            filter.status.as_str(),
            trigger
        );
        set_page.set(PageState::Loading);

        let api = ctx.api();
        spawn_local(async move {
            let result = api.list(&filter).await;
            match navigations.try_with_value(|tracker| tracker.settle(nav, result)).flatten() {
                Some(state) => {
                    match &state {
                        PageState::Ready(items) => log::info!("[PAGE] {:?} loaded {} items", nav, items.len()),
                        PageState::Failed(err) => log::error!("[PAGE] {:?} failed: {}", nav, err),
                        PageState::Loading => {}
                    }
                    set_page.set(state);
                }
                None => log::debug!("[PAGE] {:?} superseded, response dropped", nav),
            }
        });
    });

    view! {
        <main class="main-content">
            <h1>"Todos"</h1>

            <NewItemForm />
            <FilterBar />

            {move || match page.get() {
                PageState::Loading => view! { <LoadingSkeleton /> }.into_any(),
                PageState::Failed(message) => view! {
                    <ErrorPanel title="Could not load todos" message=message />
                }.into_any(),
                PageState::Ready(items) => view! { <ItemList items=items /> }.into_any(),
            }}
        </main>
    }
}
