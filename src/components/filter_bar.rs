//! Filter Bar Component
//!
//! Search box and status dropdown. Typing is staged locally and pushed to
//! the URL once it has been quiet for `DEBOUNCE_MS`; the status dropdown
//! commits straight away. The URL replace is what makes the page refetch.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use crate::filter::{filter_from_query, FilterDraft, DEBOUNCE_MS};
use crate::models::{FilterState, StatusFilter};

#[component]
pub fn FilterBar() -> impl IntoView {
    let pathname = use_location().pathname;
    let query = use_query_map();
    let navigate = StoredValue::new(use_navigate());

    let draft = RwSignal::new(FilterDraft::new(query.with_untracked(filter_from_query)));
    // Replacing the stored timeout drops, and so cancels, the previous one
    let timer = StoredValue::new_local(None::<Timeout>);

    // Back/forward or an external link: inputs follow the URL
    Effect::new(move |_| {
        let url_filter = query.with(filter_from_query);
        draft.update(|d| d.sync_from_url(url_filter));
    });

    on_cleanup(move || {
        let _ = timer.try_update_value(|t| t.take());
    });

    let commit = move |filter: FilterState| {
        let url = format!("{}{}", pathname.get_untracked(), filter.to_search());
        log::info!("[FILTER] replace url: {}", url);
        navigate.with_value(|nav| {
            nav(
                &url,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        });
    };

    let on_query_input = move |value: String| {
        let mut ticket = None;
        draft.update(|d| ticket = Some(d.edit_query(value)));
        let Some(ticket) = ticket else { return };

        let timeout = Timeout::new(DEBOUNCE_MS, move || {
            let mut ready = None;
            draft.update(|d| ready = d.fire(ticket));
            if let Some(filter) = ready {
                commit(filter);
            }
        });
        timer.set_value(Some(timeout));
    };

    let on_status_change = move |value: String| {
        let status = StatusFilter::parse(&value);
        timer.set_value(None);
        let mut ready = None;
        draft.update(|d| ready = d.select_status(status));
        if let Some(filter) = ready {
            commit(filter);
        }
    };

    view! {
        <div class="filter-bar">
            <input
                type="search"
                class="filter-query"
                placeholder="Search tasks..."
                autocomplete="off"
                prop:value=move || draft.with(|d| d.staged().query.clone())
                on:input=move |ev| on_query_input(event_target_value(&ev))
            />
            <select
                class="filter-status"
                on:change=move |ev| on_status_change(event_target_value(&ev))
            >
                {StatusFilter::OPTIONS.iter().map(|option| {
                    let option = *option;
                    view! {
                        <option
                            value=option.as_str()
                            prop:selected=move || draft.with(|d| d.staged().status == option)
                        >
                            {option.label()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
