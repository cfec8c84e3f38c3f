//! Status Views
//!
//! Placeholders shown instead of the list: loading, failure and empty.

use leptos::prelude::*;

const SKELETON_ROWS: usize = 3;

/// Shown while the list read is in flight
#[component]
pub fn LoadingSkeleton() -> impl IntoView {
    view! {
        <ul class="item-list skeleton" aria-busy="true" aria-label="Loading todos">
            {(0..SKELETON_ROWS).map(|_| view! {
                <li class="item-row skeleton-row">
                    <span class="skeleton-box"></span>
                    <span class="skeleton-line"></span>
                </li>
            }).collect_view()}
        </ul>
    }
}

/// Terminal error; stays until the next navigation
#[component]
pub fn ErrorPanel(#[prop(into)] title: String, #[prop(into)] message: String) -> impl IntoView {
    let log_lines = console_logger::recent_lines();

    view! {
        <section class="error-panel" role="alert">
            <h2>{title}</h2>
            <p class="error-message">{message}</p>
            {(!log_lines.is_empty()).then(|| view! {
                <details class="error-log">
                    <summary>"Details"</summary>
                    <pre>{log_lines.join("\n")}</pre>
                </details>
            })}
        </section>
    }
}

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state-title">"No todos found"</p>
            <p class="empty-state-hint">"Add a task above or change the filters."</p>
        </div>
    }
}
