//! Notice Tray Component
//!
//! Transient success/error notices from mutations. Click to dismiss early.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, store_toasts, use_ui_store, NoticeLevel};

#[component]
pub fn NoticeTray() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div class="notice-tray" role="status" aria-live="polite">
            <For
                each=move || store_toasts(&store)
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notice.level {
                        NoticeLevel::Success => "notice notice-success",
                        NoticeLevel::Error => "notice notice-error",
                    };
                    view! {
                        <div class=class on:click=move |_| store_dismiss_toast(&store, id)>
                            {toast.notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
