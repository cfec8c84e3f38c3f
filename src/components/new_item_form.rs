//! New Item Form Component
//!
//! Form for creating new todos.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::store::use_ui_store;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();

    let (new_task, set_new_task) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let task = new_task.get_untracked().trim().to_string();
        if task.is_empty() || saving.get_untracked() {
            return;
        }
        set_saving.set(true);

        spawn_local(async move {
            if actions::create_item(ctx, store, task).await {
                set_new_task.set(String::new());
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder="Add new todo..."
                    prop:value=move || new_task.get()
                    on:input=move |ev| set_new_task.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Adding..." } else { "Add" }}
                </button>
            </div>
        </form>
    }
}
