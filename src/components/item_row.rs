//! Item Row Component
//!
//! A single todo: status checkbox, task text and delete control.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::Item;
use crate::store::use_ui_store;

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();

    // Only this row's controls wait on its own request
    let (busy, set_busy) = signal(false);

    let id = item.id.clone();
    let status = item.status;
    let completed = status.is_completed();

    let toggle_id = id.clone();
    let on_toggle = move |ev: web_sys::MouseEvent| {
        // Checkbox stays as rendered until the list is refetched
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        let id = toggle_id.clone();
        spawn_local(async move {
            actions::toggle_item(ctx, store, id, status).await;
            set_busy.try_set(false);
        });
    };

    let on_delete = move |_: ()| {
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        let id = id.clone();
        spawn_local(async move {
            actions::remove_item(ctx, store, id).await;
            set_busy.try_set(false);
        });
    };

    view! {
        <li class=move || {
            let mut c = String::from("item-row");
            if completed { c.push_str(" completed"); }
            if busy.get() { c.push_str(" busy"); }
            c
        }>
            <input
                type="checkbox"
                prop:checked=completed
                disabled=move || busy.get()
                aria-label=if completed { "Mark as pending" } else { "Mark as completed" }
                on:click=on_toggle
            />

            <span class="item-text">{item.task}</span>

            <DeleteConfirmButton
                prompt="Delete?"
                disabled=busy
                on_confirm=on_delete
            />
        </li>
    }
}
