//! Item List Component
//!
//! Renders a resolved item array. Fresh data arrives through the page after
//! an invalidation; the list never fetches on its own.

use leptos::prelude::*;

use crate::components::{EmptyState, ItemRow};
use crate::models::Item;

/// What the list area shows for a resolved array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    /// Placeholder only, no list container
    Empty,
    Rows(usize),
}

impl ListView {
    pub fn of(items: &[Item]) -> Self {
        match items.len() {
            0 => ListView::Empty,
            n => ListView::Rows(n),
        }
    }

    fn summary(self) -> String {
        match self {
            ListView::Empty => String::new(),
            ListView::Rows(1) => "1 item".to_string(),
            ListView::Rows(n) => format!("{} items", n),
        }
    }
}

#[component]
pub fn ItemList(items: Vec<Item>) -> impl IntoView {
    let layout = ListView::of(&items);
    if layout == ListView::Empty {
        return view! { <EmptyState /> }.into_any();
    }

    view! {
        <ul class="item-list">
            <For
                each=move || items.clone()
                key=|item| (item.id.clone(), item.status, item.task.clone())
                children=move |item| view! { <ItemRow item=item /> }
            />
        </ul>
        <p class="item-count">{layout.summary()}</p>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemStatus;

    fn item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            task: format!("task {}", id),
            status: ItemStatus::Pending,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_array_shows_placeholder_only() {
        assert_eq!(ListView::of(&[]), ListView::Empty);
    }

    #[test]
    fn test_rows_and_summary() {
        let two = ListView::of(&[item("1"), item("2")]);
        assert_eq!(two, ListView::Rows(2));
        assert_eq!(two.summary(), "2 items");
        assert_eq!(ListView::of(&[item("1")]).summary(), "1 item");
    }
}
