//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod filter_bar;
mod item_list;
mod item_row;
mod new_item_form;
mod notice_tray;
mod status_views;

pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
pub use notice_tray::NoticeTray;
pub use status_views::{EmptyState, ErrorPanel, LoadingSkeleton};
