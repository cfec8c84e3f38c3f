//! Todo List Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod filter;
mod models;
mod orchestrator;
mod page;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    console_logger::init_logger("TodoList", level).expect("failed to init console logger");

    mount_to_body(App);
}
