//! Plant Nursery Storefront Entry Point

mod api;
mod app;
mod cart;
mod catalog;
mod components;
mod config;
mod context;
mod display;
mod loading;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
