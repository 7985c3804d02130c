//! SWAPI Cards Frontend Entry Point

mod api;
mod app;
mod cards;
mod components;
mod config;
mod context;
mod error;
mod favorites;
mod models;
mod store;
mod sync;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
