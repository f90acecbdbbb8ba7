//! Calculator Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod pages;
mod query;
mod store;
mod validation;

use std::fmt::Display;

use app::App;
use leptos::prelude::*;

/// Install the console logger; a failed install is reported through `warn`
fn init_logging<E: Display>(
    install: impl FnOnce(log::Level) -> Result<(), E>,
    level: log::Level,
    warn: impl FnOnce(&str),
) {
    if let Err(e) = install(level) {
        warn(&format!("Console logger not installed: {}", e));
    }
}

fn main() {
    console_error_panic_hook::set_once();
    init_logging(console_log::init_with_level, config::log_level(), |text| {
        web_sys::console::warn_1(&text.into())
    });
    log::info!("Calculator UI starting, API at {}", config::api_base_url());
    mount_to_body(App);
}
