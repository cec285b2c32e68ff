//! Portfolio Frontend Entry Point

mod config;
mod domain;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // The returned ring handle is not needed; records are read from the console
    if let Err(err) = rolling_logger::init(config::LOG_CAPACITY, config::LOG_LEVEL) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", err).into());
    }
    log::info!("[APP] mounting");
    mount_to_body(App);
}
