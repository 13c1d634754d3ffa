//! Sub-task Board Frontend Entry Point

mod models;
mod subtask_list;
mod config;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match BoardConfig::from_page() {
        Ok(config) => (config, None),
        Err(e) => (BoardConfig::default(), Some(e)),
    };

    if let Err(e) = rolling_logger::init_logger(config.log_capacity, "SubTasks") {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }
    if let Some(e) = config_error {
        rolling_logger::warn(&format!("[CONFIG] {}, using defaults", e));
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
