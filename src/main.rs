//! Todo List Frontend Entry Point

mod models;
mod payload;
mod store;
mod config;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    // Only fails if a logger is already installed
    let _ = console_logger::init(config.log_level);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
