//! App Configuration
//!
//! Compile-time defaults. There is no runtime configuration surface.

use log::LevelFilter;

/// Local storage key holding the task list
pub const STORAGE_KEY: &str = "todos";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_key: &'static str,
    pub title: &'static str,
    pub placeholder: &'static str,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY,
            title: "To-Do List",
            placeholder: "Write anything and hit Enter to add",
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
