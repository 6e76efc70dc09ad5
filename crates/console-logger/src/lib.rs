//! Console Logger
//!
//! `log` backend for WASM frontends. Each record becomes one line on the
//! browser console, routed to `console.error/warn/info/debug` by level.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Format one console line: `HH:MM:SS.mmm [LEVEL target] message`
pub fn format_line(time: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} [{:<5} {}] {}", time, level, target, message)
}

/// Extract `HH:MM:SS.mmm` from an ISO-8601 timestamp, or return it unchanged
fn clock_part(iso: &str) -> &str {
    iso.split_once('T')
        .map(|(_, rest)| rest.trim_end_matches('Z'))
        .unwrap_or(iso)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let now: String = js_sys::Date::new_0().to_iso_string().into();
        let line = format_line(
            clock_part(&now),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let line = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}
