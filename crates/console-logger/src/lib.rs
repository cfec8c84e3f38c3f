//! Console Logger
//!
//! `log` backend for the browser. Every record is written to the devtools
//! console and the most recent lines are kept in a bounded buffer so the UI
//! can show them next to an error.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of lines kept by the global logger
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Bounded line buffer; the oldest line is dropped once full
#[derive(Debug)]
pub struct LineBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LineBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct ConsoleLogger {
    app_name: &'static str,
    level: LevelFilter,
    buffer: Mutex<LineBuffer>,
}

impl ConsoleLogger {
    pub fn new(app_name: &'static str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name,
            level,
            buffer: Mutex::new(LineBuffer::new(capacity)),
        }
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.lines().map(str::to_owned).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            self.app_name,
            now_millis(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        write_console(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

/// Install the global logger. Fails if another logger was installed first.
pub fn init_logger(app_name: &'static str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(app_name, level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Buffered lines of the global logger (empty before `init_logger`)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent_lines).unwrap_or_default()
}

/// `HH:MM:SS.mmm LEVEL app target: message`, time of day in UTC
pub fn format_line(app_name: &str, millis: f64, level: Level, target: &str, message: &str) -> String {
    let time = DateTime::<Utc>::from_timestamp_millis(millis.max(0.0) as i64)
        .map(|t| t.format("%H:%M:%S%.3f").to_string())
        .unwrap_or_else(|| "--:--:--.---".to_string());
    format!("{} {:<5} {} {}: {}", time, level, app_name, target, message)
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(level: Level, line: &str) {
    if level <= Level::Warn {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_drops_oldest() {
        let mut buffer = LineBuffer::new(2);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        buffer.push("c".to_string());

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.lines().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let mut buffer = LineBuffer::new(0);
        assert!(buffer.is_empty());
        buffer.push("only".to_string());
        buffer.push("latest".to_string());
        assert_eq!(buffer.lines().collect::<Vec<_>>(), vec!["latest"]);
    }

    #[test]
    fn test_format_line() {
        // 01:02:03.004 UTC on 1970-01-01
        let millis = ((3600 + 2 * 60 + 3) * 1000 + 4) as f64;
        let line = format_line("Todo", millis, Level::Info, "page", "loaded 3 items");
        assert_eq!(line, "01:02:03.004 INFO  Todo page: loaded 3 items");
    }

    #[test]
    fn test_format_line_keeps_time_of_day_only() {
        // 2024-01-02T23:59:58.250Z
        let millis = 1_704_239_998_250_f64;
        let line = format_line("Todo", millis, Level::Warn, "api", "slow");
        assert_eq!(line, "23:59:58.250 WARN  Todo api: slow");
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = ConsoleLogger::new("Todo", LevelFilter::Warn, 10);
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("test")
                .args(format_args!("ignored"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .target("test")
                .args(format_args!("kept"))
                .build(),
        );

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("test: kept"));
    }
}
