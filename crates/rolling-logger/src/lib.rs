//! Rolling Logger
//!
//! A `log` backend that keeps the most recent lines in a circular buffer
//! and forwards every line to a sink (the browser console by default).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Receives each formatted line
pub type Sink = Box<dyn Fn(Level, &str) + Send + Sync>;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("failed to install logger: {0}")]
    Install(#[from] log::SetLoggerError),
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Circular-buffer logger
pub struct RollingLogger {
    app_tag: String,
    capacity: usize,
    level: LevelFilter,
    lines: Mutex<VecDeque<String>>,
    sink: Sink,
}

impl std::fmt::Debug for RollingLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RollingLogger")
            .field("app_tag", &self.app_tag)
            .field("capacity", &self.capacity)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl RollingLogger {
    pub fn new(capacity: usize, app_tag: impl Into<String>, sink: Sink) -> Self {
        Self {
            app_tag: app_tag.into(),
            capacity: capacity.max(1),
            level: LevelFilter::Debug,
            lines: Mutex::new(VecDeque::new()),
            sink,
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Snapshot of buffered lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn format_line(&self, record: &Record) -> String {
        format!(
            "[{}] {:<5} [{}] {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            self.app_tag,
            record.args()
        )
    }

    fn push_line(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_line(record);
        (self.sink)(record.level(), &line);
        self.push_line(line);
    }

    fn flush(&self) {}
}

/// Writes a line to the browser console at the matching level
pub fn console_sink(level: Level, line: &str) {
    let value = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

/// Install the global logger with the console sink
pub fn init_logger(capacity: usize, app_tag: &str) -> Result<(), LoggerError> {
    init_with_sink(capacity, app_tag, Box::new(console_sink))
}

/// Install the global logger with a custom sink
pub fn init_with_sink(capacity: usize, app_tag: &str, sink: Sink) -> Result<(), LoggerError> {
    let mut fresh = false;
    let logger = LOGGER.get_or_init(|| {
        fresh = true;
        RollingLogger::new(capacity, app_tag, sink)
    });
    if !fresh {
        return Err(LoggerError::AlreadyInitialized);
    }
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(())
}

pub fn info(message: &str) {
    log::info!("{}", message);
}

pub fn warn(message: &str) {
    log::warn!("{}", message);
}
