//! Pluggable logger
//!
//! Core не знает куда пишет host (консоль, engine console, файл) —
//! printer подменяется через trait. Timestamp добавляется здесь, а не
//! в printer'е, чтобы формат был единым для всех backends.

use once_cell::sync::Lazy;
use std::sync::Mutex;

// Глобальный printer (потокобезопасный; None пока host не зарегистрировал)
static PRINTER: Lazy<Mutex<Option<Box<dyn LogPrinter>>>> = Lazy::new(|| Mutex::new(None));

// Минимальный уровень: сообщения ниже дропаются ещё до printer'а
static MIN_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Debug));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Приёмник лог-сообщений (host-side backend)
pub trait LogPrinter: Send + Sync {
    fn print(&self, level: LogLevel, message: &str);
}

pub fn set_logger(printer: Box<dyn LogPrinter>) {
    *PRINTER.lock().unwrap() = Some(printer);
}

/// Регистрирует printer только если его ещё нет (host имеет приоритет)
pub fn set_logger_if_needed(printer: Box<dyn LogPrinter>) {
    let mut slot = PRINTER.lock().unwrap();
    if slot.is_none() {
        *slot = Some(printer);
    }
}

pub fn set_log_level(level: LogLevel) {
    *MIN_LEVEL.lock().unwrap() = level;
}

pub fn log(message: &str) {
    log_with_level(LogLevel::Debug, message);
}

pub fn log_info(message: &str) {
    log_with_level(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log_with_level(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log_with_level(LogLevel::Error, message);
}

pub fn log_with_level(level: LogLevel, message: &str) {
    if level < *MIN_LEVEL.lock().unwrap() {
        return;
    }
    if let Some(printer) = PRINTER.lock().unwrap().as_ref() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        printer.print(level, &format!("[{}] {}", timestamp, message));
    }
}

/// Stdout printer (headless прогоны и тесты)
pub struct ConsoleLogger;

impl LogPrinter for ConsoleLogger {
    fn print(&self, level: LogLevel, message: &str) {
        println!("[{}] {}", level.as_str(), message);
    }
}

pub fn init_logger() {
    set_logger_if_needed(Box::new(ConsoleLogger));
}
