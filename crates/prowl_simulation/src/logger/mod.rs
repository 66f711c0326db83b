//! Глобальный logger симуляции
//!
//! Хост (engine bridge, headless runner, тесты) ставит свой `LogPrinter`,
//! simulation системы пишут через `crate::log*` без знания о выводе.
//! Сообщения ниже `LOGGER_LEVEL` отбрасываются до форматирования timestamp.
//!
//! Уровень можно задать через env `PROWL_LOG` (`debug`/`info`/`warning`/`error`).

use once_cell::sync::Lazy;
use std::sync::Mutex;

static LOGGER: Lazy<Mutex<Option<Box<dyn LogPrinter>>>> = Lazy::new(|| Mutex::new(None));

pub static LOGGER_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Debug));

/// Poisoned mutex → берём значение как есть
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn set_logger(logger: Box<dyn LogPrinter>) {
    *lock(&LOGGER) = Some(logger);
}

pub fn set_log_level(level: LogLevel) {
    *lock(&LOGGER_LEVEL) = level;
}

pub fn set_logger_if_needed(logger: Box<dyn LogPrinter>) {
    let mut slot = lock(&LOGGER);
    if slot.is_none() {
        *slot = Some(logger);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Разбор уровня из конфига/env, регистр не важен
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" | "trace" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warning),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

pub trait LogPrinter: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
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

/// Пройдёт ли сообщение этого уровня фильтр
pub fn log_enabled(level: LogLevel) -> bool {
    level >= *lock(&LOGGER_LEVEL)
}

pub fn log_with_level(level: LogLevel, message: &str) {
    if !log_enabled(level) {
        return;
    }

    // Timestamp добавляем здесь, а не в конкретном printer
    if let Some(logger) = lock(&LOGGER).as_ref() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        logger.log(level, &format!("[{}] {}", timestamp, message));
    }
}

/// Env переменная с минимальным уровнем логов
pub const LOG_LEVEL_ENV: &str = "PROWL_LOG";

/// stdout для Debug/Info, stderr для Warning/Error
pub struct ConsoleLogger;

impl LogPrinter for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if level >= LogLevel::Warning {
            eprintln!("[{}] {}", level.as_str(), message);
        } else {
            println!("[{}] {}", level.as_str(), message);
        }
    }
}

/// Поставить ConsoleLogger (если host ещё не поставил свой) + уровень из env
pub fn init_logger() {
    set_logger_if_needed(Box::new(ConsoleLogger));

    if let Ok(value) = std::env::var(LOG_LEVEL_ENV) {
        match LogLevel::parse(&value) {
            Some(level) => set_log_level(level),
            None => log_warning(&format!("Unknown {}={:?}, keeping current level", LOG_LEVEL_ENV, value)),
        }
    }
}
