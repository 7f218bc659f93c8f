use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;
use colored::Colorize;

// Debug messages are suppressed unless verbose mode was requested.
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

// Log levels
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Success,
}

impl LogLevel {
    fn name(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Success => "SUCCESS",
        }
    }

    fn colored_name(&self) -> colored::ColoredString {
        match self {
            LogLevel::Debug => self.name().dimmed(),
            LogLevel::Info => self.name().cyan(),
            LogLevel::Warning => self.name().yellow(),
            LogLevel::Error => self.name().red(),
            LogLevel::Success => self.name().green(),
        }
    }
}

// Log a message with timestamp and level. Messages go to stderr so that
// stdout stays reserved for validation output.
pub fn log(level: LogLevel, message: &str) {
    if matches!(level, LogLevel::Debug) && !is_verbose() {
        return;
    }

    let timestamp = Local::now().format("%H:%M:%S").to_string();
    eprintln!("[{}] {} {}", timestamp, level.colored_name(), message);
}

// Convenience functions for different log levels
pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn warning(message: &str) {
    log(LogLevel::Warning, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}

pub fn success(message: &str) {
    log(LogLevel::Success, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flag_round_trips() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }

    #[test]
    fn level_names_are_stable() {
        assert_eq!(LogLevel::Warning.name(), "WARN");
        assert_eq!(LogLevel::Success.name(), "SUCCESS");
    }
}
