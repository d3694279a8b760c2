#![deny(missing_docs)]
//! Shared logging utilities for the chatbot client workspace.
//!
//! This crate provides the `chatbot_*` logging macros used across the codebase,
//! the application logger setup and a minimal test initializer.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! chatbot_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! chatbot_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! chatbot_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! chatbot_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! chatbot_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    /// Write to a log file.
    File,
    /// Write to terminal (stdout).
    #[default]
    Terminal,
    /// Write to both file and terminal.
    Both,
}

/// Initialize the global logger with the specified destination.
///
/// `log_file` is only used for `File` and `Both`. When the file cannot be
/// created the file sink is dropped and the terminal is used instead.
///
/// Returns the destination actually in use, which differs from `destination`
/// after such a fallback, or `None` if a logger was already installed.
pub fn initialize(
    destination: LogDestination,
    level: LevelFilter,
    log_file: Option<&Path>,
) -> Option<LogDestination> {
    let (loggers, active) = build_loggers(destination, level, log_file);
    CombinedLogger::init(loggers).ok().map(|()| active)
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn terminal_logger(level: LevelFilter, config: Config) -> Box<dyn SharedLogger> {
    TermLogger::new(level, config, TerminalMode::Mixed, ColorChoice::Auto)
}

fn build_loggers(
    destination: LogDestination,
    level: LevelFilter,
    log_file: Option<&Path>,
) -> (Vec<Box<dyn SharedLogger>>, LogDestination) {
    let config = build_config();
    match destination {
        LogDestination::Terminal => (
            vec![terminal_logger(level, config)],
            LogDestination::Terminal,
        ),
        LogDestination::File => match create_file_logger(level, config.clone(), log_file) {
            Some(file_logger) => (
                vec![file_logger as Box<dyn SharedLogger>],
                LogDestination::File,
            ),
            None => (
                vec![terminal_logger(level, config)],
                LogDestination::Terminal,
            ),
        },
        LogDestination::Both => {
            let mut loggers = vec![terminal_logger(level, config.clone())];
            match create_file_logger(level, config, log_file) {
                Some(file_logger) => {
                    loggers.push(file_logger);
                    (loggers, LogDestination::Both)
                }
                None => (loggers, LogDestination::Terminal),
            }
        }
    }
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    log_file: Option<&Path>,
) -> Option<Box<WriteLogger<File>>> {
    let log_path = log_file.unwrap_or_else(|| Path::new("./chatbot_client.log"));
    match File::create(log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
