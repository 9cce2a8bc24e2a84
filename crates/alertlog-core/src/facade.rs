//! Process-wide active logger.
//!
//! The embedding application creates a logger at startup and installs it
//! with [`set_logger`]. The configuration helpers and the logging macros
//! read the active logger and quietly do nothing until one is installed.

use crate::time::timestamp;
use alertlog_types::{LogLevel, Logger};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

static ACTIVE: Lazy<RwLock<Option<Arc<dyn Logger>>>> = Lazy::new(|| RwLock::new(None));

/// Install `logger` as the active logger, replacing any previous one.
pub fn set_logger(logger: Arc<dyn Logger>) {
    *ACTIVE.write() = Some(logger);
}

/// Remove the active logger, returning it.
pub fn clear_logger() -> Option<Arc<dyn Logger>> {
    ACTIVE.write().take()
}

/// The active logger, if one was installed.
pub fn logger() -> Option<Arc<dyn Logger>> {
    ACTIVE.read().clone()
}

/// Configure the active logger's level.
pub fn set_log_level(level: LogLevel) {
    if let Some(logger) = logger() {
        logger.set_level(level);
    }
}

/// Configure the webhook the active logger reports errors to.
pub fn set_webhook_target(url: &str) {
    if let Some(logger) = logger() {
        logger.set_webhook_target(url);
    }
}

/// Enable or disable error forwarding on the active logger.
pub fn set_notify_on_error(enabled: bool) {
    if let Some(logger) = logger() {
        logger.set_notify_on_error(enabled);
    }
}

#[doc(hidden)]
pub fn debug(args: fmt::Arguments<'_>) {
    if let Some(logger) = logger() {
        logger.debugf(args);
    }
}

#[doc(hidden)]
pub fn info(args: fmt::Arguments<'_>) {
    if let Some(logger) = logger() {
        logger.infof(args);
    }
}

#[doc(hidden)]
pub fn error(args: fmt::Arguments<'_>) {
    if let Some(logger) = logger() {
        logger.errorf(args);
    }
}

#[doc(hidden)]
pub fn print(args: fmt::Arguments<'_>) {
    if let Some(logger) = logger() {
        logger.printf(args);
    }
}

#[doc(hidden)]
pub fn fatal(args: fmt::Arguments<'_>) -> ! {
    match logger() {
        Some(logger) => logger.fatalf(args),
        None => {
            eprintln!("{} {} {}", LogLevel::Error.prefix(), timestamp(), args);
            std::process::exit(crate::simple::FATAL_EXIT_CODE)
        }
    }
}
