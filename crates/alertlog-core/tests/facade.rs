//! Process-wide logger registration.

mod common;

use alertlog_core::{facade, LogLevel, Logger, LoggerConfig};
use common::test_logger;
use parking_lot::{const_mutex, Mutex};
use std::sync::Arc;
use std::time::Duration;

/// Tests in this binary share the active logger.
static ACTIVE_LOCK: Mutex<()> = const_mutex(());

const HOOK: &str = "https://hooks.example.com/services/T/B/X";

#[test]
fn test_helpers_delegate_to_active_logger() {
    let _guard = ACTIVE_LOCK.lock();
    let (logger, buffer, rx) = test_logger(LoggerConfig::default());
    facade::set_logger(Arc::new(logger.clone()));

    facade::set_log_level(LogLevel::Debug);
    assert_eq!(logger.level(), LogLevel::Debug);

    alertlog_core::debug!("cache miss for {}", "users");
    alertlog_core::info!("ready");
    assert_eq!(buffer.lines().len(), 2);
    assert!(buffer.lines()[0].starts_with("[DBG]"));

    facade::set_webhook_target(HOOK);
    alertlog_core::error!("no flag yet");
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());

    facade::set_notify_on_error(true);
    alertlog_core::error!("with flag");
    let (url, alert) = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(url, HOOK);
    assert_eq!(alert.text, "`with flag`");

    facade::clear_logger();
}

#[test]
fn test_install_replaces_previous_logger() {
    let _guard = ACTIVE_LOCK.lock();
    let (first, first_out, _) = test_logger(LoggerConfig::default());
    let (second, second_out, _) = test_logger(LoggerConfig::default());

    facade::set_logger(Arc::new(first.clone()));
    facade::set_log_level(LogLevel::Error);
    facade::set_logger(Arc::new(second.clone()));
    alertlog_core::info!("goes to second");

    // No state carries over from the replaced logger.
    assert_eq!(first.level(), LogLevel::Error);
    assert_eq!(second.level(), LogLevel::Info);
    assert!(first_out.lines().is_empty());
    assert_eq!(second_out.lines().len(), 1);

    facade::clear_logger();
}

#[test]
fn test_fatal_macro_uses_active_logger() {
    let _guard = ACTIVE_LOCK.lock();
    let config = LoggerConfig {
        webhook_url: Some(HOOK.to_string()),
        notify_on_error: true,
        ..Default::default()
    };
    let (logger, buffer, rx) = test_logger(config);
    facade::set_logger(Arc::new(logger));

    let result = std::panic::catch_unwind(|| {
        alertlog_core::fatal!("shutting down: {}", "oom");
    });
    assert!(result.is_err());

    let (_, alert) = rx.try_recv().unwrap();
    assert_eq!(alert.title, "Fatal");
    assert!(buffer.lines()[0].starts_with("[ERR]"));

    facade::clear_logger();
}
