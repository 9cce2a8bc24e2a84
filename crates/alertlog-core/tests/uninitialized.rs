//! Facade behaviour before any logger is installed.
//!
//! Kept in its own test binary so no other test can install a logger first.

use alertlog_core::{facade, LogLevel};

#[test]
fn test_helpers_are_noops_without_logger() {
    assert!(facade::logger().is_none());

    facade::set_log_level(LogLevel::Debug);
    facade::set_webhook_target("https://hooks.example.com/x");
    facade::set_notify_on_error(true);
    facade::set_notify_on_error(true);

    alertlog_core::debug!("dropped {}", 1);
    alertlog_core::info!("dropped");
    alertlog_core::error!("dropped");
    alertlog_core::log_print!("dropped");

    assert!(facade::logger().is_none());
    assert!(facade::clear_logger().is_none());
}
