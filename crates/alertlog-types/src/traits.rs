//! Core trait definitions for alertlog abstractions.

use async_trait::async_trait;
use std::fmt;
use crate::alert::Alert;
use crate::enums::LogLevel;
use crate::errors::Result;

/// Common interface for loggers.
///
/// Any implementation can be installed as the process-wide logger. The
/// `*f` variants take pre-formatted arguments (`format_args!`); the plain
/// variants forward to them by default.
pub trait Logger: Send + Sync {
    /// Emit at debug level.
    fn debugf(&self, args: fmt::Arguments<'_>);

    /// Emit at info level.
    fn infof(&self, args: fmt::Arguments<'_>);

    /// Emit at error level. Errors are never filtered and may be forwarded
    /// to the configured webhook.
    fn errorf(&self, args: fmt::Arguments<'_>);

    /// Emit at error level, then terminate the process with status 1.
    fn fatalf(&self, args: fmt::Arguments<'_>) -> !;

    /// Emit regardless of the configured level.
    fn printf(&self, args: fmt::Arguments<'_>);

    /// Emit `msg` at debug level.
    fn debug(&self, msg: &str) {
        self.debugf(format_args!("{}", msg))
    }

    /// Emit `msg` at info level.
    fn info(&self, msg: &str) {
        self.infof(format_args!("{}", msg))
    }

    /// Emit `msg` at error level.
    fn error(&self, msg: &str) {
        self.errorf(format_args!("{}", msg))
    }

    /// Emit `msg` at error level, then terminate the process with status 1.
    fn fatal(&self, msg: &str) -> ! {
        self.fatalf(format_args!("{}", msg))
    }

    /// Emit `msg` regardless of the configured level.
    fn print(&self, msg: &str) {
        self.printf(format_args!("{}", msg))
    }

    /// Set the log level.
    fn set_level(&self, level: LogLevel);

    /// Get the current log level.
    fn level(&self) -> LogLevel;

    /// Configure the webhook used to report errors. Empty disables it.
    fn set_webhook_target(&self, url: &str);

    /// Enable or disable forwarding of error and fatal lines to the webhook.
    fn set_notify_on_error(&self, enabled: bool);

    /// Send an ad-hoc message to `webhook_url`, independent of the level,
    /// the configured target and the enable flag.
    fn notify(&self, webhook_url: &str, title: &str, text: &str);
}

/// Delivery seam for chat-ops notifications.
///
/// Implementers post an [`Alert`] to a webhook endpoint.
#[async_trait]
pub trait AlertSender: Send + Sync {
    /// Deliver `alert` to `webhook_url`.
    async fn send(&self, webhook_url: &str, alert: &Alert) -> Result<()>;
}
