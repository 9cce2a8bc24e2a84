//! Logger backed by `tracing`.
//!
//! For applications that already run a `tracing` subscriber: lines are
//! emitted as `tracing` events instead of being written to stdout, with the
//! same filtering and webhook rules as [`SimpleLogger`](crate::SimpleLogger).

use crate::notifier::{FailureReporter, Notifier};
use crate::simple::{ExitHandler, FATAL_EXIT_CODE};
use alertlog_types::{AlertSender, AlertlogError, LogLevel, Logger, LoggerConfig, Result};
use alertlog_webhook::SlackWebhook;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber whose default filter matches `level`.
///
/// `RUST_LOG` takes precedence when set.
pub fn init_subscriber(level: LogLevel) -> Result<()> {
    let default = match level {
        LogLevel::Error => "error",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| AlertlogError::Other(format!("Failed to install subscriber: {}", e)))
}

/// Logger emitting `tracing` events.
#[derive(Clone)]
pub struct TracingLogger {
    level: Arc<AtomicU8>,
    notifier: Arc<Notifier>,
    exit: ExitHandler,
}

impl TracingLogger {
    /// Create a logger from configuration, using a Slack webhook client.
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        let sender = SlackWebhook::with_timeout(config.request_timeout())?;
        Ok(Self::with_sender(config, Arc::new(sender)))
    }

    /// Create a logger delivering notifications through `sender`.
    pub fn with_sender(config: &LoggerConfig, sender: Arc<dyn AlertSender>) -> Self {
        let notifier = Notifier::new(sender)
            .with_channel(config.channel.clone())
            .with_fatal_timeout(config.fatal_timeout());
        if let Some(url) = &config.webhook_url {
            notifier.set_target(url);
        }
        notifier.set_enabled(config.notify_on_error);

        Self {
            level: Arc::new(AtomicU8::new(config.level.as_u8())),
            notifier: Arc::new(notifier),
            exit: std::process::exit,
        }
    }

    /// Replace the process exit performed after a fatal event.
    pub fn with_exit_handler(mut self, exit: ExitHandler) -> Self {
        self.exit = exit;
        self
    }

    fn enabled(&self, level: LogLevel) -> bool {
        self.level().enables(level)
    }
}

fn report_failure() -> FailureReporter {
    Arc::new(|e| tracing::error!(error = %e, "Found an error sending notification to Slack"))
}

impl Logger for TracingLogger {
    fn debugf(&self, args: fmt::Arguments<'_>) {
        if self.enabled(LogLevel::Debug) {
            tracing::debug!("{}", args);
        }
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        if self.enabled(LogLevel::Info) {
            tracing::info!("{}", args);
        }
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        let message = args.to_string();
        tracing::error!("{}", message);
        self.notifier.forward_error(&message, report_failure);
    }

    fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        tracing::error!(fatal = true, "{}", message);
        if let Err(e) = self.notifier.forward_fatal(&message) {
            tracing::error!(error = %e, "Found an error sending notification to Slack");
        }
        (self.exit)(FATAL_EXIT_CODE)
    }

    fn printf(&self, args: fmt::Arguments<'_>) {
        tracing::info!("{}", args);
    }

    fn set_level(&self, level: LogLevel) {
        self.level.store(level.as_u8(), Ordering::Relaxed);
    }

    fn level(&self) -> LogLevel {
        LogLevel::try_from(self.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    fn set_webhook_target(&self, url: &str) {
        self.notifier.set_target(url);
    }

    fn set_notify_on_error(&self, enabled: bool) {
        self.notifier.set_enabled(enabled);
    }

    fn notify(&self, webhook_url: &str, title: &str, text: &str) {
        let logger = self.clone();
        let report: FailureReporter = Arc::new(move |e| {
            logger.errorf(format_args!(
                "Found an error sending notification to Slack: {}",
                e
            ))
        });
        self.notifier.send_adhoc(webhook_url, title, text, report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alertlog_types::{Alert, AlertColor};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::mpsc;
    use std::time::Duration;

    struct Recorder(Mutex<mpsc::Sender<Alert>>);

    #[async_trait]
    impl AlertSender for Recorder {
        async fn send(&self, _webhook_url: &str, alert: &Alert) -> Result<()> {
            let _ = self.0.lock().send(alert.clone());
            Ok(())
        }
    }

    fn logger(config: LoggerConfig) -> (TracingLogger, mpsc::Receiver<Alert>) {
        let (tx, rx) = mpsc::channel();
        let sender = Arc::new(Recorder(Mutex::new(tx)));
        (TracingLogger::with_sender(&config, sender), rx)
    }

    #[test]
    fn test_level_roundtrip() {
        let (logger, _rx) = logger(LoggerConfig::default());
        assert_eq!(logger.level(), LogLevel::Info);
        logger.set_level(LogLevel::Debug);
        assert_eq!(logger.level(), LogLevel::Debug);
        assert!(logger.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_errors_forwarded_when_configured() {
        let _ = init_subscriber(LogLevel::Debug);
        let config = LoggerConfig {
            webhook_url: Some("https://hooks.example.com/x".to_string()),
            notify_on_error: true,
            ..Default::default()
        };
        let (logger, rx) = logger(config);

        logger.info("not forwarded");
        logger.error("forwarded");

        let alert = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(alert.title, "Error");
        assert_eq!(alert.color, AlertColor::Warning);
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    fn panic_exit(code: i32) -> ! {
        panic!("exit status {}", code)
    }

    #[test]
    fn test_fatal_notifies_then_exits() {
        let config = LoggerConfig {
            webhook_url: Some("https://hooks.example.com/x".to_string()),
            notify_on_error: true,
            ..Default::default()
        };
        let (logger, rx) = logger(config);
        let logger = logger.with_exit_handler(panic_exit);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.fatalf(format_args!("out of {}", "memory"))
        }));

        let panic = result.unwrap_err();
        assert_eq!(panic.downcast_ref::<String>().unwrap(), "exit status 1");

        let alert = rx.try_recv().unwrap();
        assert_eq!(alert.title, "Fatal");
        assert_eq!(alert.color, AlertColor::Danger);
        assert_eq!(alert.text, "`out of memory`");
    }

    #[test]
    fn test_notify_ignores_flag() {
        let (logger, rx) = logger(LoggerConfig::default());

        logger.notify("https://hooks.example.com/y", "Deploy", "done");

        let alert = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(alert.title, "Deploy");
        assert_eq!(alert.color, AlertColor::Good);
        assert_eq!(alert.text, "done");
    }
}
