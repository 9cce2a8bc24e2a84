//! Console logger writing prefixed, timestamped lines.
//!
//! Output looks like:
//!
//! ```text
//! [INF] 2018/05/01 10:00:00 server listening on :8080
//! [ERR] 2018/05/01 10:00:02 lost connection to db
//! ```
//!
//! Error and fatal lines can additionally be forwarded to a Slack-compatible
//! webhook; see [`Logger::set_webhook_target`] and
//! [`Logger::set_notify_on_error`].

use crate::notifier::{FailureReporter, Notifier};
use crate::time::timestamp;
use alertlog_types::{AlertSender, LogLevel, Logger, LoggerConfig, Result};
use alertlog_webhook::SlackWebhook;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Function invoked to terminate the process after a fatal line.
pub type ExitHandler = fn(i32) -> !;

/// Exit status used for fatal lines.
pub const FATAL_EXIT_CODE: i32 = 1;

/// The standard logger implementation.
///
/// Cloning is cheap and every clone shares level, webhook settings and
/// output.
#[derive(Clone)]
pub struct SimpleLogger {
    inner: Arc<Inner>,
}

struct Inner {
    level: AtomicU8,
    out: Mutex<Box<dyn Write + Send>>,
    notifier: Notifier,
    exit: ExitHandler,
}

impl SimpleLogger {
    /// Create a logger writing to stdout at info level, with notifications
    /// disabled.
    pub fn new() -> Result<Self> {
        Self::builder(LoggerConfig::default()).build()
    }

    /// Create a logger from configuration, writing to stdout.
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        Self::builder(config.clone()).build()
    }

    /// Start building a logger with custom output, sender or exit handler.
    pub fn builder(config: LoggerConfig) -> SimpleLoggerBuilder {
        SimpleLoggerBuilder {
            config,
            sender: None,
            writer: None,
            exit: std::process::exit,
        }
    }

    fn reporter(&self) -> FailureReporter {
        let inner = self.inner.clone();
        Arc::new(move |e| {
            inner.write_line(
                LogLevel::Error,
                format_args!("Found an error sending notification to Slack: {}", e),
            )
        })
    }
}

impl Inner {
    fn enabled(&self, level: LogLevel) -> bool {
        LogLevel::try_from(self.level.load(Ordering::Relaxed))
            .unwrap_or_default()
            .enables(level)
    }

    /// Write one line on the channel of `level`. Write failures are dropped.
    fn write_line(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        let mut line = format!("{} {} {}", level.prefix(), timestamp(), args);
        if !line.ends_with('\n') {
            line.push('\n');
        }

        let mut out = self.out.lock();
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }
}

impl Logger for SimpleLogger {
    fn debugf(&self, args: fmt::Arguments<'_>) {
        if self.inner.enabled(LogLevel::Debug) {
            self.inner.write_line(LogLevel::Debug, args);
        }
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        if self.inner.enabled(LogLevel::Info) {
            self.inner.write_line(LogLevel::Info, args);
        }
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        let message = args.to_string();
        self.inner.write_line(LogLevel::Error, format_args!("{}", message));

        // Delivery failures go through write_line, never back into errorf.
        self.inner.notifier.forward_error(&message, || self.reporter());
    }

    fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        self.inner.write_line(LogLevel::Error, format_args!("{}", message));

        if let Err(e) = self.inner.notifier.forward_fatal(&message) {
            self.inner.write_line(
                LogLevel::Error,
                format_args!("Found an error sending notification to Slack: {}", e),
            );
        }

        (self.inner.exit)(FATAL_EXIT_CODE)
    }

    fn printf(&self, args: fmt::Arguments<'_>) {
        self.inner.write_line(LogLevel::Info, args);
    }

    fn set_level(&self, level: LogLevel) {
        self.inner.level.store(level.as_u8(), Ordering::Relaxed);
    }

    fn level(&self) -> LogLevel {
        LogLevel::try_from(self.inner.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    fn set_webhook_target(&self, url: &str) {
        self.inner.notifier.set_target(url);
    }

    fn set_notify_on_error(&self, enabled: bool) {
        self.inner.notifier.set_enabled(enabled);
    }

    fn notify(&self, webhook_url: &str, title: &str, text: &str) {
        let logger = self.clone();
        let report: FailureReporter = Arc::new(move |e| {
            logger.errorf(format_args!(
                "Found an error sending notification to Slack: {}",
                e
            ))
        });
        self.inner.notifier.send_adhoc(webhook_url, title, text, report);
    }
}

impl fmt::Debug for SimpleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleLogger")
            .field("level", &self.level())
            .field("notifier", &self.inner.notifier)
            .finish()
    }
}

/// Builder for [`SimpleLogger`].
pub struct SimpleLoggerBuilder {
    config: LoggerConfig,
    sender: Option<Arc<dyn AlertSender>>,
    writer: Option<Box<dyn Write + Send>>,
    exit: ExitHandler,
}

impl SimpleLoggerBuilder {
    /// Deliver notifications through `sender` instead of a Slack webhook
    /// client.
    pub fn sender(mut self, sender: Arc<dyn AlertSender>) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Write lines to `writer` instead of stdout.
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Replace the process exit performed after a fatal line.
    pub fn exit_handler(mut self, exit: ExitHandler) -> Self {
        self.exit = exit;
        self
    }

    /// Build the logger.
    pub fn build(self) -> Result<SimpleLogger> {
        let sender: Arc<dyn AlertSender> = match self.sender {
            Some(sender) => sender,
            None => Arc::new(SlackWebhook::with_timeout(self.config.request_timeout())?),
        };

        let notifier = Notifier::new(sender)
            .with_channel(self.config.channel.clone())
            .with_fatal_timeout(self.config.fatal_timeout());
        if let Some(url) = &self.config.webhook_url {
            notifier.set_target(url);
        }
        notifier.set_enabled(self.config.notify_on_error);

        let out: Box<dyn Write + Send> = match self.writer {
            Some(writer) => writer,
            None => Box::new(io::stdout()),
        };

        Ok(SimpleLogger {
            inner: Arc::new(Inner {
                level: AtomicU8::new(self.config.level.as_u8()),
                out: Mutex::new(out),
                notifier,
                exit: self.exit,
            }),
        })
    }
}
