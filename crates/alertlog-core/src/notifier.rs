//! Webhook side-channel shared by the logger implementations.

use crate::dispatch;
use alertlog_types::{Alert, AlertColor, AlertSender, AlertlogError, Result};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Callback receiving delivery failures from background tasks.
pub type FailureReporter = Arc<dyn Fn(AlertlogError) + Send + Sync>;

/// Webhook target, enable flag, and delivery for error and fatal lines.
pub struct Notifier {
    webhook: RwLock<String>,
    enabled: AtomicBool,
    channel: Option<String>,
    fatal_timeout: Duration,
    sender: Arc<dyn AlertSender>,
}

impl Notifier {
    /// Create a notifier with no target and forwarding disabled.
    pub fn new(sender: Arc<dyn AlertSender>) -> Self {
        Self {
            webhook: RwLock::new(String::new()),
            enabled: AtomicBool::new(false),
            channel: None,
            fatal_timeout: Duration::from_secs(5),
            sender,
        }
    }

    /// Channel override applied to forwarded error and fatal lines.
    pub fn with_channel(mut self, channel: Option<String>) -> Self {
        self.channel = channel.filter(|c| !c.is_empty());
        self
    }

    /// Maximum time a fatal line waits for its notification.
    pub fn with_fatal_timeout(mut self, timeout: Duration) -> Self {
        self.fatal_timeout = timeout;
        self
    }

    /// Set the webhook target.
    pub fn set_target(&self, url: &str) {
        *self.webhook.write() = url.trim().to_string();
    }

    /// Enable or disable forwarding.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Current webhook target, empty when unset.
    pub fn target(&self) -> String {
        self.webhook.read().clone()
    }

    /// Whether forwarding is switched on.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Target to forward to, if forwarding is enabled and a target is set.
    pub fn active_target(&self) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }
        let target = self.webhook.read();
        (!target.is_empty()).then(|| target.clone())
    }

    fn routed(&self, alert: Alert) -> Alert {
        alert.with_channel(self.channel.as_deref())
    }

    /// Forward an error line in the background. No-op unless active; the
    /// reporter is only built when a delivery is attempted.
    pub fn forward_error<R>(&self, message: &str, reporter: R)
    where
        R: FnOnce() -> FailureReporter,
    {
        if let Some(target) = self.active_target() {
            let alert = self.routed(Alert::error(message));
            self.dispatch(target, alert, reporter());
        }
    }

    /// Forward a fatal line and wait for delivery, bounded by the fatal
    /// timeout. No-op unless active.
    pub fn forward_fatal(&self, message: &str) -> Result<()> {
        let Some(target) = self.active_target() else {
            return Ok(());
        };
        let alert = self.routed(Alert::fatal(message));
        let sender = self.sender.clone();

        dispatch::run_bounded(
            async move { sender.send(&target, &alert).await },
            self.fatal_timeout,
        )
    }

    /// Send an ad-hoc message in the background, ignoring target and flag.
    pub fn send_adhoc(&self, webhook_url: &str, title: &str, text: &str, report: FailureReporter) {
        let alert = Alert::new(title, AlertColor::Good, text);
        self.dispatch(webhook_url.to_string(), alert, report);
    }

    fn dispatch(&self, target: String, alert: Alert, report: FailureReporter) {
        let sender = self.sender.clone();
        let task_report = report.clone();

        let spawned = dispatch::spawn(async move {
            if let Err(e) = sender.send(&target, &alert).await {
                task_report(e);
            }
        });

        if let Err(e) = spawned {
            report(e);
        }
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("webhook", &self.target())
            .field("enabled", &self.is_enabled())
            .field("channel", &self.channel)
            .field("fatal_timeout", &self.fatal_timeout)
            .finish()
    }
}
