//! Configuration types and structures.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use crate::enums::LogLevel;

/// Logger configuration.
///
/// Embedding applications fill this from wherever they keep settings; the
/// logger only consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Initial log level
    #[serde(default)]
    pub level: LogLevel,
    /// Webhook that receives error and fatal lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Whether error and fatal lines are forwarded to the webhook
    #[serde(default)]
    pub notify_on_error: bool,
    /// Channel override for forwarded lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// HTTP timeout for a single webhook request, in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// How long a fatal line waits for its notification before exiting
    #[serde(default = "default_fatal_timeout_ms")]
    pub fatal_timeout_ms: u64,
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_fatal_timeout_ms() -> u64 {
    5_000
}

impl LoggerConfig {
    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Fatal wait as a [`Duration`].
    pub fn fatal_timeout(&self) -> Duration {
        Duration::from_millis(self.fatal_timeout_ms)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            webhook_url: None,
            notify_on_error: false,
            channel: None,
            request_timeout_ms: default_request_timeout_ms(),
            fatal_timeout_ms: default_fatal_timeout_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config: LoggerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.level, LogLevel::Info);
        assert!(!config.notify_on_error);
        assert_eq!(config.fatal_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_json() {
        let config: LoggerConfig = serde_json::from_value(serde_json::json!({
            "level": "DEBUG",
            "webhook_url": "https://hooks.slack.com/services/T/B/X",
            "notify_on_error": true,
        }))
        .unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert!(config.notify_on_error);
        assert_eq!(config.request_timeout_ms, 10_000);
    }
}
