//! Notification messages forwarded to chat-ops webhooks.

use serde::{Deserialize, Serialize};
use crate::enums::AlertColor;

/// A single ad-hoc message for a chat-ops channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Channel override; `None` posts to the webhook's default channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Title shown as the attachment author (e.g. "Error", "Fatal")
    pub title: String,
    /// Severity color
    pub color: AlertColor,
    /// Message body
    pub text: String,
}

impl Alert {
    /// Create an alert for the webhook's default channel.
    pub fn new(title: impl Into<String>, color: AlertColor, text: impl Into<String>) -> Self {
        Self {
            channel: None,
            title: title.into(),
            color,
            text: text.into(),
        }
    }

    /// Alert for an error line: title "Error", color warning, code-quoted text.
    pub fn error(message: &str) -> Self {
        Self::new("Error", AlertColor::Warning, code_quote(message))
    }

    /// Alert for a fatal line: title "Fatal", color danger, code-quoted text.
    pub fn fatal(message: &str) -> Self {
        Self::new("Fatal", AlertColor::Danger, code_quote(message))
    }

    /// Route the alert to a specific channel. Empty names keep the default.
    pub fn with_channel(mut self, channel: Option<&str>) -> Self {
        self.channel = channel
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        self
    }
}

/// Wrap `text` in the inline code marker used by chat-ops markdown.
pub fn code_quote(text: &str) -> String {
    format!("`{}`", text.trim_end_matches('\n'))
}
