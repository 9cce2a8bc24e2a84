//! Slack incoming-webhook client implementation.

use alertlog_types::{Alert, AlertColor, AlertSender, AlertlogError, Result};
use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Slack webhook client configuration.
#[derive(Debug, Clone)]
pub struct SlackConfig {
    /// Timeout applied to each webhook request
    pub timeout: Duration,
    /// User agent sent with each request
    pub user_agent: String,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: format!("alertlog/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Client posting [`Alert`]s to Slack-compatible incoming webhooks.
#[derive(Debug, Clone)]
pub struct SlackWebhook {
    client: Client,
}

impl SlackWebhook {
    /// Create a new webhook client.
    pub fn new(config: SlackConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        let agent = header::HeaderValue::from_str(&config.user_agent)
            .map_err(|e| AlertlogError::Other(format!("Invalid user agent: {}", e)))?;
        headers.insert(header::USER_AGENT, agent);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AlertlogError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::new(SlackConfig {
            timeout,
            ..Default::default()
        })
    }

    /// Post an alert to `webhook_url`.
    pub async fn post(&self, webhook_url: &str, alert: &Alert) -> Result<()> {
        let url = parse_webhook_url(webhook_url)?;
        let payload = Payload::from(alert);

        tracing::debug!(title = %alert.title, color = %alert.color, "posting alert to webhook");

        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AlertlogError::Http(format!("Failed to post alert: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), %body, "webhook rejected alert");
            return Err(AlertlogError::Delivery {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl AlertSender for SlackWebhook {
    async fn send(&self, webhook_url: &str, alert: &Alert) -> Result<()> {
        self.post(webhook_url, alert).await
    }
}

/// Validate a webhook URL. Only http and https endpoints are accepted.
pub fn parse_webhook_url(webhook_url: &str) -> Result<Url> {
    let url = Url::parse(webhook_url.trim())
        .map_err(|e| AlertlogError::InvalidWebhook(format!("{}: {}", webhook_url, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(AlertlogError::InvalidWebhook(format!(
            "unsupported scheme '{}' in {}",
            scheme, webhook_url
        ))),
    }
}

/// Webhook request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payload {
    /// Channel override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Message attachments
    pub attachments: Vec<Attachment>,
}

/// Slack message attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Plain-text summary for clients that cannot render attachments
    pub fallback: String,
    /// Color bar
    pub color: AlertColor,
    /// Title line
    pub author_name: String,
    /// Message body
    pub text: String,
    /// Fields rendered as markdown
    pub mrkdwn_in: Vec<String>,
}

impl From<&Alert> for Payload {
    fn from(alert: &Alert) -> Self {
        Self {
            channel: alert.channel.clone().filter(|c| !c.is_empty()),
            attachments: vec![Attachment {
                fallback: format!("{}: {}", alert.title, alert.text),
                color: alert.color,
                author_name: alert.title.clone(),
                text: alert.text.clone(),
                mrkdwn_in: vec!["text".to_string()],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let alert = Alert::error("boom");
        let value = serde_json::to_value(Payload::from(&alert)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "attachments": [{
                    "fallback": "Error: `boom`",
                    "color": "warning",
                    "author_name": "Error",
                    "text": "`boom`",
                    "mrkdwn_in": ["text"],
                }]
            })
        );
    }

    #[test]
    fn test_payload_channel() {
        let alert = Alert::new("Deploy", AlertColor::Good, "done").with_channel(Some("#ops"));
        let value = serde_json::to_value(Payload::from(&alert)).unwrap();
        assert_eq!(value["channel"], "#ops");
        assert_eq!(value["attachments"][0]["color"], "good");
    }

    #[test]
    fn test_parse_webhook_url() {
        assert!(parse_webhook_url("https://hooks.slack.com/services/T/B/X").is_ok());
        assert!(parse_webhook_url("http://127.0.0.1:8080/hook").is_ok());
        assert!(matches!(
            parse_webhook_url("ftp://example.com/hook"),
            Err(AlertlogError::InvalidWebhook(_))
        ));
        assert!(matches!(
            parse_webhook_url("not a url"),
            Err(AlertlogError::InvalidWebhook(_))
        ));
    }
}
