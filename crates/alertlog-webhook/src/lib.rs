//! # alertlog Webhook
//!
//! Clients for the chat-ops services that receive alertlog notifications.
//!
//! Currently only Slack-compatible incoming webhooks are supported; any
//! service accepting the Slack attachment payload (Mattermost, Rocket.Chat)
//! works as well.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod slack;

pub use slack::{parse_webhook_url, SlackConfig, SlackWebhook};
