//! # alertlog Types
//!
//! Core types, traits, and enums shared across all alertlog crates.
//!
//! This crate provides the vocabulary of the logging facade:
//!
//! - The [`LogLevel`] verbosity threshold and the [`AlertColor`] severity
//! - The [`Alert`] message forwarded to chat-ops webhooks
//! - The [`Logger`] capability set and the [`AlertSender`] delivery seam
//! - Configuration, error types and result aliases
//!
//! ## Example
//!
//! ```
//! use alertlog_types::{LogLevel, AlertColor, Alert};
//!
//! let level: LogLevel = "debug".parse().unwrap();
//! assert!(level >= LogLevel::Info);
//!
//! let alert = Alert::new("Error", AlertColor::Warning, "`boom`");
//! assert_eq!(alert.color.as_str(), "warning");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alert;
pub mod config;
pub mod enums;
pub mod errors;
pub mod traits;

// Re-export common types for convenience
pub use alert::{code_quote, Alert};
pub use config::LoggerConfig;
pub use enums::{AlertColor, LogLevel};
pub use errors::{AlertlogError, Result};
pub use traits::{AlertSender, Logger};
