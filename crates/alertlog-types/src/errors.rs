//! Error types for alertlog operations.

use thiserror::Error;

/// The main error type for alertlog operations.
///
/// Logging itself never fails from the caller's point of view; these errors
/// surface from level parsing and from webhook delivery, where they are
/// reported back through the console.
#[derive(Error, Debug)]
pub enum AlertlogError {
    /// Log level outside of the supported range
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// Webhook URL that cannot be posted to
    #[error("Invalid webhook URL: {0}")]
    InvalidWebhook(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// The webhook answered with a non-success status
    #[error("Webhook rejected the message with status {status}: {body}")]
    Delivery {
        /// HTTP status code returned by the webhook
        status: u16,
        /// Response body, usually a short reason such as `invalid_payload`
        body: String,
    },

    /// Delivery did not complete in time
    #[error("Notification timed out after {0} ms")]
    Timeout(u64),

    /// Async runtime could not be started for background delivery
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for alertlog operations.
pub type Result<T> = std::result::Result<T, AlertlogError>;

/// Helper macro to bail out with an AlertlogError
///
/// # Example
///
/// ```ignore
/// if url.is_empty() {
///     bail!(InvalidWebhook, "empty webhook URL");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::AlertlogError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::AlertlogError::$variant(format!($fmt, $($arg)*)))
    };
    ($msg:expr) => {
        return Err($crate::AlertlogError::Other($msg.to_string()))
    };
}
