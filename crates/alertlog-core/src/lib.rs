//! # alertlog Core
//!
//! The default console logger, the process-wide logging facade, and the
//! webhook side-channel that forwards error and fatal lines to chat-ops.
//!
//! This crate provides:
//!
//! - **SimpleLogger**: stdout lines prefixed `[DBG]`, `[INF]`, `[ERR]` with a
//!   timestamp, filtered by level
//! - **Facade**: one active logger per process, with no-op configuration
//!   helpers and the `debug!`/`info!`/`error!`/`fatal!` macros
//! - **Notifications**: background delivery of error lines, bounded wait
//!   for fatal lines, ad-hoc messages through [`Logger::notify`]
//! - **TracingLogger**: the same contract on top of `tracing`
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use alertlog_core::{facade, LogLevel, SimpleLogger};
//!
//! let logger = SimpleLogger::new()?;
//! facade::set_logger(Arc::new(logger));
//!
//! facade::set_log_level(LogLevel::Debug);
//! facade::set_webhook_target("https://hooks.slack.com/services/T000/B000/XXXX");
//! facade::set_notify_on_error(true);
//!
//! alertlog_core::info!("listening on {}", 8080);
//! alertlog_core::error!("lost connection to {}", "db");
//! # Ok::<(), alertlog_core::AlertlogError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod dispatch;
pub mod facade;
mod macros;
pub mod notifier;
pub mod simple;
pub mod time;
pub mod tracing_logger;

// Re-export commonly used items
pub use alertlog_types::{
    Alert, AlertColor, AlertSender, AlertlogError, LogLevel, Logger, LoggerConfig, Result,
};
pub use simple::{ExitHandler, SimpleLogger, SimpleLoggerBuilder};
pub use tracing_logger::{init_subscriber, TracingLogger};

/// alertlog version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
