//! Logging macros routed through the active logger.

/// Log at debug level through the active logger.
///
/// ```ignore
/// alertlog_core::debug!("cache miss for {}", key);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::facade::debug(::std::format_args!($($arg)+))
    };
}

/// Log at info level through the active logger.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::facade::info(::std::format_args!($($arg)+))
    };
}

/// Log at error level through the active logger, forwarding to the webhook
/// when configured.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::facade::error(::std::format_args!($($arg)+))
    };
}

/// Log regardless of level through the active logger.
#[macro_export]
macro_rules! log_print {
    ($($arg:tt)+) => {
        $crate::facade::print(::std::format_args!($($arg)+))
    };
}

/// Log at error level, then exit with status 1.
///
/// Without an active logger the line goes to stderr before exiting.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::facade::fatal(::std::format_args!($($arg)+))
    };
}
