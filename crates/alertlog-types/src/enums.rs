//! Common enumerations used throughout alertlog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{AlertlogError, Result};

/// Log level enumeration for the logging system.
///
/// Higher values are more verbose. A message at level `L` is emitted when the
/// configured level is `>= L`, so `Error` is always emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum LogLevel {
    /// Error messages only
    Error = 0,
    /// Informational messages and errors
    Info = 1,
    /// Everything, including debug messages
    Debug = 2,
}

impl LogLevel {
    /// Every level, from least to most verbose.
    pub const ALL: [LogLevel; 3] = [LogLevel::Error, LogLevel::Info, LogLevel::Debug];

    /// Numeric value of the level (0=ERROR, 1=INFO, 2=DEBUG).
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Line prefix written in front of console output at this level.
    pub fn prefix(self) -> &'static str {
        match self {
            LogLevel::Error => "[ERR]",
            LogLevel::Info => "[INF]",
            LogLevel::Debug => "[DBG]",
        }
    }

    /// Whether a logger configured at `self` emits messages of `level`.
    pub fn enables(self, level: LogLevel) -> bool {
        self >= level
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = AlertlogError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(LogLevel::Error),
            1 => Ok(LogLevel::Info),
            2 => Ok(LogLevel::Debug),
            other => Err(AlertlogError::InvalidLevel(other.to_string())),
        }
    }
}

impl TryFrom<i64> for LogLevel {
    type Error = AlertlogError;

    fn try_from(value: i64) -> Result<Self> {
        u8::try_from(value)
            .map_err(|_| AlertlogError::InvalidLevel(value.to_string()))
            .and_then(LogLevel::try_from)
    }
}

impl FromStr for LogLevel {
    type Err = AlertlogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "ERROR" | "ERR" | "0" => Ok(LogLevel::Error),
            "INFO" | "INF" | "1" => Ok(LogLevel::Info),
            "DEBUG" | "DBG" | "2" => Ok(LogLevel::Debug),
            _ => Err(AlertlogError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
        }
    }
}

/// Attachment color understood by Slack-compatible webhooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertColor {
    /// General informational alerts
    Good,
    /// Recoverable errors
    Warning,
    /// Fatal errors
    Danger,
}

impl AlertColor {
    /// Wire name of the color.
    pub fn as_str(self) -> &'static str {
        match self {
            AlertColor::Good => "good",
            AlertColor::Warning => "warning",
            AlertColor::Danger => "danger",
        }
    }
}

impl fmt::Display for AlertColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
