//! Timestamp formatting for console lines.

use chrono::{DateTime, Local, TimeZone};

/// Layout of the timestamp written after the level prefix.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Current local time in console layout, e.g. `2018/05/01 10:00:00`.
pub fn timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Format any zoned time in console layout.
pub fn format_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}
