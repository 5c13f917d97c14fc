//! Utilities for date and time formatting
//!
//! Ledger timestamps arrive as RFC 3339 strings and are shown in the
//! browser's local time.

use chrono::{DateTime, Local, TimeZone};

const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Format an RFC 3339 timestamp as DD.MM.YYYY HH:MM:SS in local time.
/// Unparseable input is returned verbatim.
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

/// Same as [`format_timestamp`] for an explicit time zone.
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(tz)
            .format(DISPLAY_FORMAT)
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
