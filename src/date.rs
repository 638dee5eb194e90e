//! Date parsing and formatting for posts and updates. Two input formats are
//! accepted: a plain calendar date (`YYYY-MM-DD`, taken as midnight UTC) and
//! an RFC 3339 date-time with UTC offset (`YYYY-MM-DDTHH:mm:ssZ`). Parsing is
//! locale-independent; the ambient locale never influences the result.

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
use std::fmt;

/// Parses a date string in one of the two accepted formats.
pub fn parse(input: &str) -> Result<DateTime<Utc>, Error> {
    if input.contains('T') {
        return match DateTime::parse_from_rfc3339(input) {
            Ok(date) => Ok(date.with_timezone(&Utc)),
            Err(_) => Err(Error(input.to_owned())),
        };
    }
    match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        // midnight is always a valid time
        Ok(date) => Ok(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap())),
        Err(_) => Err(Error(input.to_owned())),
    }
}

/// Formats a date for `datetime` attributes (RFC 3339, `Z` suffix).
pub fn machine(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Formats a date for human readers, e.g. `February 10, 2024`.
pub fn human(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Represents an unparseable date string.
#[derive(Debug)]
pub struct Error(String);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid date `{}`: expected YYYY-MM-DD or YYYY-MM-DDTHH:mm:ssZ",
            self.0
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
