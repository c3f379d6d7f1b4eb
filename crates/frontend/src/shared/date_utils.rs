/// Utilities for date and time formatting
///
/// The REST layer renders datetimes like "2016-03-14T09:33:00.000+0100";
/// older records may carry a bare date or nothing at all. Anything that does
/// not parse is shown as received.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const WIRE_DATETIME: &str = "%Y-%m-%dT%H:%M:%S%.f%z";
const WIRE_DATETIME_LOCAL: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Format a wire datetime as "DD.MM.YYYY HH:MM".
pub fn format_datetime(value: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return parsed.format("%d.%m.%Y %H:%M").to_string();
    }
    if let Ok(parsed) = DateTime::parse_from_str(value, WIRE_DATETIME) {
        return parsed.format("%d.%m.%Y %H:%M").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, WIRE_DATETIME_LOCAL) {
        return parsed.format("%d.%m.%Y %H:%M").to_string();
    }
    format_date(value)
}

/// Format a wire date (or the date part of a datetime) as "DD.MM.YYYY".
pub fn format_date(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    if let Ok(parsed) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return parsed.format("%d.%m.%Y").to_string();
    }
    value.to_string()
}
