//! Best-effort multi-format date parsing and the fixed display formats.
//!
//! Parsing is an explicit ordered list of attempts returning an optional
//! date; nothing throws until a boundary that requires a valid date (the
//! user-supplied continuation start date).

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Formats accepted for received-date values, tried in priority order.
pub const RECEIVED_FORMATS: [&str; 4] = ["%d/%m/%Y", "%d/%m/%y", "%Y-%m-%d", "%m/%d/%Y"];

/// Formats accepted for a user-supplied continuation start date.
pub const START_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d/%m/%y"];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("date value {value:?} matched none of the accepted formats")]
pub struct DateParseError {
    pub value: String,
}

fn parse_with(value: &str, fmt: &str) -> Option<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(value, fmt).ok()?;
    // chrono's `%Y` happily consumes two-digit years; those belong to the
    // `%y` form, so push them to the next format in the list.
    if fmt.contains("%Y") && parsed.year() < 100 {
        return None;
    }
    Some(parsed)
}

/// Parse a received-date string, returning `None` when every format fails.
pub fn parse_received(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    RECEIVED_FORMATS
        .iter()
        .find_map(|fmt| parse_with(value, fmt))
}

/// Parse a continuation start date. All formats failing is fatal for the
/// caller, so this surfaces an error instead of a missing-value sentinel.
pub fn parse_start_date(value: &str) -> Result<NaiveDate, DateParseError> {
    START_DATE_FORMATS
        .iter()
        .find_map(|fmt| parse_with(value.trim(), fmt))
        .ok_or_else(|| DateParseError {
            value: value.to_string(),
        })
}

/// Re-parse a formatted listado date (`dd/mm/yy`, long form tolerated).
pub fn parse_listado_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    parse_with(value, "%d/%m/%y").or_else(|| parse_with(value, "%d/%m/%Y"))
}

pub fn format_short(date: NaiveDate) -> String {
    date.format("%d/%m/%y").to_string()
}

pub fn format_long(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}
