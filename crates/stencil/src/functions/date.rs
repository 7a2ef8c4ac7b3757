//! Date and time formatting.
//!
//! Formats and input layouts are reference-time layouts (see
//! [`to_strftime`]). The name `ukshort` is accepted as `02/01/06`.

use std::fmt::Write;

use chrono::format::{Parsed, StrftimeItems, parse};
use chrono::{DateTime, FixedOffset, Local, NaiveTime, TimeDelta};

pub use crate::functions::layout::to_strftime;
use crate::functions::FunctionError;

/// `dd/mm/yy`.
pub const UK_SHORT: &str = "02/01/06";

/// Layout of `datetime` output and the first layout `date` tries.
pub const DATETIME_LAYOUT: &str = "2006-01-02 15:04:05";

/// Second layout `date` tries.
pub const OFFSET_LAYOUT: &str = "2006-01-02T15:04:05-0700";

const UK_DATETIME_LAYOUT: &str = "02/01/06 15:04:05";

fn resolve_alias(format: &str) -> &str {
    if format == "ukshort" { UK_SHORT } else { format }
}

/// Parse `input` with a reference-time layout.
///
/// Inputs without an offset are taken as UTC. A missing time of day is
/// midnight.
pub fn parse_with_layout(input: &str, layout: &str) -> Result<DateTime<FixedOffset>, FunctionError> {
    let format = to_strftime(layout);
    let fail = |message: String| FunctionError::DateParse {
        input: input.to_string(),
        layout: layout.to_string(),
        message,
    };

    let mut parsed = Parsed::new();
    parse(&mut parsed, input, StrftimeItems::new(&format)).map_err(|e| fail(e.to_string()))?;
    if let Ok(datetime) = parsed.to_datetime() {
        return Ok(datetime);
    }
    let date = parsed.to_naive_date().map_err(|e| fail(e.to_string()))?;
    let time = parsed.to_naive_time().unwrap_or(NaiveTime::MIN);
    Ok(date.and_time(time).and_utc().fixed_offset())
}

/// Format `time` with a reference-time layout.
pub fn format_time(time: &DateTime<FixedOffset>, layout: &str) -> String {
    let format = to_strftime(resolve_alias(layout));
    let mut out = String::new();
    match write!(out, "{}", time.format(&format)) {
        Ok(()) => out,
        Err(_) => layout.to_string(),
    }
}

/// Reformat a `2006-01-02 15:04:05` or `2006-01-02T15:04:05-0700` string.
///
/// Unparseable input is returned unchanged.
///
/// # Example
///
/// ```
/// use stencil::functions::date::format_date;
///
/// assert_eq!(format_date("ukshort", "2017-03-31 19:59:11"), "31/03/17");
/// assert_eq!(format_date("ukshort", "not a date"), "not a date");
/// ```
pub fn format_date(format: &str, datestring: &str) -> String {
    parse_with_layout(datestring, DATETIME_LAYOUT)
        .or_else(|_| parse_with_layout(datestring, OFFSET_LAYOUT))
        .map(|time| format_time(&time, format))
        .unwrap_or_else(|_| datestring.to_string())
}

/// Reformat `datestring`, which is written in `layout`.
pub fn format_date_from(format: &str, datestring: &str, layout: &str) -> Result<String, FunctionError> {
    let time = parse_with_layout(datestring, layout)?;
    Ok(format_time(&time, format))
}

pub fn format_uk_date(datestring: &str) -> String {
    format_date("ukshort", datestring)
}

fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// The current local time as `2006-01-02 15:04:05`.
pub fn datetime() -> String {
    format_time(&now(), DATETIME_LAYOUT)
}

/// Today as `02/01/06`.
pub fn ukdate() -> String {
    format_time(&now(), UK_SHORT)
}

/// The current local time as `02/01/06 15:04:05`.
pub fn ukdatetime() -> String {
    format_time(&now(), UK_DATETIME_LAYOUT)
}

/// The current local time in `format`.
pub fn time_format(format: &str) -> String {
    format_time(&now(), format)
}

/// The local time `seconds` ago in `format`. Fractional seconds are dropped.
pub fn time_format_minus(format: &str, seconds: f64) -> String {
    time_format_minus_at(format, seconds, now())
}

/// [`time_format_minus`] against a fixed `now`.
pub fn time_format_minus_at(format: &str, seconds: f64, now: DateTime<FixedOffset>) -> String {
    let shifted = TimeDelta::try_seconds(seconds.trunc() as i64)
        .and_then(|delta| now.checked_sub_signed(delta))
        .unwrap_or(now);
    format_time(&shifted, format)
}

/// Seconds since the Unix epoch.
pub fn unix_timestamp() -> i64 {
    Local::now().timestamp()
}

/// Nanoseconds since the Unix epoch.
pub fn nano_timestamp() -> i64 {
    Local::now().timestamp_nanos_opt().unwrap_or_default()
}

/// The current time with nanoseconds and offset,
/// e.g. `2006-01-02 15:04:05.999999999 -0700`.
pub fn timestamp() -> String {
    now().format("%Y-%m-%d %H:%M:%S%.9f %z").to_string()
}
