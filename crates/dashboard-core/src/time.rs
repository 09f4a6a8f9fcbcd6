// File: crates/dashboard-core/src/time.rs
// Summary: Timestamp parsing (epoch milliseconds or strftime patterns) and day-label formatting.
// Notes:
// - Patterns without a zone are read as UTC.
// - Missing date fields default like the dashboard's original time parser:
//   year 1900, January, day 1. Missing minutes and seconds are 0; a pattern
//   with no hour reads as midnight.

use std::fmt::Write;

use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};

/// Pattern used for bar-chart day labels.
pub const DAY_LABEL_FORMAT: &str = "%m/%d";

/// Default year for patterns that carry no year field.
const DEFAULT_YEAR: i64 = 1900;

/// Interpret `text` as milliseconds since the Unix epoch.
/// Integers are taken as-is; finite decimals are truncated toward zero.
pub fn parse_epoch_millis(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(ms) = text.parse::<i64>() {
        return DateTime::from_timestamp_millis(ms);
    }
    let ms = text.parse::<f64>().ok().filter(|v| v.is_finite())?;
    DateTime::from_timestamp_millis(ms.trunc() as i64)
}

/// Parse `text` with a strftime-style `format`.
pub fn parse_with_format(text: &str, format: &str) -> Option<DateTime<Utc>> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, text.trim(), StrftimeItems::new(format)).ok()?;

    if let Ok(zoned) = parsed.to_datetime() {
        return Some(zoned.with_timezone(&Utc));
    }

    let date = match parsed.to_naive_date() {
        Ok(date) => date,
        Err(_) => {
            let mut defaulted = parsed.clone();
            // set_* only fails when the field already holds another value; that is fine here.
            let _ = defaulted.set_month(1);
            let _ = defaulted.set_day(1);
            match defaulted.to_naive_date() {
                Ok(date) => date,
                Err(_) => {
                    let _ = defaulted.set_year(DEFAULT_YEAR);
                    defaulted.to_naive_date().ok()?
                }
            }
        }
    };
    let time = match parsed.to_naive_time() {
        Ok(time) => time,
        Err(_) => {
            let mut defaulted = parsed.clone();
            let _ = defaulted.set_minute(0);
            let _ = defaulted.set_second(0);
            // No hour in the pattern at all: midnight.
            defaulted.to_naive_time().unwrap_or(NaiveTime::MIN)
        }
    };
    Some(NaiveDateTime::new(date, time).and_utc())
}

/// Format an instant with `format`; `None` when the pattern is invalid.
pub fn format_instant(instant: &DateTime<Utc>, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", instant.format(format)).ok()?;
    Some(out)
}

