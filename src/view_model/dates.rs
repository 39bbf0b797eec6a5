use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::domain::RawTimestamp;

/// Sentinel shown in place of a date that does not parse.
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_FORMAT: &str = "%Y-%m-%d";

/// Largest magnitude a browser `Date` accepts, in milliseconds.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const NAIVE_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Numeric coercion of a raw timestamp.
///
/// Text is trimmed; blank text is zero and anything that is not a decimal number
/// is NaN. `null` is zero, booleans are 0 or 1, other shapes and a missing value
/// are NaN.
pub fn coerce_to_millis(raw: Option<&RawTimestamp>) -> f64 {
    match raw {
        Some(RawTimestamp::Number(n)) => *n,
        Some(RawTimestamp::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                0.0
            } else {
                text.parse().unwrap_or(f64::NAN)
            }
        }
        Some(RawTimestamp::Other(Value::Null)) => 0.0,
        Some(RawTimestamp::Other(Value::Bool(flag))) => f64::from(u8::from(*flag)),
        Some(RawTimestamp::Other(_)) | None => f64::NAN,
    }
}

/// Milliseconds since the epoch to a UTC instant, truncating sub-millisecond parts.
pub fn millis_to_utc(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() || millis.abs() > MAX_EPOCH_MILLIS {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis.trunc() as i64)
}

/// Registration date as shown in the customers table.
pub fn format_registration_date(raw: Option<&RawTimestamp>) -> String {
    display(millis_to_utc(coerce_to_millis(raw)))
}

/// Lenient date parsing for order dates, whose format varies between backends.
///
/// Accepts RFC 3339, RFC 2822, ISO-like naive date-times and dates (read as
/// UTC), and all-digit strings holding epoch milliseconds.
pub fn parse_order_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }
    for format in NAIVE_DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(raw, format) {
            return parsed.and_hms_opt(0, 0, 0).map(|midnight| midnight.and_utc());
        }
    }
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse().ok().and_then(millis_to_utc);
    }
    None
}

/// Order date as shown in the orders table.
pub fn format_order_date(raw: &str) -> String {
    display(parse_order_date(raw))
}

fn display(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}
