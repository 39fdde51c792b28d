//! Report period helpers: default start date, date and duration parsing

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// Date format accepted by `--start` and used in log lines (e.g. `01-02-2006`)
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// Default report duration
pub const DEFAULT_DURATION: &str = "7d";

static DURATION_PART: OnceLock<Regex> = OnceLock::new();

fn duration_part() -> &'static Regex {
    DURATION_PART.get_or_init(|| {
        Regex::new(r"(\d*)(?:\.(\d*))?\s*(ns|us|µs|ms|w|d|h|m|s)")
            .expect("duration regex should compile")
    })
}

/// Nanoseconds per unit suffix
fn unit_nanos(unit: &str) -> Option<i64> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "µs" => 1_000,
        "ms" => 1_000_000,
        "s" => 1_000_000_000,
        "m" => 60 * 1_000_000_000,
        "h" => 3_600 * 1_000_000_000,
        "d" => 86_400 * 1_000_000_000,
        "w" => 604_800 * 1_000_000_000,
        _ => return None,
    };
    Some(nanos)
}

/// Monday of the last fully completed week before `today`.
///
/// On a Monday this is the Monday one week earlier; on a Sunday it is the
/// Monday thirteen days earlier.
pub fn last_completed_week_monday(today: NaiveDate) -> NaiveDate {
    let days_since_monday = i64::from(today.weekday().num_days_from_monday());
    today - Duration::days(days_since_monday + 7)
}

/// Default window start: midnight UTC of the last completed week's Monday
pub fn default_start(now: DateTime<Utc>) -> DateTime<Utc> {
    last_completed_week_monday(now.date_naive())
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or(now)
}

/// Parse a `MM-DD-YYYY` start date as midnight UTC
pub fn parse_start_date(input: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| {
        Error::InvalidStartDate {
            input: input.to_string(),
            source,
        }
    })?;

    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .ok_or_else(|| Error::Config(format!("start date '{}' has no midnight", input)))
}

/// Parse a duration such as `7d`, `168h`, `1w`, `1d12h`, `1.5h` or `300ms`.
///
/// Parts are a decimal amount followed by one of `ns`, `us`, `ms`, `s`, `m`,
/// `h`, `d` or `w`. The total is held in nanoseconds, so it must stay under
/// roughly 292 years, and must be positive.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let trimmed = input.trim();
    let invalid = || Error::InvalidDuration(input.to_string());

    if trimmed.is_empty() {
        return Err(invalid());
    }

    let mut total: i64 = 0;
    let mut consumed = 0;
    for caps in duration_part().captures_iter(trimmed) {
        let whole = caps.get(0).ok_or_else(invalid)?;
        // Reject anything between or before the recognised parts
        if !trimmed[consumed..whole.start()].trim().is_empty() {
            return Err(invalid());
        }
        consumed = whole.end();

        let whole_digits = &caps[1];
        let fraction = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        if whole_digits.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let unit = unit_nanos(&caps[3]).ok_or_else(invalid)?;
        let amount: i64 = if whole_digits.is_empty() {
            0
        } else {
            whole_digits.parse().map_err(|_| invalid())?
        };
        let mut nanos = amount.checked_mul(unit).ok_or_else(invalid)?;

        if !fraction.is_empty() {
            // Digits past nanosecond precision of a week cannot change the result
            let digits = &fraction[..fraction.len().min(15)];
            let value: f64 = format!("0.{}", digits).parse().map_err(|_| invalid())?;
            nanos = nanos
                .checked_add((value * unit as f64) as i64)
                .ok_or_else(invalid)?;
        }

        total = total.checked_add(nanos).ok_or_else(invalid)?;
    }

    if consumed != trimmed.len() || total <= 0 {
        return Err(invalid());
    }

    Ok(Duration::nanoseconds(total))
}

/// Format a timestamp for log lines
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format(DATE_FORMAT).to_string()
}
