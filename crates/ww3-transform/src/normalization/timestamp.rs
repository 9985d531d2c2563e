//! Absolute timestamp parsing.
//!
//! [`parse_timestamp`] is the only date validator in the workspace. Every
//! coercer and every entry surface goes through it.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;
use ww3_model::{CoerceError, RawValue, Timestamp};

/// Separated layouts with a time of day.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Local parts a zone designator may follow. Wider than the accepted
/// layouts so that zone-bearing input is reported as such at any precision.
const ZONED_LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("not a recognised timestamp layout")]
    Malformed,
    #[error("timestamp carries a time zone")]
    ZoneBearing,
}

impl TimestampError {
    pub fn into_coerce_error(self, field: &str, value: &str) -> CoerceError {
        match self {
            TimestampError::Malformed => CoerceError::InvalidTimestamp {
                field: field.to_string(),
                value: value.to_string(),
            },
            TimestampError::ZoneBearing => CoerceError::TimezoneNotSupported {
                field: field.to_string(),
                value: value.to_string(),
            },
        }
    }
}

/// Parse one of the accepted timestamp spellings:
///
/// - `YYYYMMDD HHMMSS` (the external token)
/// - `YYYY-MM-DD HH:MM:SS`
/// - `YYYY-MM-DDTHH:MM:SS`
/// - `YYYY-MM-DD` or `YYYYMMDD` (midnight)
///
/// Input with a zone designator or UTC offset is rejected, never truncated.
/// So is any instant without an exact external token: years outside
/// 0000..=9999 and leap seconds.
pub fn parse_timestamp(value: &str) -> Result<Timestamp, TimestampError> {
    let trimmed = value.trim();
    if let Some(parsed) = parse_naive(trimmed) {
        let timestamp = Timestamp::new(parsed);
        if !timestamp.has_canonical_form() {
            return Err(TimestampError::Malformed);
        }
        return Ok(timestamp);
    }
    if has_zone(trimmed) {
        return Err(TimestampError::ZoneBearing);
    }
    Err(TimestampError::Malformed)
}

/// Coerce a raw value into a timestamp for `field`.
pub fn coerce_timestamp(field: &str, raw: &RawValue) -> Result<Timestamp, CoerceError> {
    match raw {
        RawValue::Timestamp(value) if value.has_canonical_form() => Ok(*value),
        RawValue::Timestamp(value) => Err(CoerceError::InvalidTimestamp {
            field: field.to_string(),
            value: value.as_naive().to_string(),
        }),
        RawValue::Text(text) => {
            parse_timestamp(text).map_err(|err| err.into_coerce_error(field, text))
        }
        // Bare YYYYMMDD dates arrive as integers from TOML and JSON.
        RawValue::Integer(date) => {
            let text = date.to_string();
            parse_timestamp(&text).map_err(|err| err.into_coerce_error(field, &text))
        }
        other => Err(CoerceError::InvalidTimestamp {
            field: field.to_string(),
            value: other.to_string(),
        }),
    }
}

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    if let Some(parsed) = parse_compact(value) {
        return Some(parsed);
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// `YYYYMMDD HHMMSS` or `YYYYMMDD`, read by position.
fn parse_compact(value: &str) -> Option<NaiveDateTime> {
    let (date, time) = match value.split_once(' ') {
        Some((date, time)) => (date, Some(time)),
        None => (value, None),
    };
    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(
        date[0..4].parse().ok()?,
        date[4..6].parse().ok()?,
        date[6..8].parse().ok()?,
    )?;
    let time = match time {
        None => NaiveTime::MIN,
        Some(time) => {
            if time.len() != 6 || !time.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            NaiveTime::from_hms_opt(
                time[0..2].parse().ok()?,
                time[2..4].parse().ok()?,
                time[4..6].parse().ok()?,
            )?
        }
    };
    Some(date.and_time(time))
}

/// True when `value` is a local date-time followed by a zone designator
/// or a numeric UTC offset.
fn has_zone(value: &str) -> bool {
    let Some(local) = strip_zone(value) else {
        return false;
    };
    let local = local.trim_end();
    parse_naive(local).is_some()
        || ZONED_LOCAL_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(local, format).is_ok())
}

/// `value` without its trailing zone: `Z`, a zone name of two to five
/// letters (`UTC`, `CET`, `CEST`, ...) or a signed offset.
fn strip_zone(value: &str) -> Option<&str> {
    let local = value.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let zone = &value[local.len()..];
    if zone.eq_ignore_ascii_case("Z") || (2..=5).contains(&zone.len()) {
        return Some(local);
    }

    // A sign after the date part starts a numeric offset.
    let date_len = if value.get(4..5) == Some("-") { 10 } else { 8 };
    let tail = value.get(date_len..)?;
    let sign_at = tail.rfind(['+', '-'])?;
    let (local, offset) = value.split_at(date_len + sign_at);
    is_offset(&offset[1..]).then_some(local)
}

/// `HH`, `HHMM` or `HH:MM`.
fn is_offset(value: &str) -> bool {
    let digits: String = value.chars().filter(|c| *c != ':').collect();
    matches!(digits.len(), 2 | 4)
        && digits.bytes().all(|b| b.is_ascii_digit())
        && value.matches(':').count() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> Timestamp {
        Timestamp::new(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(hh, mm, ss)
                .unwrap(),
        )
    }

    #[test]
    fn every_accepted_layout_yields_the_same_instant() {
        let expected = instant(2023, 1, 1, 0, 0, 0);
        for input in [
            "20230101 000000",
            "2023-01-01 00:00:00",
            "2023-01-01T00:00:00",
            "2023-01-01",
            "20230101",
            "  20230101 000000 ",
        ] {
            assert_eq!(parse_timestamp(input), Ok(expected), "input {input:?}");
        }
    }

    #[test]
    fn time_of_day_is_kept() {
        assert_eq!(
            parse_timestamp("19680606 123045"),
            Ok(instant(1968, 6, 6, 12, 30, 45))
        );
        assert_eq!(
            parse_timestamp("2010-02-28T23:59:59"),
            Ok(instant(2010, 2, 28, 23, 59, 59))
        );
    }

    #[test]
    fn zone_bearing_input_is_rejected() {
        for input in [
            "2023-01-01T00:00:00Z",
            "2023-01-01T00:00:00+00:00",
            "2023-01-01 00:00:00-0500",
            "20230101 000000+01",
            "2023-01-01 00:00:00 UTC",
            "2023-01-01z",
            "2023-01-01T00:00:00.000Z",
            "2023-01-01T00:00:00.5+01:00",
            "2023-01-01T00:00Z",
            "2023-01-01T00:00:00 CET",
            "2023-01-01 12:30 cest",
        ] {
            assert_eq!(
                parse_timestamp(input),
                Err(TimestampError::ZoneBearing),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn malformed_input_is_rejected() {
        for input in [
            "",
            "2023-13-01",
            "20230230",
            "2023/01/01",
            "20230101 2400",
            "2023-01-01 25:00:00",
            "yesterday",
            "2023-01-01+garbage",
            "2023-01-01T00:00",
            "2023-01-01 00:00:00.5",
            "2023-01-01 00:00:00 Europe",
        ] {
            assert_eq!(
                parse_timestamp(input),
                Err(TimestampError::Malformed),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn instants_without_an_exact_token_are_rejected() {
        for input in ["+12345-01-01", "+10000-01-01 00:00:00", "2016-12-31 23:59:60"] {
            assert_eq!(
                parse_timestamp(input),
                Err(TimestampError::Malformed),
                "input {input:?}"
            );
        }
        assert_eq!(
            parse_timestamp("00010101 000000"),
            Ok(instant(1, 1, 1, 0, 0, 0))
        );
    }

    #[test]
    fn native_timestamps_must_render_exactly() {
        let leap = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 1_000)
            .unwrap();
        let distant = NaiveDate::from_ymd_opt(12345, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        for value in [leap, distant] {
            let err = coerce_timestamp("DOMAIN%START", &RawValue::Timestamp(Timestamp::new(value)))
                .unwrap_err();
            assert!(matches!(err, CoerceError::InvalidTimestamp { .. }), "{value}");
        }
        let valid = instant(2023, 1, 1, 6, 0, 0);
        assert_eq!(
            coerce_timestamp("DOMAIN%START", &RawValue::Timestamp(valid)),
            Ok(valid)
        );
    }

    #[test]
    fn coercion_names_the_field() {
        let err = coerce_timestamp("DOMAIN%START", &RawValue::text("2023-01-01Z")).unwrap_err();
        assert_eq!(
            err,
            CoerceError::TimezoneNotSupported {
                field: "DOMAIN%START".to_string(),
                value: "2023-01-01Z".to_string(),
            }
        );

        let err = coerce_timestamp("DOMAIN%START", &RawValue::Bool(true)).unwrap_err();
        assert!(matches!(err, CoerceError::InvalidTimestamp { .. }));
    }

    #[test]
    fn integer_dates_are_accepted() {
        assert_eq!(
            coerce_timestamp("FORCING%TIMESTART", &RawValue::Integer(20230101)),
            Ok(instant(2023, 1, 1, 0, 0, 0))
        );
    }
}
