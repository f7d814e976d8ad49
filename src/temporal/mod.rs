/// Canonical ISO-8601 text for local date-times and local times.
pub mod iso;

use std::fmt::{self, Write};

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::{
    core::codec::TemporalType,
    error::{CodecError, DateTimeError},
};

pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub const NANOS_PER_MILLI: i64 = 1_000_000;

fn check_field(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), DateTimeError> {
    if value < min || value > max {
        return Err(DateTimeError::InvalidField {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Builds a local time, validating every field.
///
/// # Examples
///
/// ```
/// use temporal_json_rs::temporal::local_time;
/// use chrono::Timelike;
///
/// let time = local_time(9, 30, 15, 500_000_000).unwrap();
/// assert_eq!(time.nanosecond(), 500_000_000);
///
/// assert!(local_time(24, 0, 0, 0).is_err());
/// ```
pub fn local_time(hour: i64, minute: i64, second: i64, nano: i64) -> Result<NaiveTime, DateTimeError> {
    check_field("HourOfDay", hour, 0, 23)?;
    check_field("MinuteOfHour", minute, 0, 59)?;
    check_field("SecondOfMinute", second, 0, 59)?;
    check_field("NanoOfSecond", nano, 0, NANOS_PER_SECOND - 1)?;

    NaiveTime::from_hms_nano_opt(hour as u32, minute as u32, second as u32, nano as u32).ok_or(
        DateTimeError::InvalidField {
            field: "NanoOfSecond",
            value: nano,
            min: 0,
            max: NANOS_PER_SECOND - 1,
        },
    )
}

/// Builds a local date-time, validating every field against the calendar.
///
/// # Examples
///
/// ```
/// use temporal_json_rs::temporal::local_date_time;
///
/// assert!(local_date_time(2016, 2, 29, 0, 0, 0, 0).is_ok());
/// assert!(local_date_time(2015, 2, 29, 0, 0, 0, 0).is_err());
/// assert!(local_date_time(2015, 13, 1, 0, 0, 0, 0).is_err());
/// ```
pub fn local_date_time(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    nano: i64,
) -> Result<NaiveDateTime, DateTimeError> {
    check_field(
        "Year",
        year,
        NaiveDate::MIN.year() as i64,
        NaiveDate::MAX.year() as i64,
    )?;
    check_field("MonthOfYear", month, 1, 12)?;
    check_field("DayOfMonth", day, 1, 31)?;

    let date = NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
        .ok_or(DateTimeError::InvalidDate { year, month, day })?;
    let time = local_time(hour, minute, second, nano)?;

    Ok(date.and_time(time))
}

/// Leap seconds are representable in chrono but not in this data model.
fn reject_leap_second(nano: u32) -> Result<(), DateTimeError> {
    if nano as i64 >= NANOS_PER_SECOND {
        return Err(DateTimeError::InvalidField {
            field: "SecondOfMinute",
            value: 60,
            min: 0,
            max: 59,
        });
    }
    Ok(())
}

/// The temporal value types handled by the codecs.
pub trait LocalTemporal: Sized {
    const TYPE: TemporalType;

    /// Parses the ISO-8601 local form.
    fn parse_iso(text: &str) -> Result<Self, CodecError>;

    /// Renders the canonical ISO-8601 local form.
    fn to_iso_string(&self) -> String;

    /// Parses with a strftime-style pattern.
    fn parse_with_pattern(text: &str, pattern: &str) -> Result<Self, CodecError>;

    /// Renders with a strftime-style pattern.
    ///
    /// Fails when the pattern refers to fields the value does not have.
    fn write_with_pattern(&self, out: &mut String, pattern: &str) -> fmt::Result;
}

fn parse_error(text: &str) -> impl FnOnce(chrono::ParseError) -> CodecError + '_ {
    move |source| CodecError::Parse {
        text: text.to_string(),
        source,
    }
}

impl LocalTemporal for NaiveDateTime {
    const TYPE: TemporalType = TemporalType::LocalDateTime;

    fn parse_iso(text: &str) -> Result<Self, CodecError> {
        let value = iso::parse_local_date_time(text)?;
        reject_leap_second(value.nanosecond())?;
        Ok(value)
    }

    fn to_iso_string(&self) -> String {
        iso::format_local_date_time(self)
    }

    fn parse_with_pattern(text: &str, pattern: &str) -> Result<Self, CodecError> {
        let value = NaiveDateTime::parse_from_str(text, pattern).map_err(parse_error(text))?;
        reject_leap_second(value.nanosecond())?;
        Ok(value)
    }

    fn write_with_pattern(&self, out: &mut String, pattern: &str) -> fmt::Result {
        write!(out, "{}", self.format(pattern))
    }
}

impl LocalTemporal for NaiveTime {
    const TYPE: TemporalType = TemporalType::LocalTime;

    fn parse_iso(text: &str) -> Result<Self, CodecError> {
        let value = iso::parse_local_time(text)?;
        reject_leap_second(value.nanosecond())?;
        Ok(value)
    }

    fn to_iso_string(&self) -> String {
        iso::format_local_time(self)
    }

    fn parse_with_pattern(text: &str, pattern: &str) -> Result<Self, CodecError> {
        let value = NaiveTime::parse_from_str(text, pattern).map_err(parse_error(text))?;
        reject_leap_second(value.nanosecond())?;
        Ok(value)
    }

    fn write_with_pattern(&self, out: &mut String, pattern: &str) -> fmt::Result {
        write!(out, "{}", self.format(pattern))
    }
}
