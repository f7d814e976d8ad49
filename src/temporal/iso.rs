use chrono::{NaiveDateTime, NaiveTime, Timelike};

use super::parse_error;
use crate::error::CodecError;

const TIME_WITH_SECONDS: &str = "%H:%M:%S%.f";
const TIME_WITHOUT_SECONDS: &str = "%H:%M";
const DATE_TIME_WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATE_TIME_WITHOUT_SECONDS: &str = "%Y-%m-%dT%H:%M";

/// Canonical local time text: `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff[fff[fff]]`.
///
/// Seconds are omitted when both seconds and nanoseconds are zero, and the
/// fraction uses the shortest group of 3, 6 or 9 digits that is exact.
///
/// # Examples
///
/// ```
/// use temporal_json_rs::temporal::{iso::format_local_time, local_time};
///
/// assert_eq!(format_local_time(&local_time(12, 0, 0, 0).unwrap()), "12:00");
/// assert_eq!(format_local_time(&local_time(9, 5, 7, 0).unwrap()), "09:05:07");
/// assert_eq!(format_local_time(&local_time(9, 5, 7, 120_000_000).unwrap()), "09:05:07.120");
/// assert_eq!(format_local_time(&local_time(9, 5, 0, 1_500).unwrap()), "09:05:00.000001500");
/// ```
pub fn format_local_time(time: &NaiveTime) -> String {
    let second = time.second();
    let nano = time.nanosecond();

    let mut text = format!("{:02}:{:02}", time.hour(), time.minute());

    if second > 0 || nano > 0 {
        text.push_str(&format!(":{second:02}"));

        if nano > 0 {
            let fraction = if nano % 1_000_000 == 0 {
                format!(".{:03}", nano / 1_000_000)
            } else if nano % 1_000 == 0 {
                format!(".{:06}", nano / 1_000)
            } else {
                format!(".{nano:09}")
            };
            text.push_str(&fraction);
        }
    }

    text
}

/// Canonical local date-time text: `YYYY-MM-DD` + `T` + [`format_local_time`].
///
/// Years outside `0000..=9999` carry an explicit sign.
pub fn format_local_date_time(value: &NaiveDateTime) -> String {
    format!(
        "{}T{}",
        value.date().format("%Y-%m-%d"),
        format_local_time(&value.time())
    )
}

/// Strict ISO-8601 shape check run ahead of chrono parsing.
///
/// Errors carry the byte index of the offending character.
struct Scanner<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            position: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.position).copied()
    }

    fn accept(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn literal(&mut self, expected: u8) -> Result<(), usize> {
        if self.accept(expected) {
            Ok(())
        } else {
            Err(self.position)
        }
    }

    /// Consumes between `min` and `max` ASCII digits.
    fn digits(&mut self, min: usize, max: usize) -> Result<(), usize> {
        let start = self.position;
        while self.position - start < max && self.peek().is_some_and(|byte| byte.is_ascii_digit()) {
            self.position += 1;
        }
        if self.position - start < min {
            return Err(start);
        }
        Ok(())
    }

    fn end(&self) -> Result<(), usize> {
        if self.position == self.bytes.len() {
            Ok(())
        } else {
            Err(self.position)
        }
    }

    /// `HH:MM[:SS[.f{1,9}]]`
    fn time(&mut self) -> Result<(), usize> {
        self.digits(2, 2)?;
        self.literal(b':')?;
        self.digits(2, 2)?;

        if self.accept(b':') {
            self.digits(2, 2)?;
            if self.accept(b'.') {
                self.digits(1, 9)?;
            }
        }
        Ok(())
    }

    /// `YYYY-MM-DD`; a `+` is only allowed on years wider than four digits.
    fn date(&mut self) -> Result<(), usize> {
        if self.accept(b'+') {
            self.digits(5, 9)?;
        } else if self.accept(b'-') {
            self.digits(4, 9)?;
        } else {
            self.digits(4, 4)?;
        }
        self.literal(b'-')?;
        self.digits(2, 2)?;
        self.literal(b'-')?;
        self.digits(2, 2)
    }
}

fn unparseable(text: &str) -> impl FnOnce(usize) -> CodecError + '_ {
    move |index| CodecError::Unparseable {
        text: text.to_string(),
        index,
    }
}

/// Parses `HH:MM[:SS[.fraction]]`, the fraction holding one to nine digits.
///
/// # Errors
/// `CodecError::Unparseable` for text not in that shape, `CodecError::Parse`
/// for out-of-range fields.
pub fn parse_local_time(text: &str) -> Result<NaiveTime, CodecError> {
    let mut scanner = Scanner::new(text);
    scanner
        .time()
        .and_then(|_| scanner.end())
        .map_err(unparseable(text))?;

    NaiveTime::parse_from_str(text, TIME_WITH_SECONDS)
        .or_else(|error| NaiveTime::parse_from_str(text, TIME_WITHOUT_SECONDS).map_err(|_| error))
        .map_err(parse_error(text))
}

/// Parses `YYYY-MM-DDTHH:MM[:SS[.fraction]]`.
///
/// # Errors
/// Same as [`parse_local_time`].
pub fn parse_local_date_time(text: &str) -> Result<NaiveDateTime, CodecError> {
    let mut scanner = Scanner::new(text);
    scanner
        .date()
        .and_then(|_| scanner.literal(b'T'))
        .and_then(|_| scanner.time())
        .and_then(|_| scanner.end())
        .map_err(unparseable(text))?;

    NaiveDateTime::parse_from_str(text, DATE_TIME_WITH_SECONDS)
        .or_else(|error| {
            NaiveDateTime::parse_from_str(text, DATE_TIME_WITHOUT_SECONDS).map_err(|_| error)
        })
        .map_err(parse_error(text))
}
