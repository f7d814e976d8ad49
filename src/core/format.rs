use std::fmt;

use chrono::format::{Item, StrftimeItems};

use crate::{error::CodecError, temporal::LocalTemporal};

/// An immutable, validated strftime-style pattern.
///
/// Formatters are shared between codec instances through an `Arc`; a single
/// formatter can back any number of reconfigured codecs.
///
/// # Examples
///
/// ```
/// use temporal_json_rs::core::format::DateTimeFormatter;
/// use temporal_json_rs::temporal::local_date_time;
/// use chrono::NaiveDateTime;
///
/// let formatter = DateTimeFormatter::of_pattern("%d/%m/%Y %H:%M").unwrap();
/// let value = local_date_time(2015, 3, 14, 9, 30, 0, 0).unwrap();
///
/// assert_eq!(formatter.format(&value).unwrap(), "14/03/2015 09:30");
/// assert_eq!(formatter.parse::<NaiveDateTime>("14/03/2015 09:30").unwrap(), value);
///
/// assert!(DateTimeFormatter::of_pattern("%Q").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateTimeFormatter {
    pattern: String,
}

impl DateTimeFormatter {
    /// Compiles a pattern, rejecting empty patterns and unknown specifiers.
    pub fn of_pattern(pattern: &str) -> Result<Self, CodecError> {
        let has_error = StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));

        if pattern.is_empty() || has_error {
            return Err(CodecError::InvalidPattern(pattern.to_string()));
        }

        Ok(Self {
            pattern: pattern.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Renders a value with this pattern.
    ///
    /// # Errors
    /// `CodecError::Format` when the pattern asks for a field the value lacks,
    /// for example a year on a local time.
    pub fn format<T: LocalTemporal>(&self, value: &T) -> Result<String, CodecError> {
        let mut text = String::new();
        value
            .write_with_pattern(&mut text, &self.pattern)
            .map_err(|_| CodecError::Format(self.pattern.clone()))?;
        Ok(text)
    }

    pub fn parse<T: LocalTemporal>(&self, text: &str) -> Result<T, CodecError> {
        T::parse_with_pattern(text, &self.pattern)
    }
}

impl fmt::Display for DateTimeFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::DateTimeFormatter;
    use crate::{error::CodecError, temporal::local_time};

    #[test]
    fn empty_pattern_should_be_rejected() {
        assert!(matches!(
            DateTimeFormatter::of_pattern(""),
            Err(CodecError::InvalidPattern(_))
        ));
    }

    #[test]
    fn unknown_specifier_should_be_rejected() {
        let result = DateTimeFormatter::of_pattern("%H:%M %Q");

        match result {
            Err(CodecError::InvalidPattern(pattern)) => assert_eq!(pattern, "%H:%M %Q"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn time_pattern_should_format_and_parse() {
        let formatter = DateTimeFormatter::of_pattern("%Hh%M").unwrap();
        let time = local_time(7, 45, 0, 0).unwrap();

        assert_eq!(formatter.format(&time).unwrap(), "07h45");
        assert_eq!(formatter.parse::<NaiveTime>("07h45").unwrap(), time);
        assert_eq!(formatter.to_string(), "%Hh%M");
    }

    #[test]
    fn date_pattern_on_a_time_should_fail_to_format() {
        let formatter = DateTimeFormatter::of_pattern("%Y-%m-%d").unwrap();
        let time = local_time(7, 45, 0, 0).unwrap();

        assert!(matches!(formatter.format(&time), Err(CodecError::Format(_))));
    }
}
