use std::sync::Arc;

use log::debug;

use crate::{
    core::{
        codec::{JsonFormat, JsonSerializer},
        context::{SerializationFeature, SerializerProvider},
        format::DateTimeFormatter,
        generator::JsonGenerator,
    },
    error::CodecError,
    temporal::{LocalTemporal, NANOS_PER_MILLI},
};

/// Decides between the array and the string representation.
///
/// A per-field override always wins; without one the provider's
/// `WriteDatesAsTimestamps` feature decides.
///
/// # Examples
///
/// ```
/// use temporal_json_rs::core::context::{SerializationFeature, SerializerProvider};
/// use temporal_json_rs::ser::base::use_timestamp;
///
/// let strings = SerializerProvider::new().disable(SerializationFeature::WriteDatesAsTimestamps);
///
/// assert!(!use_timestamp(None, &strings));
/// assert!(use_timestamp(Some(true), &strings));
/// assert!(!use_timestamp(Some(false), &SerializerProvider::new()));
/// ```
pub fn use_timestamp(timestamp_override: Option<bool>, provider: &SerializerProvider) -> bool {
    timestamp_override
        .unwrap_or_else(|| provider.is_enabled(SerializationFeature::WriteDatesAsTimestamps))
}

/// State shared by every local date/time serializer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedSerializerBase {
    use_timestamp: Option<bool>,
    formatter: Option<Arc<DateTimeFormatter>>,
}

impl FormattedSerializerBase {
    pub const fn new(use_timestamp: Option<bool>, formatter: Option<Arc<DateTimeFormatter>>) -> Self {
        Self {
            use_timestamp,
            formatter,
        }
    }

    pub fn timestamp_override(&self) -> Option<bool> {
        self.use_timestamp
    }

    pub fn formatter(&self) -> Option<&Arc<DateTimeFormatter>> {
        self.formatter.as_ref()
    }

    pub fn use_timestamp(&self, provider: &SerializerProvider) -> bool {
        use_timestamp(self.use_timestamp, provider)
    }

    /// Renders the string form with the bound formatter or as ISO-8601.
    pub fn format_text<T: LocalTemporal>(&self, value: &T) -> Result<String, CodecError> {
        match &self.formatter {
            Some(formatter) => formatter.format(value),
            None => Ok(value.to_iso_string()),
        }
    }
}

/// Common contract of every local date/time serializer.
///
/// Reconfiguration never mutates `self`; it returns a new serializer.
pub trait FormattedSerializer<T: LocalTemporal>: JsonSerializer<T> + Clone + Sized {
    fn base(&self) -> &FormattedSerializerBase;

    /// Returns a copy with the given timestamp override and formatter.
    fn with_format(
        &self,
        use_timestamp: Option<bool>,
        formatter: Option<Arc<DateTimeFormatter>>,
    ) -> Self;

    fn use_timestamp(&self, provider: &SerializerProvider) -> bool {
        self.base().use_timestamp(provider)
    }

    /// Applies a field level format override.
    ///
    /// `Array` and `Number` shapes force the array form, `String` forces the
    /// string form, `Any` keeps the current setting. A pattern replaces the
    /// formatter.
    ///
    /// # Errors
    /// `CodecError::InvalidPattern` when the pattern does not compile.
    fn create_contextual(&self, format: &JsonFormat) -> Result<Self, CodecError> {
        let base = self.base();
        let use_timestamp = format.timestamp_override().or(base.timestamp_override());

        let formatter = match format.pattern() {
            Some(pattern) => Some(Arc::new(DateTimeFormatter::of_pattern(pattern)?)),
            None => base.formatter().cloned(),
        };

        if use_timestamp == base.timestamp_override() && format.pattern().is_none() {
            return Ok(self.clone());
        }

        debug!(
            "Reconfiguring {} serializer: use_timestamp={:?}, pattern={:?}",
            T::TYPE,
            use_timestamp,
            format.pattern()
        );
        Ok(self.with_format(use_timestamp, formatter))
    }
}

/// Writes the time-of-day tail of the array form.
///
/// `hour` and `minute` are always written, `second` only when it or the
/// nanoseconds are non-zero, and the fraction only for non-zero nanoseconds:
/// raw when `WriteDateTimestampsAsNanoseconds` is on, truncated to
/// milliseconds otherwise.
pub fn write_time_fields(
    generator: &mut dyn JsonGenerator,
    provider: &SerializerProvider,
    hour: u32,
    minute: u32,
    second: u32,
    nano: u32,
) -> Result<(), CodecError> {
    generator.write_number(hour.into())?;
    generator.write_number(minute.into())?;

    if second > 0 || nano > 0 {
        generator.write_number(second.into())?;

        if nano > 0 {
            if provider.is_enabled(SerializationFeature::WriteDateTimestampsAsNanoseconds) {
                generator.write_number(nano.into())?;
            } else {
                generator.write_number(i64::from(nano) / NANOS_PER_MILLI)?;
            }
        }
    }
    Ok(())
}
