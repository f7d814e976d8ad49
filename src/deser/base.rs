use std::sync::Arc;

use log::{debug, trace};

use crate::{
    core::{
        codec::{JsonDeserializer, JsonFormat},
        context::{DeserializationContext, DeserializationFeature},
        format::DateTimeFormatter,
        token::{JsonParser, JsonToken},
    },
    error::CodecError,
    temporal::{LocalTemporal, NANOS_PER_MILLI},
};

/// Fractional-second values below this are milliseconds unless the context
/// reads timestamps as nanoseconds.
pub const MILLIS_THRESHOLD: i32 = 1000;

/// Common contract of every local date/time deserializer.
///
/// Deserializers are immutable: rebinding a formatter always yields a new
/// instance and leaves `self`, possibly a shared default instance, untouched.
pub trait DateTimeDeserializerBase<T: LocalTemporal>: JsonDeserializer<T> + Clone + Sized {
    /// Formatter used for the string form, `None` meaning ISO-8601.
    fn formatter(&self) -> Option<&Arc<DateTimeFormatter>>;

    /// Returns a copy of this deserializer parsing strings with `formatter`.
    fn with_date_format(&self, formatter: Arc<DateTimeFormatter>) -> Self;

    /// Applies a field level format override.
    ///
    /// A pattern rebinds the formatter through [`Self::with_date_format`];
    /// without one the deserializer is returned unchanged.
    ///
    /// # Errors
    /// `CodecError::InvalidPattern` when the pattern does not compile.
    fn create_contextual(&self, format: &JsonFormat) -> Result<Self, CodecError> {
        match format.pattern() {
            Some(pattern) => {
                debug!("Binding pattern '{}' to {} deserializer", pattern, T::TYPE);
                let formatter = DateTimeFormatter::of_pattern(pattern)?;
                Ok(self.with_date_format(Arc::new(formatter)))
            }
            None => Ok(self.clone()),
        }
    }
}

/// Converts the fractional-second array element to nanoseconds.
///
/// Values below [`MILLIS_THRESHOLD`] are ambiguous; unless the context reads
/// timestamps as nanoseconds they are taken as milliseconds.
pub fn fraction_to_nanos(fraction: i32, context: &DeserializationContext) -> i64 {
    if fraction < MILLIS_THRESHOLD
        && !context.is_enabled(DeserializationFeature::ReadDateTimestampsAsNanoseconds)
    {
        fraction as i64 * NANOS_PER_MILLI
    } else {
        fraction as i64
    }
}

/// Moves past the last array element, failing if the array does not close.
pub fn expect_array_end(
    parser: &mut dyn JsonParser,
    context: &DeserializationContext,
) -> Result<(), CodecError> {
    if parser.next_token()? != Some(JsonToken::EndArray) {
        return Err(context.wrong_token_error(parser, JsonToken::EndArray, "Expected array to end."));
    }
    Ok(())
}

/// Decodes the string form: blank text is `None`, anything else is parsed
/// with the bound formatter or as ISO-8601.
pub fn deserialize_text<T: LocalTemporal>(
    formatter: Option<&Arc<DateTimeFormatter>>,
    parser: &dyn JsonParser,
) -> Result<Option<T>, CodecError> {
    let text = parser.text()?.trim();

    if text.is_empty() {
        trace!("Blank {} string decoded as absent", T::TYPE);
        return Ok(None);
    }

    let value = match formatter {
        Some(formatter) => formatter.parse(text)?,
        None => T::parse_iso(text)?,
    };
    Ok(Some(value))
}

/// Reports a token that is neither an array start nor a string.
pub fn unexpected_token(parser: &dyn JsonParser, context: &DeserializationContext) -> CodecError {
    context.wrong_token_error(parser, JsonToken::StartArray, "Expected array or string.")
}
