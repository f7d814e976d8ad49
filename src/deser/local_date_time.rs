use std::sync::Arc;

use chrono::NaiveDateTime;
use log::trace;

use crate::{
    core::{
        codec::{JsonDeserializer, TemporalType},
        context::DeserializationContext,
        format::DateTimeFormatter,
        token::{JsonParser, JsonToken},
    },
    deser::base::{
        DateTimeDeserializerBase, deserialize_text, expect_array_end, fraction_to_nanos,
        unexpected_token,
    },
    error::CodecError,
    temporal::local_date_time,
};

/// Default deserializer, parsing strings as ISO-8601.
pub static LOCAL_DATE_TIME_DESERIALIZER: LocalDateTimeDeserializer = LocalDateTimeDeserializer::new();

/// Decodes a `NaiveDateTime` from either JSON representation.
///
/// - array: `[year, month, day, hour, minute, [second, [fraction]]]`
/// - string: ISO-8601 `YYYY-MM-DDTHH:MM[:SS[.fraction]]`, or the bound pattern
///
/// An empty array and a blank string both decode to `None`.
///
/// # Examples
///
/// ```
/// use temporal_json_rs::core::codec::JsonDeserializer;
/// use temporal_json_rs::core::context::DeserializationContext;
/// use temporal_json_rs::deser::local_date_time::LOCAL_DATE_TIME_DESERIALIZER;
/// use temporal_json_rs::json::ValueTokenStream;
/// use temporal_json_rs::temporal::local_date_time;
///
/// let context = DeserializationContext::new();
///
/// let mut parser: ValueTokenStream = "[2015, 3, 14, 9, 30, 26]".parse().unwrap();
/// let value = LOCAL_DATE_TIME_DESERIALIZER.deserialize(&mut parser, &context).unwrap();
/// assert_eq!(value, Some(local_date_time(2015, 3, 14, 9, 30, 26, 0).unwrap()));
///
/// let mut parser: ValueTokenStream = r#""2015-03-14T09:30:26""#.parse().unwrap();
/// let value = LOCAL_DATE_TIME_DESERIALIZER.deserialize(&mut parser, &context).unwrap();
/// assert_eq!(value, Some(local_date_time(2015, 3, 14, 9, 30, 26, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocalDateTimeDeserializer {
    formatter: Option<Arc<DateTimeFormatter>>,
}

impl LocalDateTimeDeserializer {
    pub const fn new() -> Self {
        Self { formatter: None }
    }

    fn deserialize_array(
        &self,
        parser: &mut dyn JsonParser,
        context: &DeserializationContext,
    ) -> Result<Option<NaiveDateTime>, CodecError> {
        if parser.next_token()? == Some(JsonToken::EndArray) {
            trace!("Empty LocalDateTime array decoded as absent");
            return Ok(None);
        }
        let year = parser.int_value()?;

        parser.next_token()?;
        let month = parser.int_value()?;

        parser.next_token()?;
        let day = parser.int_value()?;

        parser.next_token()?;
        let hour = parser.int_value()?;

        parser.next_token()?;
        let minute = parser.int_value()?;

        let (second, nano) = if parser.next_token()? == Some(JsonToken::EndArray) {
            (0, 0)
        } else {
            let second = parser.int_value()?;

            if parser.next_token()? == Some(JsonToken::EndArray) {
                (second, 0)
            } else {
                let nano = fraction_to_nanos(parser.int_value()?, context);
                expect_array_end(parser, context)?;
                (second, nano)
            }
        };

        let value = local_date_time(
            year.into(),
            month.into(),
            day.into(),
            hour.into(),
            minute.into(),
            second.into(),
            nano,
        )?;
        Ok(Some(value))
    }
}

impl JsonDeserializer<NaiveDateTime> for LocalDateTimeDeserializer {
    fn deserialize(
        &self,
        parser: &mut dyn JsonParser,
        context: &DeserializationContext,
    ) -> Result<Option<NaiveDateTime>, CodecError> {
        match parser.current_token() {
            Some(JsonToken::StartArray) => self.deserialize_array(parser, context),
            Some(JsonToken::ValueString) => deserialize_text(self.formatter.as_ref(), parser),
            _ => Err(unexpected_token(parser, context)),
        }
    }

    fn handled_type(&self) -> TemporalType {
        TemporalType::LocalDateTime
    }
}

impl DateTimeDeserializerBase<NaiveDateTime> for LocalDateTimeDeserializer {
    fn formatter(&self) -> Option<&Arc<DateTimeFormatter>> {
        self.formatter.as_ref()
    }

    fn with_date_format(&self, formatter: Arc<DateTimeFormatter>) -> Self {
        Self {
            formatter: Some(formatter),
        }
    }
}
