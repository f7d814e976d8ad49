use std::sync::Arc;

use chrono::NaiveTime;
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
    temporal::local_time,
};

/// Default deserializer, parsing strings as ISO-8601.
pub static LOCAL_TIME_DESERIALIZER: LocalTimeDeserializer = LocalTimeDeserializer::new();

/// Decodes a `NaiveTime` from `[hour, minute, [second, [fraction]]]` or from
/// an ISO-8601 `HH:MM[:SS[.fraction]]` string.
#[derive(Debug, Clone, Default)]
pub struct LocalTimeDeserializer {
    formatter: Option<Arc<DateTimeFormatter>>,
}

impl LocalTimeDeserializer {
    pub const fn new() -> Self {
        Self { formatter: None }
    }

    fn deserialize_array(
        &self,
        parser: &mut dyn JsonParser,
        context: &DeserializationContext,
    ) -> Result<Option<NaiveTime>, CodecError> {
        if parser.next_token()? == Some(JsonToken::EndArray) {
            trace!("Empty LocalTime array decoded as absent");
            return Ok(None);
        }
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

        Ok(Some(local_time(hour.into(), minute.into(), second.into(), nano)?))
    }
}

impl JsonDeserializer<NaiveTime> for LocalTimeDeserializer {
    fn deserialize(
        &self,
        parser: &mut dyn JsonParser,
        context: &DeserializationContext,
    ) -> Result<Option<NaiveTime>, CodecError> {
        match parser.current_token() {
            Some(JsonToken::StartArray) => self.deserialize_array(parser, context),
            Some(JsonToken::ValueString) => deserialize_text(self.formatter.as_ref(), parser),
            _ => Err(unexpected_token(parser, context)),
        }
    }

    fn handled_type(&self) -> TemporalType {
        TemporalType::LocalTime
    }
}

impl DateTimeDeserializerBase<NaiveTime> for LocalTimeDeserializer {
    fn formatter(&self) -> Option<&Arc<DateTimeFormatter>> {
        self.formatter.as_ref()
    }

    fn with_date_format(&self, formatter: Arc<DateTimeFormatter>) -> Self {
        Self {
            formatter: Some(formatter),
        }
    }
}
