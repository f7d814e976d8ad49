use std::sync::Arc;

use chrono::{Datelike, NaiveDateTime, Timelike};
use log::trace;

use crate::{
    core::{
        codec::{JsonSerializer, TemporalType},
        context::SerializerProvider,
        format::DateTimeFormatter,
        generator::JsonGenerator,
    },
    error::CodecError,
    ser::base::{FormattedSerializer, FormattedSerializerBase, write_time_fields},
};

/// Default serializer, following the global configuration.
pub static LOCAL_DATE_TIME_SERIALIZER: LocalDateTimeSerializer = LocalDateTimeSerializer::new();

/// Encodes a `NaiveDateTime` as
/// `[year, month, day, hour, minute, [second, [fraction]]]` or as a string.
#[derive(Debug, Clone, Default)]
pub struct LocalDateTimeSerializer {
    base: FormattedSerializerBase,
}

impl LocalDateTimeSerializer {
    pub const fn new() -> Self {
        Self {
            base: FormattedSerializerBase::new(None, None),
        }
    }
}

impl JsonSerializer<NaiveDateTime> for LocalDateTimeSerializer {
    fn serialize(
        &self,
        value: &NaiveDateTime,
        generator: &mut dyn JsonGenerator,
        provider: &SerializerProvider,
    ) -> Result<(), CodecError> {
        if self.use_timestamp(provider) {
            trace!("Writing LocalDateTime {} as array", value);
            generator.write_start_array()?;
            generator.write_number(value.year().into())?;
            generator.write_number(value.month().into())?;
            generator.write_number(value.day().into())?;
            write_time_fields(
                generator,
                provider,
                value.hour(),
                value.minute(),
                value.second(),
                value.nanosecond(),
            )?;
            generator.write_end_array()
        } else {
            generator.write_string(&self.base.format_text(value)?)
        }
    }

    fn handled_type(&self) -> TemporalType {
        TemporalType::LocalDateTime
    }
}

impl FormattedSerializer<NaiveDateTime> for LocalDateTimeSerializer {
    fn base(&self) -> &FormattedSerializerBase {
        &self.base
    }

    fn with_format(
        &self,
        use_timestamp: Option<bool>,
        formatter: Option<Arc<DateTimeFormatter>>,
    ) -> Self {
        Self {
            base: FormattedSerializerBase::new(use_timestamp, formatter),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use serde_json::{Value, json};

    use super::{LOCAL_DATE_TIME_SERIALIZER, LocalDateTimeSerializer};
    use crate::{
        core::{
            codec::{JsonFormat, JsonSerializer, Shape, TemporalType},
            context::{SerializationFeature, SerializerProvider},
        },
        error::CodecError,
        json::ValueGenerator,
        ser::base::FormattedSerializer,
        temporal::local_date_time,
    };

    fn encode_with(
        serializer: &LocalDateTimeSerializer,
        value: &NaiveDateTime,
        provider: &SerializerProvider,
    ) -> Result<Value, CodecError> {
        let mut generator = ValueGenerator::new();
        serializer.serialize(value, &mut generator, provider)?;
        generator.into_value()
    }

    #[test]
    fn whole_minutes_should_write_five_elements() {
        let value = local_date_time(2015, 3, 14, 9, 30, 0, 0).unwrap();

        assert_eq!(
            encode_with(&LOCAL_DATE_TIME_SERIALIZER, &value, &SerializerProvider::new()).unwrap(),
            json!([2015, 3, 14, 9, 30])
        );
    }

    #[test]
    fn sub_seconds_should_follow_the_nanoseconds_feature() {
        let value = local_date_time(2015, 3, 14, 9, 30, 26, 535_897_932).unwrap();

        assert_eq!(
            encode_with(&LOCAL_DATE_TIME_SERIALIZER, &value, &SerializerProvider::new()).unwrap(),
            json!([2015, 3, 14, 9, 30, 26, 535897932])
        );

        let millis =
            SerializerProvider::new().disable(SerializationFeature::WriteDateTimestampsAsNanoseconds);
        assert_eq!(
            encode_with(&LOCAL_DATE_TIME_SERIALIZER, &value, &millis).unwrap(),
            json!([2015, 3, 14, 9, 30, 26, 535])
        );
    }

    #[test]
    fn string_mode_should_write_iso_text() {
        let value = local_date_time(2015, 3, 14, 9, 30, 26, 0).unwrap();
        let strings = SerializerProvider::new().disable(SerializationFeature::WriteDatesAsTimestamps);

        assert_eq!(
            encode_with(&LOCAL_DATE_TIME_SERIALIZER, &value, &strings).unwrap(),
            json!("2015-03-14T09:30:26")
        );
    }

    #[test]
    fn contextual_pattern_should_render_strings() {
        let serializer = LOCAL_DATE_TIME_SERIALIZER
            .create_contextual(&JsonFormat::new().with_pattern("%d/%m/%Y %H:%M").with_shape(Shape::String))
            .unwrap();
        let value = local_date_time(2015, 3, 14, 9, 30, 0, 0).unwrap();

        assert_eq!(
            encode_with(&serializer, &value, &SerializerProvider::new()).unwrap(),
            json!("14/03/2015 09:30")
        );
        assert_eq!(
            encode_with(&LOCAL_DATE_TIME_SERIALIZER, &value, &SerializerProvider::new()).unwrap(),
            json!([2015, 3, 14, 9, 30])
        );
    }

    #[test]
    fn pattern_alone_should_not_switch_to_strings() {
        let serializer = LOCAL_DATE_TIME_SERIALIZER
            .create_contextual(&JsonFormat::new().with_pattern("%d/%m/%Y"))
            .unwrap();
        let value = local_date_time(2015, 3, 14, 9, 30, 0, 0).unwrap();

        assert_eq!(
            encode_with(&serializer, &value, &SerializerProvider::new()).unwrap(),
            json!([2015, 3, 14, 9, 30])
        );
    }

    #[test]
    fn handled_type_should_be_local_date_time() {
        assert_eq!(
            LOCAL_DATE_TIME_SERIALIZER.handled_type(),
            TemporalType::LocalDateTime
        );
    }
}
