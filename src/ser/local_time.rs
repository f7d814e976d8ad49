use std::sync::Arc;

use chrono::{NaiveTime, Timelike};
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
pub static LOCAL_TIME_SERIALIZER: LocalTimeSerializer = LocalTimeSerializer::new();

/// Encodes a `NaiveTime` as `[hour, minute, [second, [fraction]]]` or as a
/// string.
///
/// # Examples
///
/// ```
/// use temporal_json_rs::core::codec::JsonSerializer;
/// use temporal_json_rs::core::context::{SerializationFeature, SerializerProvider};
/// use temporal_json_rs::json::ValueGenerator;
/// use temporal_json_rs::ser::local_time::LOCAL_TIME_SERIALIZER;
/// use temporal_json_rs::temporal::local_time;
/// use serde_json::json;
///
/// let time = local_time(12, 0, 5, 123_000_000).unwrap();
/// let provider = SerializerProvider::new().disable(SerializationFeature::WriteDateTimestampsAsNanoseconds);
///
/// let mut generator = ValueGenerator::new();
/// LOCAL_TIME_SERIALIZER.serialize(&time, &mut generator, &provider).unwrap();
///
/// assert_eq!(generator.into_value().unwrap(), json!([12, 0, 5, 123]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocalTimeSerializer {
    base: FormattedSerializerBase,
}

impl LocalTimeSerializer {
    pub const fn new() -> Self {
        Self {
            base: FormattedSerializerBase::new(None, None),
        }
    }
}

impl JsonSerializer<NaiveTime> for LocalTimeSerializer {
    fn serialize(
        &self,
        value: &NaiveTime,
        generator: &mut dyn JsonGenerator,
        provider: &SerializerProvider,
    ) -> Result<(), CodecError> {
        if self.use_timestamp(provider) {
            trace!("Writing LocalTime {} as array", value);
            generator.write_start_array()?;
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
        TemporalType::LocalTime
    }
}

impl FormattedSerializer<NaiveTime> for LocalTimeSerializer {
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
