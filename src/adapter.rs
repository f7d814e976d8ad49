use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use serde_json::Value;

use crate::{
    core::codec::{JsonDeserializer, JsonSerializer},
    error::CodecError,
    mapper::TemporalMapper,
};

fn serialize_with<T, C, S>(value: &T, codec: &C, serializer: S) -> Result<S::Ok, S::Error>
where
    C: JsonSerializer<T>,
    S: Serializer,
{
    TemporalMapper::default()
        .write_value_as_json(value, codec)
        .map_err(<S::Error as ser::Error>::custom)?
        .serialize(serializer)
}

fn deserialize_with<'de, T, C, D>(codec: &C, deserializer: D) -> Result<T, D::Error>
where
    C: JsonDeserializer<T>,
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    TemporalMapper::default()
        .read_json_value(&value, codec)
        .map_err(<D::Error as de::Error>::custom)?
        .ok_or_else(|| {
            <D::Error as de::Error>::custom(CodecError::NullValue(codec.handled_type().to_string()))
        })
}

/// Adapter for `chrono::NaiveDateTime` fields.
pub mod local_date_time {
    use chrono::NaiveDateTime;
    use serde::{Deserializer, Serializer};

    use crate::{deser::LOCAL_DATE_TIME_DESERIALIZER, ser::LOCAL_DATE_TIME_SERIALIZER};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        super::serialize_with(value, &LOCAL_DATE_TIME_SERIALIZER, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        super::deserialize_with(&LOCAL_DATE_TIME_DESERIALIZER, deserializer)
    }
}

/// Adapter for `chrono::NaiveTime` fields.
pub mod local_time {
    use chrono::NaiveTime;
    use serde::{Deserializer, Serializer};

    use crate::{deser::LOCAL_TIME_DESERIALIZER, ser::LOCAL_TIME_SERIALIZER};

    pub fn serialize<S: Serializer>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        super::serialize_with(value, &LOCAL_TIME_SERIALIZER, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        super::deserialize_with(&LOCAL_TIME_DESERIALIZER, deserializer)
    }
}
