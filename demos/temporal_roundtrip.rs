use anyhow::Result;
use chrono::{NaiveDateTime, NaiveTime};
use log::info;
use serde::{Deserialize, Serialize};

use temporal_json_rs::{
    core::{
        codec::{JsonFormat, Shape},
        context::{MapperConfig, SerializationFeature},
    },
    deser::{DateTimeDeserializerBase, LOCAL_DATE_TIME_DESERIALIZER, LOCAL_TIME_DESERIALIZER},
    mapper::{TemporalMapper, TemporalMapperBuilder},
    ser::{FormattedSerializer, LOCAL_DATE_TIME_SERIALIZER, LOCAL_TIME_SERIALIZER},
};

#[derive(Debug, Serialize, Deserialize)]
struct Departure {
    flight: String,
    #[serde(with = "temporal_json_rs::adapter::local_date_time")]
    scheduled: NaiveDateTime,
    #[serde(with = "temporal_json_rs::adapter::local_time")]
    boarding: NaiveTime,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    // Struct fields through the serde adapters
    let json = r#"{
        "flight": "AF1234",
        "scheduled": "2024-07-01T18:05:30",
        "boarding": [17, 35]
    }"#;
    let departure: Departure = serde_json::from_str(json)?;
    info!("Decoded {:?}", departure);
    info!("Encoded {}", serde_json::to_string(&departure)?);

    // Single values with a configuration loaded from JSON
    let config = MapperConfig::from_json_str(
        r#"{ "write_dates_as_timestamps": false, "read_date_timestamps_as_nanoseconds": false }"#,
    )?;
    let mapper = TemporalMapper::new(config);

    let scheduled = mapper
        .read_value("[2024, 7, 1, 18, 5, 30, 250]", &LOCAL_DATE_TIME_DESERIALIZER)?
        .unwrap_or(departure.scheduled);
    info!(
        "Millisecond array read as {}",
        mapper.write_value_as_string(&scheduled, &LOCAL_DATE_TIME_SERIALIZER)?
    );

    // Field level overrides leave the shared codecs untouched
    let format = JsonFormat::new().with_pattern("%I:%M %p").with_shape(Shape::String);
    let serializer = LOCAL_TIME_SERIALIZER.create_contextual(&format)?;
    let deserializer = LOCAL_TIME_DESERIALIZER.create_contextual(&format)?;

    let arrays = TemporalMapperBuilder::new()
        .enable_serialization(SerializationFeature::WriteDatesAsTimestamps)
        .build();
    let boarding = arrays.write_value_as_string(&departure.boarding, &serializer)?;
    info!("Boarding with pattern: {}", boarding);
    info!(
        "Boarding with defaults: {}",
        arrays.write_value_as_string(&departure.boarding, &LOCAL_TIME_SERIALIZER)?
    );

    let parsed = arrays.read_value(&boarding, &deserializer)?;
    info!("Pattern text read back as {:?}", parsed);

    // Empty values decode as absent
    let empty = arrays.read_value("[]", &LOCAL_TIME_DESERIALIZER)?;
    info!("Empty array read as {:?}", empty);

    Ok(())
}
