use serde_json::json;

use temporal_json_rs::{
    core::{
        codec::{JsonFormat, Shape},
        context::{DeserializationFeature, SerializationFeature},
    },
    deser::{DateTimeDeserializerBase, LOCAL_TIME_DESERIALIZER},
    error::{CodecError, DateTimeError},
    mapper::{TemporalMapper, TemporalMapperBuilder},
    ser::{FormattedSerializer, LOCAL_TIME_SERIALIZER},
    temporal::local_time,
};

#[test]
fn noon_should_write_two_elements() {
    let mapper = TemporalMapper::default();
    let noon = local_time(12, 0, 0, 0).unwrap();

    assert_eq!(
        mapper.write_value_as_string(&noon, &LOCAL_TIME_SERIALIZER).unwrap(),
        "[12,0]"
    );
    assert_eq!(
        mapper.read_value("[12,0]", &LOCAL_TIME_DESERIALIZER).unwrap(),
        Some(noon)
    );
}

#[test]
fn fraction_should_follow_the_nanoseconds_feature() {
    let value = local_time(12, 0, 5, 123_000_000).unwrap();
    let nanos = TemporalMapper::default();
    let millis = TemporalMapperBuilder::new()
        .disable_serialization(SerializationFeature::WriteDateTimestampsAsNanoseconds)
        .build();

    assert_eq!(
        nanos.write_value_as_json(&value, &LOCAL_TIME_SERIALIZER).unwrap(),
        json!([12, 0, 5, 123000000])
    );
    assert_eq!(
        millis.write_value_as_json(&value, &LOCAL_TIME_SERIALIZER).unwrap(),
        json!([12, 0, 5, 123])
    );
}

#[test]
fn iso_strings_should_be_read_and_written() {
    let mapper = TemporalMapperBuilder::new()
        .disable_serialization(SerializationFeature::WriteDatesAsTimestamps)
        .build();

    let value = mapper
        .read_value(r#"" 23:59:59.999 ""#, &LOCAL_TIME_DESERIALIZER)
        .unwrap()
        .unwrap();
    assert_eq!(value, local_time(23, 59, 59, 999_000_000).unwrap());
    assert_eq!(
        mapper.write_value_as_string(&value, &LOCAL_TIME_SERIALIZER).unwrap(),
        r#""23:59:59.999""#
    );

    let short = mapper.read_value(r#""07:05""#, &LOCAL_TIME_DESERIALIZER).unwrap();
    assert_eq!(short, Some(local_time(7, 5, 0, 0).unwrap()));
}

#[test]
fn millisecond_reading_should_scale_small_fractions() {
    let mapper = TemporalMapperBuilder::new()
        .disable_deserialization(DeserializationFeature::ReadDateTimestampsAsNanoseconds)
        .build();

    assert_eq!(
        mapper.read_value("[12, 0, 5, 123]", &LOCAL_TIME_DESERIALIZER).unwrap(),
        Some(local_time(12, 0, 5, 123_000_000).unwrap())
    );
}

#[test]
fn out_of_range_fields_should_be_reported() {
    let result = TemporalMapper::default().read_value("[12, 60]", &LOCAL_TIME_DESERIALIZER);

    assert_eq!(
        result.unwrap_err().to_string(),
        DateTimeError::InvalidField {
            field: "MinuteOfHour",
            value: 60,
            min: 0,
            max: 59
        }
        .to_string()
    );
}

#[test]
fn trailing_element_should_be_rejected() {
    let result = TemporalMapper::default().read_value("[12, 0, 5, 1, 2]", &LOCAL_TIME_DESERIALIZER);

    assert!(matches!(result, Err(CodecError::WrongToken { .. })));
}

#[test]
fn contextual_codecs_should_not_alter_the_defaults() {
    let format = JsonFormat::new().with_pattern("%H.%M").with_shape(Shape::String);
    let deserializer = LOCAL_TIME_DESERIALIZER.create_contextual(&format).unwrap();
    let serializer = LOCAL_TIME_SERIALIZER.create_contextual(&format).unwrap();
    let mapper = TemporalMapper::default();
    let value = local_time(18, 45, 0, 0).unwrap();

    assert_eq!(mapper.write_value_as_string(&value, &serializer).unwrap(), r#""18.45""#);
    assert_eq!(mapper.read_value(r#""18.45""#, &deserializer).unwrap(), Some(value));

    assert_eq!(
        mapper.write_value_as_string(&value, &LOCAL_TIME_SERIALIZER).unwrap(),
        "[18,45]"
    );
    assert!(LOCAL_TIME_DESERIALIZER.formatter().is_none());
}

#[test]
fn lenient_iso_text_should_be_rejected() {
    let mapper = TemporalMapper::default();

    for json in [r#""9:30""#, r#""09:30:15.1234567891""#, r#""09:30:5""#] {
        let result = mapper.read_value(json, &LOCAL_TIME_DESERIALIZER);
        assert!(
            matches!(result, Err(CodecError::Unparseable { .. })),
            "{json} should not decode"
        );
    }
}

#[test]
fn boundary_times_should_round_trip_in_both_forms() {
    let arrays = TemporalMapper::default();
    let strings = TemporalMapperBuilder::new()
        .disable_serialization(SerializationFeature::WriteDatesAsTimestamps)
        .build();

    for hour in [0, 23] {
        for minute in [0, 59] {
            for second in [0, 59] {
                for nano in [0, 1, 999, 1000, 999_999_999] {
                    let value = local_time(hour, minute, second, nano).unwrap();

                    for mapper in [&arrays, &strings] {
                        let json = mapper
                            .write_value_as_string(&value, &LOCAL_TIME_SERIALIZER)
                            .unwrap();
                        assert_eq!(
                            mapper.read_value(&json, &LOCAL_TIME_DESERIALIZER).unwrap(),
                            Some(value),
                            "{json} did not round trip"
                        );
                    }
                }
            }
        }
    }
}
