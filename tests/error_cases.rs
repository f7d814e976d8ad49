mod common;

use common::{MockFile, MockGenerator};

use mockall::{Sequence, predicate::eq};
use std::io::{self, ErrorKind};

use temporal_json_rs::{
    core::{
        codec::JsonSerializer,
        context::{SerializationFeature, SerializerProvider},
    },
    error::CodecError,
    json::WriterGenerator,
    mapper::TemporalMapper,
    ser::{LOCAL_DATE_TIME_SERIALIZER, LOCAL_TIME_SERIALIZER},
    temporal::{local_date_time, local_time},
};

#[test]
fn write_error_should_surface_as_io_error() {
    let mut file = MockFile::default();
    file.expect_write().times(1).returning(|_buf| {
        let err = io::Error::from(ErrorKind::PermissionDenied);
        Result::Err(err)
    });

    let value = local_time(12, 0, 0, 0).unwrap();
    let result = TemporalMapper::default().write_value(file, &value, &LOCAL_TIME_SERIALIZER);

    match result {
        Err(CodecError::Io(error)) => assert_eq!(error.kind(), ErrorKind::PermissionDenied),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn flush_error_should_surface_as_io_error() {
    let mut file = MockFile::default();
    file.expect_write().returning(|buf| Ok(buf.len()));
    file.expect_flush()
        .times(1)
        .returning(|| Err(io::Error::from(ErrorKind::BrokenPipe)));

    let value = local_date_time(2015, 3, 14, 9, 30, 0, 0).unwrap();
    let result =
        TemporalMapper::default().write_value(file, &value, &LOCAL_DATE_TIME_SERIALIZER);

    assert!(matches!(result, Err(CodecError::Io(_))));
}

#[test]
fn writer_generator_should_stop_at_the_first_failure() {
    let mut file = MockFile::default();
    let mut calls = 0;
    file.expect_write().times(2).returning(move |buf| {
        calls += 1;
        if calls == 1 {
            Ok(buf.len())
        } else {
            Err(io::Error::from(ErrorKind::WriteZero))
        }
    });

    let mut generator = WriterGenerator::new(file);
    let value = local_time(12, 30, 0, 0).unwrap();
    let result = LOCAL_TIME_SERIALIZER.serialize(&value, &mut generator, &SerializerProvider::new());

    assert!(matches!(result, Err(CodecError::Io(_))));
}

#[test]
fn date_time_array_should_be_emitted_in_order() {
    let mut generator = MockGenerator::new();
    let mut seq = Sequence::new();

    generator
        .expect_write_start_array()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(()));
    for field in [2015, 3, 14, 9, 30, 26, 535] {
        generator
            .expect_write_number()
            .with(eq(field))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
    }
    generator
        .expect_write_end_array()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(()));

    let provider =
        SerializerProvider::new().disable(SerializationFeature::WriteDateTimestampsAsNanoseconds);
    let value = local_date_time(2015, 3, 14, 9, 30, 26, 535_897_932).unwrap();

    LOCAL_DATE_TIME_SERIALIZER
        .serialize(&value, &mut generator, &provider)
        .unwrap();
}

#[test]
fn string_mode_should_emit_a_single_string() {
    let mut generator = MockGenerator::new();
    generator
        .expect_write_string()
        .with(eq("09:30:15"))
        .times(1)
        .returning(|_| Ok(()));
    generator.expect_write_start_array().never();
    generator.expect_write_number().never();

    let provider = SerializerProvider::new().disable(SerializationFeature::WriteDatesAsTimestamps);
    let value = local_time(9, 30, 15, 0).unwrap();

    LOCAL_TIME_SERIALIZER
        .serialize(&value, &mut generator, &provider)
        .unwrap();
}

#[test]
fn generator_failure_should_abort_serialization() {
    let mut generator = MockGenerator::new();
    generator.expect_write_start_array().returning(|| Ok(()));
    generator
        .expect_write_number()
        .times(1)
        .returning(|_| Err(CodecError::Generation("sink closed".to_string())));
    generator.expect_write_end_array().never();

    let value = local_time(9, 30, 0, 0).unwrap();
    let result = LOCAL_TIME_SERIALIZER.serialize(&value, &mut generator, &SerializerProvider::new());

    assert!(matches!(result, Err(CodecError::Generation(_))));
}
