use std::io::Write;

use log::debug;
use serde_json::Value;

use crate::{
    core::{
        codec::{JsonDeserializer, JsonSerializer},
        context::{DeserializationFeature, MapperConfig, SerializationFeature},
    },
    error::CodecError,
    json::{ValueGenerator, ValueTokenStream, WriterGenerator},
};

/// Reads and writes single temporal JSON values with a fixed configuration.
///
/// # Examples
///
/// ```
/// use temporal_json_rs::core::context::SerializationFeature;
/// use temporal_json_rs::deser::LOCAL_TIME_DESERIALIZER;
/// use temporal_json_rs::mapper::TemporalMapperBuilder;
/// use temporal_json_rs::ser::LOCAL_TIME_SERIALIZER;
///
/// let mapper = TemporalMapperBuilder::new()
///     .disable_serialization(SerializationFeature::WriteDatesAsTimestamps)
///     .build();
///
/// let time = mapper.read_value("[9, 30, 15]", &LOCAL_TIME_DESERIALIZER).unwrap().unwrap();
/// let json = mapper.write_value_as_string(&time, &LOCAL_TIME_SERIALIZER).unwrap();
///
/// assert_eq!(json, r#""09:30:15""#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemporalMapper {
    config: MapperConfig,
}

impl TemporalMapper {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Decodes a JSON document holding a single temporal value.
    ///
    /// # Returns
    /// - `Ok(Some(value))` when the document holds a value
    /// - `Ok(None)` for `[]` or a blank string
    /// - `Err(CodecError::Json(_))` when the document is not valid JSON
    pub fn read_value<T, D: JsonDeserializer<T> + ?Sized>(
        &self,
        json: &str,
        deserializer: &D,
    ) -> Result<Option<T>, CodecError> {
        let mut parser: ValueTokenStream = json.parse()?;
        self.read_from(&mut parser, deserializer)
    }

    /// Decodes an already parsed JSON value.
    pub fn read_json_value<T, D: JsonDeserializer<T> + ?Sized>(
        &self,
        value: &Value,
        deserializer: &D,
    ) -> Result<Option<T>, CodecError> {
        let mut parser = ValueTokenStream::new(value);
        self.read_from(&mut parser, deserializer)
    }

    fn read_from<T, D: JsonDeserializer<T> + ?Sized>(
        &self,
        parser: &mut ValueTokenStream,
        deserializer: &D,
    ) -> Result<Option<T>, CodecError> {
        debug!("Reading {} value", deserializer.handled_type());
        deserializer.deserialize(parser, &self.config.deserialization_context())
    }

    pub fn write_value_as_json<T, S: JsonSerializer<T> + ?Sized>(
        &self,
        value: &T,
        serializer: &S,
    ) -> Result<Value, CodecError> {
        let mut generator = ValueGenerator::new();
        serializer.serialize(value, &mut generator, &self.config.serializer_provider())?;
        generator.into_value()
    }

    pub fn write_value_as_string<T, S: JsonSerializer<T> + ?Sized>(
        &self,
        value: &T,
        serializer: &S,
    ) -> Result<String, CodecError> {
        let mut buffer = Vec::new();
        self.write_value(&mut buffer, value, serializer)?;
        String::from_utf8(buffer).map_err(|error| CodecError::Generation(error.to_string()))
    }

    /// Writes a value as compact JSON text and flushes the writer.
    pub fn write_value<W: Write, T, S: JsonSerializer<T> + ?Sized>(
        &self,
        writer: W,
        value: &T,
        serializer: &S,
    ) -> Result<(), CodecError> {
        debug!("Writing {} value", serializer.handled_type());
        let mut generator = WriterGenerator::new(writer);
        serializer.serialize(value, &mut generator, &self.config.serializer_provider())?;
        generator.flush()
    }
}

/// Builder for [`TemporalMapper`], starting from the default configuration.
#[derive(Debug, Default)]
pub struct TemporalMapperBuilder {
    config: MapperConfig,
}

impl TemporalMapperBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: MapperConfig) -> Self {
        self.config = config;
        self
    }

    pub fn enable_serialization(mut self, feature: SerializationFeature) -> Self {
        self.config.set_serialization(feature, true);
        self
    }

    pub fn disable_serialization(mut self, feature: SerializationFeature) -> Self {
        self.config.set_serialization(feature, false);
        self
    }

    pub fn enable_deserialization(mut self, feature: DeserializationFeature) -> Self {
        self.config.set_deserialization(feature, true);
        self
    }

    pub fn disable_deserialization(mut self, feature: DeserializationFeature) -> Self {
        self.config.set_deserialization(feature, false);
        self
    }

    pub fn build(self) -> TemporalMapper {
        TemporalMapper::new(self.config)
    }
}
