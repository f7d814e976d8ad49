use serde::{Deserialize, Serialize};

use crate::{
    core::token::{JsonParser, JsonToken, describe},
    error::CodecError,
};

/// Features consulted while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeserializationFeature {
    /// Fractional-second array elements are always nanoseconds.
    ///
    /// When disabled, values below 1000 are read as milliseconds.
    ReadDateTimestampsAsNanoseconds,
}

/// Features consulted while encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SerializationFeature {
    /// Write temporal values as numeric arrays instead of ISO strings.
    WriteDatesAsTimestamps,
    /// Write the fractional-second array element as nanoseconds instead of milliseconds.
    WriteDateTimestampsAsNanoseconds,
}

/// Global codec configuration.
///
/// All flags default to `true`. The struct can be loaded from any serde
/// format; missing keys keep their default value.
///
/// # Examples
///
/// ```
/// use temporal_json_rs::core::context::MapperConfig;
///
/// let config = MapperConfig::from_json_str(r#"{ "write_dates_as_timestamps": false }"#).unwrap();
///
/// assert!(!config.write_dates_as_timestamps);
/// assert!(config.write_date_timestamps_as_nanoseconds);
/// assert!(config.read_date_timestamps_as_nanoseconds);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    pub write_dates_as_timestamps: bool,
    pub write_date_timestamps_as_nanoseconds: bool,
    pub read_date_timestamps_as_nanoseconds: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            write_dates_as_timestamps: true,
            write_date_timestamps_as_nanoseconds: true,
            read_date_timestamps_as_nanoseconds: true,
        }
    }
}

impl MapperConfig {
    /// Parses a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, CodecError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn set_deserialization(&mut self, feature: DeserializationFeature, state: bool) {
        match feature {
            DeserializationFeature::ReadDateTimestampsAsNanoseconds => {
                self.read_date_timestamps_as_nanoseconds = state
            }
        }
    }

    pub fn set_serialization(&mut self, feature: SerializationFeature, state: bool) {
        match feature {
            SerializationFeature::WriteDatesAsTimestamps => self.write_dates_as_timestamps = state,
            SerializationFeature::WriteDateTimestampsAsNanoseconds => {
                self.write_date_timestamps_as_nanoseconds = state
            }
        }
    }

    pub fn deserialization_context(&self) -> DeserializationContext {
        DeserializationContext { config: *self }
    }

    pub fn serializer_provider(&self) -> SerializerProvider {
        SerializerProvider { config: *self }
    }
}

/// Context handed to every deserializer call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeserializationContext {
    config: MapperConfig,
}

impl DeserializationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(mut self, feature: DeserializationFeature) -> Self {
        self.config.set_deserialization(feature, true);
        self
    }

    pub fn disable(mut self, feature: DeserializationFeature) -> Self {
        self.config.set_deserialization(feature, false);
        self
    }

    pub fn is_enabled(&self, feature: DeserializationFeature) -> bool {
        match feature {
            DeserializationFeature::ReadDateTimestampsAsNanoseconds => {
                self.config.read_date_timestamps_as_nanoseconds
            }
        }
    }

    /// Builds the error reported when the parser sits on an unexpected token.
    pub fn wrong_token_error(
        &self,
        parser: &dyn JsonParser,
        expected: JsonToken,
        message: &str,
    ) -> CodecError {
        CodecError::WrongToken {
            expected,
            actual: describe(parser.current_token()),
            message: message.to_string(),
        }
    }
}

/// Context handed to every serializer call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializerProvider {
    config: MapperConfig,
}

impl SerializerProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(mut self, feature: SerializationFeature) -> Self {
        self.config.set_serialization(feature, true);
        self
    }

    pub fn disable(mut self, feature: SerializationFeature) -> Self {
        self.config.set_serialization(feature, false);
        self
    }

    pub fn is_enabled(&self, feature: SerializationFeature) -> bool {
        match feature {
            SerializationFeature::WriteDatesAsTimestamps => self.config.write_dates_as_timestamps,
            SerializationFeature::WriteDateTimestampsAsNanoseconds => {
                self.config.write_date_timestamps_as_nanoseconds
            }
        }
    }
}
