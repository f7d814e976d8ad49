use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    core::{
        context::{DeserializationContext, SerializerProvider},
        generator::JsonGenerator,
        token::JsonParser,
    },
    error::CodecError,
};

/// Tag identifying the target type of a codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalType {
    LocalDateTime,
    LocalTime,
}

impl fmt::Display for TemporalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemporalType::LocalDateTime => f.write_str("LocalDateTime"),
            TemporalType::LocalTime => f.write_str("LocalTime"),
        }
    }
}

/// Decodes one JSON value into a `T`.
pub trait JsonDeserializer<T> {
    /// Decodes the value the parser is positioned on.
    ///
    /// # Returns
    /// - `Ok(Some(value))` for a complete value
    /// - `Ok(None)` for an empty array or a blank string
    /// - `Err(_)` on any token, range or parse failure
    fn deserialize(
        &self,
        parser: &mut dyn JsonParser,
        context: &DeserializationContext,
    ) -> Result<Option<T>, CodecError>;

    fn handled_type(&self) -> TemporalType;
}

/// Encodes a `T` into one JSON value.
pub trait JsonSerializer<T> {
    fn serialize(
        &self,
        value: &T,
        generator: &mut dyn JsonGenerator,
        provider: &SerializerProvider,
    ) -> Result<(), CodecError>;

    fn handled_type(&self) -> TemporalType;
}

/// Requested JSON shape of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shape {
    /// No preference, the global configuration decides.
    #[default]
    Any,
    Array,
    Number,
    String,
}

/// Field or type level format override, applied with `create_contextual`.
///
/// # Examples
///
/// ```
/// use temporal_json_rs::core::codec::{JsonFormat, Shape};
///
/// let format = JsonFormat::new().with_pattern("%H:%M").with_shape(Shape::String);
///
/// assert_eq!(format.pattern(), Some("%H:%M"));
/// assert_eq!(format.shape(), Shape::String);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonFormat {
    pattern: Option<String>,
    shape: Shape,
}

impl JsonFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(pattern.to_string());
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// The pattern, if a non-empty one was given.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref().filter(|pattern| !pattern.is_empty())
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Timestamp override implied by the shape, `None` when the shape is `Any`.
    pub fn timestamp_override(&self) -> Option<bool> {
        match self.shape {
            Shape::Any => None,
            Shape::Array | Shape::Number => Some(true),
            Shape::String => Some(false),
        }
    }
}
