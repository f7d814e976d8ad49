use thiserror::Error;

use crate::core::token::JsonToken;

#[derive(Error, Debug)]
/// Codec error
pub enum CodecError {
    #[error("Unexpected token ({actual}), expected {expected}: {message}")]
    WrongToken {
        expected: JsonToken,
        actual: String,
        message: String,
    },

    #[error("Current token ({0}) not numeric, can not use numeric value accessors")]
    NotNumeric(String),

    #[error("Numeric value ({0}) out of range of int")]
    NumericOutOfRange(String),

    #[error("No current token")]
    NoCurrentToken,

    #[error(transparent)]
    DateTime(#[from] DateTimeError),

    #[error("Text '{text}' could not be parsed at index {index}")]
    Unparseable { text: String, index: usize },

    #[error("Text '{text}' could not be parsed: {source}")]
    Parse {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid date-time pattern: '{0}'")]
    InvalidPattern(String),

    #[error("Unable to format value with pattern '{0}'")]
    Format(String),

    #[error("Invalid JSON generation: {0}")]
    Generation(String),

    #[error("Unexpected null value for {0}")]
    NullValue(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
/// Field validation error raised while building a temporal value
pub enum DateTimeError {
    #[error("Invalid value for {field} (valid values {min} - {max}): {value}")]
    InvalidField {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i64, month: i64, day: i64 },
}
