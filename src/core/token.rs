use std::fmt;

use crate::error::CodecError;

/// Kinds of tokens a [`JsonParser`] can be positioned on.
///
/// Only `StartArray`, `EndArray` and `ValueString` drive the temporal codecs;
/// the remaining kinds exist so that mismatches can be reported precisely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonToken {
    StartArray,
    EndArray,
    StartObject,
    EndObject,
    FieldName,
    ValueString,
    ValueNumberInt,
    ValueNumberFloat,
    ValueTrue,
    ValueFalse,
    ValueNull,
}

impl JsonToken {
    /// Returns `true` for the two numeric token kinds.
    pub fn is_numeric(&self) -> bool {
        matches!(self, JsonToken::ValueNumberInt | JsonToken::ValueNumberFloat)
    }
}

impl fmt::Display for JsonToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonToken::StartArray => "START_ARRAY",
            JsonToken::EndArray => "END_ARRAY",
            JsonToken::StartObject => "START_OBJECT",
            JsonToken::EndObject => "END_OBJECT",
            JsonToken::FieldName => "FIELD_NAME",
            JsonToken::ValueString => "VALUE_STRING",
            JsonToken::ValueNumberInt => "VALUE_NUMBER_INT",
            JsonToken::ValueNumberFloat => "VALUE_NUMBER_FLOAT",
            JsonToken::ValueTrue => "VALUE_TRUE",
            JsonToken::ValueFalse => "VALUE_FALSE",
            JsonToken::ValueNull => "VALUE_NULL",
        };
        f.write_str(name)
    }
}

/// Describes an optional token for error messages, `None` being end of input.
pub fn describe(token: Option<JsonToken>) -> String {
    match token {
        Some(token) => token.to_string(),
        None => "end-of-input".to_string(),
    }
}

/// A forward-only stream of JSON tokens.
///
/// The stream is positioned on a current token; codecs read it, then call
/// [`JsonParser::next_token`] to move on. Implementations are provided by the
/// host (see [`crate::json::ValueTokenStream`] for one backed by `serde_json`).
pub trait JsonParser {
    /// The token the stream is currently positioned on, `None` at end of input.
    fn current_token(&self) -> Option<JsonToken>;

    /// Advances the stream and returns the new current token.
    fn next_token(&mut self) -> Result<Option<JsonToken>, CodecError>;

    /// Reads the current token as a 32-bit integer.
    ///
    /// # Errors
    /// - `CodecError::NotNumeric` if the current token is not a number
    /// - `CodecError::NumericOutOfRange` if it does not fit in an `i32`
    fn int_value(&self) -> Result<i32, CodecError>;

    /// Textual content of the current token.
    fn text(&self) -> Result<&str, CodecError>;
}
