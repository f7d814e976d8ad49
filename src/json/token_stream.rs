use std::str::FromStr;

use log::trace;
use serde_json::{Number, Value};

use crate::{
    core::token::{JsonParser, JsonToken, describe},
    error::CodecError,
};

#[derive(Debug, Clone)]
struct Token {
    kind: JsonToken,
    text: String,
    number: Option<Number>,
}

impl Token {
    fn new(kind: JsonToken, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
            number: None,
        }
    }
}

/// A [`JsonParser`] over an already parsed `serde_json::Value`.
///
/// The value is flattened into its token sequence and the stream starts
/// positioned on the first token, ready to be handed to a deserializer.
///
/// # Examples
///
/// ```
/// use temporal_json_rs::core::token::{JsonParser, JsonToken};
/// use temporal_json_rs::json::ValueTokenStream;
///
/// let mut parser: ValueTokenStream = "[9, 30]".parse().unwrap();
///
/// assert_eq!(parser.current_token(), Some(JsonToken::StartArray));
/// assert_eq!(parser.next_token().unwrap(), Some(JsonToken::ValueNumberInt));
/// assert_eq!(parser.int_value().unwrap(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct ValueTokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl ValueTokenStream {
    pub fn new(value: &Value) -> Self {
        let mut tokens = Vec::new();
        flatten(value, &mut tokens);
        trace!("Flattened JSON value into {} tokens", tokens.len());

        Self {
            tokens,
            position: 0,
        }
    }

    /// Parses a JSON document from bytes.
    pub fn from_slice(json: &[u8]) -> Result<Self, CodecError> {
        let value: Value = serde_json::from_slice(json)?;
        Ok(Self::new(&value))
    }

    /// Index of the current token, equal to the token count at end of input.
    pub fn position(&self) -> usize {
        self.position
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }
}

impl FromStr for ValueTokenStream {
    type Err = CodecError;

    fn from_str(json: &str) -> Result<Self, Self::Err> {
        Self::from_slice(json.as_bytes())
    }
}

fn flatten(value: &Value, tokens: &mut Vec<Token>) {
    match value {
        Value::Null => tokens.push(Token::new(JsonToken::ValueNull, "null")),
        Value::Bool(true) => tokens.push(Token::new(JsonToken::ValueTrue, "true")),
        Value::Bool(false) => tokens.push(Token::new(JsonToken::ValueFalse, "false")),
        Value::Number(number) => {
            let kind = if number.is_f64() {
                JsonToken::ValueNumberFloat
            } else {
                JsonToken::ValueNumberInt
            };
            tokens.push(Token {
                kind,
                text: number.to_string(),
                number: Some(number.clone()),
            });
        }
        Value::String(text) => tokens.push(Token::new(JsonToken::ValueString, text)),
        Value::Array(items) => {
            tokens.push(Token::new(JsonToken::StartArray, "["));
            items.iter().for_each(|item| flatten(item, tokens));
            tokens.push(Token::new(JsonToken::EndArray, "]"));
        }
        Value::Object(fields) => {
            tokens.push(Token::new(JsonToken::StartObject, "{"));
            for (name, field) in fields {
                tokens.push(Token::new(JsonToken::FieldName, name));
                flatten(field, tokens);
            }
            tokens.push(Token::new(JsonToken::EndObject, "}"));
        }
    }
}

impl JsonParser for ValueTokenStream {
    fn current_token(&self) -> Option<JsonToken> {
        self.current().map(|token| token.kind)
    }

    fn next_token(&mut self) -> Result<Option<JsonToken>, CodecError> {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        Ok(self.current_token())
    }

    fn int_value(&self) -> Result<i32, CodecError> {
        let token = self
            .current()
            .ok_or_else(|| CodecError::NotNumeric(describe(None)))?;

        let number = match &token.number {
            Some(number) if token.kind.is_numeric() => number,
            _ => return Err(CodecError::NotNumeric(token.kind.to_string())),
        };

        let out_of_range = || CodecError::NumericOutOfRange(token.text.clone());

        if let Some(value) = number.as_i64() {
            i32::try_from(value).map_err(|_| out_of_range())
        } else if number.is_u64() {
            Err(out_of_range())
        } else {
            // Floats are truncated toward zero.
            let value = number.as_f64().ok_or_else(out_of_range)?.trunc();
            if value < i32::MIN as f64 || value > i32::MAX as f64 {
                return Err(out_of_range());
            }
            Ok(value as i32)
        }
    }

    fn text(&self) -> Result<&str, CodecError> {
        self.current()
            .map(|token| token.text.as_str())
            .ok_or(CodecError::NoCurrentToken)
    }
}
