use std::io::Write;

use serde_json::Value;

use crate::{core::generator::JsonGenerator, error::CodecError};

/// A [`JsonGenerator`] building `serde_json::Value`s in memory.
///
/// # Examples
///
/// ```
/// use temporal_json_rs::core::generator::JsonGenerator;
/// use temporal_json_rs::json::ValueGenerator;
/// use serde_json::json;
///
/// let mut generator = ValueGenerator::new();
/// generator.write_start_array().unwrap();
/// generator.write_number(12).unwrap();
/// generator.write_number(0).unwrap();
/// generator.write_end_array().unwrap();
///
/// assert_eq!(generator.into_value().unwrap(), json!([12, 0]));
/// ```
#[derive(Debug, Default)]
pub struct ValueGenerator {
    open_arrays: Vec<Vec<Value>>,
    roots: Vec<Value>,
}

impl ValueGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, value: Value) {
        match self.open_arrays.last_mut() {
            Some(array) => array.push(value),
            None => self.roots.push(value),
        }
    }

    /// Returns the single root value written so far.
    ///
    /// # Errors
    /// `CodecError::Generation` when an array is still open, or when zero or
    /// several root values were written.
    pub fn into_value(mut self) -> Result<Value, CodecError> {
        if !self.open_arrays.is_empty() {
            return Err(CodecError::Generation(format!(
                "{} array(s) left open",
                self.open_arrays.len()
            )));
        }
        if self.roots.len() != 1 {
            return Err(CodecError::Generation(format!(
                "expected one root value, found {}",
                self.roots.len()
            )));
        }
        self.roots
            .pop()
            .ok_or_else(|| CodecError::Generation("no root value".to_string()))
    }
}

impl JsonGenerator for ValueGenerator {
    fn write_start_array(&mut self) -> Result<(), CodecError> {
        self.open_arrays.push(Vec::new());
        Ok(())
    }

    fn write_end_array(&mut self) -> Result<(), CodecError> {
        let items = self
            .open_arrays
            .pop()
            .ok_or_else(|| CodecError::Generation("current context not an array".to_string()))?;
        self.push(Value::Array(items));
        Ok(())
    }

    fn write_number(&mut self, value: i64) -> Result<(), CodecError> {
        self.push(Value::from(value));
        Ok(())
    }

    fn write_string(&mut self, value: &str) -> Result<(), CodecError> {
        self.push(Value::from(value));
        Ok(())
    }
}

/// A [`JsonGenerator`] writing compact JSON text to any `Write`.
///
/// Root values are written back to back; elements inside arrays are comma
/// separated. I/O errors are returned as `CodecError::Io`.
pub struct WriterGenerator<W: Write> {
    writer: W,
    /// One entry per open array, `true` once it holds an element.
    open_arrays: Vec<bool>,
}

impl<W: Write> WriterGenerator<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            open_arrays: Vec::new(),
        }
    }

    fn before_value(&mut self) -> Result<(), CodecError> {
        if let Some(has_elements) = self.open_arrays.last_mut() {
            if *has_elements {
                self.writer.write_all(b",")?;
            }
            *has_elements = true;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), CodecError> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> JsonGenerator for WriterGenerator<W> {
    fn write_start_array(&mut self) -> Result<(), CodecError> {
        self.before_value()?;
        self.writer.write_all(b"[")?;
        self.open_arrays.push(false);
        Ok(())
    }

    fn write_end_array(&mut self) -> Result<(), CodecError> {
        if self.open_arrays.pop().is_none() {
            return Err(CodecError::Generation(
                "current context not an array".to_string(),
            ));
        }
        self.writer.write_all(b"]")?;
        Ok(())
    }

    fn write_number(&mut self, value: i64) -> Result<(), CodecError> {
        self.before_value()?;
        write!(self.writer, "{value}")?;
        Ok(())
    }

    fn write_string(&mut self, value: &str) -> Result<(), CodecError> {
        self.before_value()?;
        let quoted = serde_json::to_string(value)?;
        self.writer.write_all(quoted.as_bytes())?;
        Ok(())
    }
}
