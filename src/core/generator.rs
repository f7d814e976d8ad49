use crate::error::CodecError;

/// Sink receiving the JSON values emitted by serializers.
///
/// Errors raised by an implementation (typically I/O failures) are propagated
/// unchanged by every serializer of this crate.
pub trait JsonGenerator {
    fn write_start_array(&mut self) -> Result<(), CodecError>;

    fn write_end_array(&mut self) -> Result<(), CodecError>;

    fn write_number(&mut self, value: i64) -> Result<(), CodecError>;

    fn write_string(&mut self, value: &str) -> Result<(), CodecError>;
}
