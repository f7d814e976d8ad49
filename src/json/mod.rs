/// `serde_json` backed implementations of the token stream and emission sink.
///
/// Tokenizing JSON text is left to `serde_json`: documents are parsed into a
/// `serde_json::Value` first, then exposed through the [`JsonParser`] trait.
/// Serializers can write either to an in-memory `Value` or, as text, to any
/// `std::io::Write`.
///
/// # Examples
///
/// ```
/// use temporal_json_rs::core::codec::{JsonDeserializer, JsonSerializer};
/// use temporal_json_rs::core::context::MapperConfig;
/// use temporal_json_rs::deser::local_time::LOCAL_TIME_DESERIALIZER;
/// use temporal_json_rs::json::{ValueTokenStream, WriterGenerator};
/// use temporal_json_rs::ser::local_time::LOCAL_TIME_SERIALIZER;
///
/// let config = MapperConfig::default();
///
/// let mut parser: ValueTokenStream = "[10, 15, 30]".parse().unwrap();
/// let time = LOCAL_TIME_DESERIALIZER
///     .deserialize(&mut parser, &config.deserialization_context())
///     .unwrap()
///     .unwrap();
///
/// let mut generator = WriterGenerator::new(Vec::new());
/// LOCAL_TIME_SERIALIZER
///     .serialize(&time, &mut generator, &config.serializer_provider())
///     .unwrap();
///
/// assert_eq!(generator.into_inner(), b"[10,15,30]");
/// ```
///
/// [`JsonParser`]: crate::core::token::JsonParser
pub mod generator;
pub mod token_stream;

pub use generator::{ValueGenerator, WriterGenerator};
pub use token_stream::ValueTokenStream;
