#![cfg_attr(docsrs, feature(doc_cfg))]
//#![warn(missing_docs)]

/*!
 <div align="center">
   <h1>Temporal JSON for Rust</h1>
   <h3>JSON codecs for local date-times and local times</h3>

   ![license](https://shields.io/badge/license-MIT%2FApache--2.0-blue)

  </div>

 # Temporal JSON for Rust

 This crate converts `chrono::NaiveDateTime` and `chrono::NaiveTime` values to and from JSON.
 Each type has a deserializer and a serializer, plugged into a data-binding layer through small
 token-stream and emission-sink traits. Two representations are supported:

 - **Timestamp (array) form:** `[2015, 3, 14, 9, 30, 26, 535897932]` for a date-time and
   `[9, 30, 26, 535897932]` for a time. Trailing zero seconds and nanoseconds are left out.
 - **String form:** ISO-8601 text (`"2015-03-14T09:30:26.535897932"`), or any strftime-style
   pattern bound to a field.

 ## Core Concepts

- **JsonParser / JsonGenerator:** the token stream deserializers read from and the sink
  serializers write to. `serde_json` backed implementations live in [`json`].
- **DeserializationContext / SerializerProvider:** carry the feature flags deciding between
  milliseconds and nanoseconds and between arrays and strings.
- **Codecs:** [`deser::LocalDateTimeDeserializer`], [`deser::LocalTimeDeserializer`],
  [`ser::LocalDateTimeSerializer`] and [`ser::LocalTimeSerializer`]. Codecs are immutable;
  binding a pattern or a shape to a field returns a new codec and never alters the shared
  default instance.
- **TemporalMapper:** a small facade reading and writing single values with a fixed
  configuration.

 ## Features

| **Feature**   | **Description**                                                   |
|---------------|-------------------------------------------------------------------|
| adapter       | Enables `#[serde(with = "...")]` adapters built on the codecs      |
| full          | Enables all available features                                    |

 ## Getting Started

```toml
[dependencies]
temporal-json-rs = { version = "<version>", features = ["<full|adapter>"] }
```

Then, on your main.rs:

```rust
# use temporal_json_rs::{
#     core::context::{DeserializationFeature, SerializationFeature},
#     deser::LOCAL_DATE_TIME_DESERIALIZER,
#     error::CodecError,
#     mapper::TemporalMapperBuilder,
#     ser::LOCAL_DATE_TIME_SERIALIZER,
# };
fn main() -> Result<(), CodecError> {
    let mapper = TemporalMapperBuilder::new()
        .disable_deserialization(DeserializationFeature::ReadDateTimestampsAsNanoseconds)
        .disable_serialization(SerializationFeature::WriteDateTimestampsAsNanoseconds)
        .build();

    // 500 is read as milliseconds
    let value = mapper
        .read_value("[2015, 3, 14, 9, 30, 26, 500]", &LOCAL_DATE_TIME_DESERIALIZER)?
        .expect("not an empty value");

    let json = mapper.write_value_as_string(&value, &LOCAL_DATE_TIME_SERIALIZER)?;
    assert_eq!(json, "[2015,3,14,9,30,26,500]");

    let iso = TemporalMapperBuilder::new()
        .disable_serialization(SerializationFeature::WriteDatesAsTimestamps)
        .build();
    assert_eq!(
        iso.write_value_as_string(&value, &LOCAL_DATE_TIME_SERIALIZER)?,
        r#""2015-03-14T09:30:26.500""#
    );

    Ok(())
}
```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     (<http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     (<http://opensource.org/licenses/MIT>)

 at your option.

 ## Contribution
 Unless you explicitly state otherwise, any contribution intentionally submitted
 for inclusion in the work by you, as defined in the Apache-2.0 license, shall be
 dual licensed as above, without any additional terms or conditions

 */

/// Core abstractions: codec traits, contexts, formatters, tokens and sinks
pub mod core;

/// Error types for codec operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Temporal value construction and canonical ISO text
pub mod temporal;

/// Deserializers for local date-times and local times
pub mod deser;

/// Serializers for local date-times and local times
pub mod ser;

/// `serde_json` backed token stream and generators
pub mod json;

/// Facade reading and writing single temporal values
pub mod mapper;

#[cfg(feature = "adapter")]
/// `#[serde(with = "...")]` adapters routing fields through the default codecs.
///
/// Values are written with the default [`MapperConfig`], so arrays with
/// nanosecond fractions; reading accepts both the array and the string form.
/// An empty array or blank string is rejected since the field is not optional.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDateTime, NaiveTime};
/// use serde::{Deserialize, Serialize};
/// use temporal_json_rs::temporal::{local_date_time, local_time};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Shift {
///     #[serde(with = "temporal_json_rs::adapter::local_date_time")]
///     start: NaiveDateTime,
///     #[serde(with = "temporal_json_rs::adapter::local_time")]
///     break_at: NaiveTime,
/// }
///
/// let shift: Shift =
///     serde_json::from_str(r#"{ "start": "2015-03-14T09:30", "break_at": [12, 15] }"#).unwrap();
///
/// assert_eq!(shift.start, local_date_time(2015, 3, 14, 9, 30, 0, 0).unwrap());
/// assert_eq!(shift.break_at, local_time(12, 15, 0, 0).unwrap());
///
/// let json = serde_json::to_string(&shift).unwrap();
/// assert_eq!(json, r#"{"start":[2015,3,14,9,30],"break_at":[12,15]}"#);
/// ```
///
/// [`MapperConfig`]: crate::core::context::MapperConfig
pub mod adapter;
