/// Shared state and helpers of the local date/time deserializers.
pub mod base;

/// Deserializer for `chrono::NaiveDateTime`.
pub mod local_date_time;

/// Deserializer for `chrono::NaiveTime`.
pub mod local_time;

pub use base::DateTimeDeserializerBase;
pub use local_date_time::{LOCAL_DATE_TIME_DESERIALIZER, LocalDateTimeDeserializer};
pub use local_time::{LOCAL_TIME_DESERIALIZER, LocalTimeDeserializer};
