/// Shared state, the timestamp decision and the time-of-day array writer.
pub mod base;

/// Serializer for `chrono::NaiveDateTime`.
pub mod local_date_time;

/// Serializer for `chrono::NaiveTime`.
pub mod local_time;

pub use base::{FormattedSerializer, FormattedSerializerBase, use_timestamp};
pub use local_date_time::{LOCAL_DATE_TIME_SERIALIZER, LocalDateTimeSerializer};
pub use local_time::{LOCAL_TIME_SERIALIZER, LocalTimeSerializer};
