/// Codec traits, type tags and field-level format overrides.
pub mod codec;

/// Feature flags and the contexts handed to codecs.
pub mod context;

/// Strftime-style formatters.
pub mod format;

/// The emission sink serializers write to.
pub mod generator;

/// Token kinds and the token stream deserializers read from.
pub mod token;
