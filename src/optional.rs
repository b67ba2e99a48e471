//! Helpers for optional string fields.
//!
//! Proto-style APIs model optional strings as `Option<String>`. These
//! helpers convert between that shape and plain strings.

/// Unwrap an optional string, defaulting to the empty string.
pub fn string_from_optional(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// Wrap a string as a present optional.
///
/// The result is always `Some`, even for the empty string.
pub fn optional_from_string(value: impl Into<String>) -> Option<String> {
    Some(value.into())
}
