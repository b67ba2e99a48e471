//! Error types for the struct-types crate.

use thiserror::Error;

/// Errors that can occur when building proto values from native data.
#[derive(Error, Debug)]
pub enum StructTypesError {
    /// The input has no representation among the six `Value` kinds.
    #[error("value cannot be represented as a protobuf Value: {0}")]
    Unrepresentable(#[from] serde_json::Error),
}

/// Result type alias for struct-types operations.
pub type Result<T> = std::result::Result<T, StructTypesError>;
