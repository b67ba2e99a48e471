//! Runtime representation of protobuf Struct values.
//!
//! The `google.protobuf.Struct` well-known types model arbitrary JSON-like
//! data on the wire as a closed set of six value kinds: null, boolean,
//! number, string, list, and string-keyed struct. This crate provides
//! [`ProtoValue`], the decoded runtime form of a single `Value`, plus the
//! canonical conversions in and out of native JSON data:
//!
//! - [`ProtoValue::from_serialize`] - fallible constructor from any
//!   serializable Rust data
//! - [`ProtoValue::into_json`] - total accessor back to `serde_json::Value`
//!
//! # Architecture
//!
//! ```text
//! struct-types (this crate)
//!    │
//!    └─── struct-bridge   (map/slice conversion helpers built on ProtoValue)
//! ```
//!
//! # Example
//!
//! ```rust
//! use struct_types::ProtoValue;
//!
//! // Integers are coerced to doubles at the wire boundary
//! let value = ProtoValue::from_serialize(vec![1, 2, 3]).unwrap();
//! assert_eq!(
//!     value,
//!     ProtoValue::List(vec![
//!         ProtoValue::Number(1.0),
//!         ProtoValue::Number(2.0),
//!         ProtoValue::Number(3.0),
//!     ])
//! );
//! ```

pub mod error;
pub mod value;

// Re-exports for convenience
pub use error::StructTypesError;
pub use value::ProtoValue;
