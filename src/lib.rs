//! Conversion helpers between native JSON values and protobuf Struct values.
//!
//! This library bridges dynamically-typed data and the decoded runtime form
//! of the `google.protobuf.Struct` well-known types ([`ProtoValue`], defined
//! by the `struct-types` crate). It handles the map, slice, and optional
//! shapes around single-value conversion so callers don't have to.
//!
//! # Architecture
//!
//! ```text
//! Forward:  T: Serialize → ProtoValue          (fallible, best-effort in batches)
//! Reverse:  ProtoValue → serde_json::Value     (total)
//! ```
//!
//! Batch conversions are best-effort: an element that cannot be represented
//! on the wire is dropped and the rest of the batch is kept. Absence is
//! distinct from emptiness throughout - a `None` input propagates as `None`,
//! never as an empty collection.
//!
//! # Modules
//!
//! - [`forward`] - native values → `ProtoValue` conversion
//! - [`reverse`] - `ProtoValue` → native JSON conversion
//! - [`optional`] - optional string field helpers
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use struct_bridge::{proto_value_to_json, try_proto_value};
//!
//! let value = try_proto_value(json!({"name": "Alice", "age": 30})).unwrap();
//!
//! // Integers come back as doubles; that is a property of the wire format.
//! assert_eq!(
//!     proto_value_to_json(Some(value)),
//!     json!({"name": "Alice", "age": 30.0})
//! );
//! ```

pub mod forward;
pub mod optional;
pub mod reverse;

// Re-exports for convenience
pub use forward::{map_to_proto_values, slice_to_proto_values, try_proto_value};
pub use optional::{optional_from_string, string_from_optional};
pub use reverse::{proto_value_to_json, proto_values_to_map, proto_values_to_slice};
pub use struct_types::{ProtoValue, StructTypesError};
