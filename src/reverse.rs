//! Reverse conversion: proto values → native JSON values.
//!
//! Every `ProtoValue` kind has a JSON equivalent, so nothing in this
//! direction can fail and nothing is dropped.

use std::collections::HashMap;
use struct_types::ProtoValue;

/// Convert a possibly-absent proto value to a native JSON value.
///
/// An absent input maps to JSON null rather than failing.
pub fn proto_value_to_json(value: Option<ProtoValue>) -> serde_json::Value {
    value
        .map(ProtoValue::into_json)
        .unwrap_or(serde_json::Value::Null)
}

/// Convert a map of proto values to a map of native JSON values.
///
/// Absence propagates. Every entry converts; the output key set equals the
/// input key set.
pub fn proto_values_to_map(
    map: Option<HashMap<String, ProtoValue>>,
) -> Option<HashMap<String, serde_json::Value>> {
    map.map(|m| m.into_iter().map(|(k, v)| (k, v.into_json())).collect())
}

/// Convert a slice of proto values to native JSON values.
///
/// Absence propagates. The output always has the same length and order as
/// the input.
pub fn proto_values_to_slice(values: Option<Vec<ProtoValue>>) -> Option<Vec<serde_json::Value>> {
    values.map(|vs| vs.into_iter().map(ProtoValue::into_json).collect())
}
