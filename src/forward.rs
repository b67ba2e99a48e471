//! Forward conversion: native values → proto values.
//!
//! The single-value constructor is fallible; the map and slice wrappers are
//! best-effort and never fail as a whole. An element whose conversion fails
//! is dropped, logged at debug level, and the rest of the batch is kept.

use serde::Serialize;
use std::collections::HashMap;
use struct_types::ProtoValue;
use tracing::debug;

/// Convert a map of serializable values to a map of proto values.
///
/// Absence propagates: a `None` input yields `None`, a present input always
/// yields a present map, even when empty. Entries whose values cannot be
/// represented on the wire are dropped; the surviving entries keep their
/// keys.
pub fn map_to_proto_values<T: Serialize>(
    map: Option<HashMap<String, T>>,
) -> Option<HashMap<String, ProtoValue>> {
    let map = map?;
    let mut result = HashMap::with_capacity(map.len());
    for (key, value) in map {
        match ProtoValue::from_serialize(value) {
            Ok(proto) => {
                result.insert(key, proto);
            }
            Err(e) => debug!("Dropping unconvertible value for key '{}': {}", key, e),
        }
    }
    Some(result)
}

/// Convert a slice of serializable values to proto values.
///
/// Absence propagates. Elements that cannot be represented on the wire are
/// dropped and the relative order of the rest is preserved, so the output
/// can be shorter than the input.
pub fn slice_to_proto_values<T: Serialize>(values: Option<Vec<T>>) -> Option<Vec<ProtoValue>> {
    let values = values?;
    let mut result = Vec::with_capacity(values.len());
    for value in values {
        match ProtoValue::from_serialize(value) {
            Ok(proto) => result.push(proto),
            Err(e) => debug!("Dropping unconvertible element: {}", e),
        }
    }
    Some(result)
}

/// Convert a single serializable value to a proto value.
///
/// Returns `None` when the value cannot be represented on the wire. A null
/// input is representable and converts to `Some(ProtoValue::Null)`, not to
/// `None`.
pub fn try_proto_value<T: Serialize>(value: T) -> Option<ProtoValue> {
    ProtoValue::from_serialize(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serializer;
    use serde_json::json;

    /// A value with no wire representation; its serialization always fails.
    struct OpaqueHandle;

    impl Serialize for OpaqueHandle {
        fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            Err(serde::ser::Error::custom(
                "opaque handle has no wire representation",
            ))
        }
    }

    /// Map/slice element that is either plain JSON data or an opaque value.
    enum Field {
        Json(serde_json::Value),
        Opaque(OpaqueHandle),
    }

    impl Serialize for Field {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self {
                Field::Json(v) => v.serialize(serializer),
                Field::Opaque(h) => h.serialize(serializer),
            }
        }
    }

    #[test]
    fn test_map_none() {
        assert_eq!(map_to_proto_values::<serde_json::Value>(None), None);
    }

    #[test]
    fn test_map_empty() {
        let result = map_to_proto_values::<serde_json::Value>(Some(HashMap::new())).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_map_primitive_values() {
        let mut input = HashMap::new();
        input.insert("string".to_string(), json!("value"));
        input.insert("number".to_string(), json!(42.5));
        input.insert("bool".to_string(), json!(true));
        input.insert("null".to_string(), json!(null));
        input.insert("integer".to_string(), json!(10));

        let result = map_to_proto_values(Some(input)).unwrap();

        assert_eq!(result.len(), 5);
        assert_eq!(result["string"].as_str(), Some("value"));
        assert_eq!(result["number"].as_f64(), Some(42.5));
        assert_eq!(result["bool"].as_bool(), Some(true));
        assert!(result["null"].is_null());
        assert_eq!(result["integer"].as_f64(), Some(10.0));
    }

    #[test]
    fn test_map_complex_values() {
        let mut input = HashMap::new();
        input.insert("list".to_string(), json!([1, "two", true]));
        input.insert("map".to_string(), json!({"nested": "value"}));

        let result = map_to_proto_values(Some(input)).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(
            result["list"],
            ProtoValue::List(vec![
                ProtoValue::Number(1.0),
                ProtoValue::String("two".to_string()),
                ProtoValue::Bool(true),
            ])
        );
        let fields = result["map"].as_struct().unwrap();
        assert_eq!(fields["nested"].as_str(), Some("value"));
    }

    #[test]
    fn test_map_drops_unconvertible_values() {
        let mut input = HashMap::new();
        input.insert("valid".to_string(), Field::Json(json!("value")));
        input.insert("invalid".to_string(), Field::Opaque(OpaqueHandle));

        let result = map_to_proto_values(Some(input)).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result["valid"].as_str(), Some("value"));
        assert!(!result.contains_key("invalid"));
    }

    #[test]
    fn test_slice_none() {
        assert_eq!(slice_to_proto_values::<serde_json::Value>(None), None);
    }

    #[test]
    fn test_slice_empty() {
        let result = slice_to_proto_values::<serde_json::Value>(Some(Vec::new())).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_slice_primitive_values() {
        let input = vec![json!("string"), json!(42.5), json!(true), json!(null)];

        let result = slice_to_proto_values(Some(input)).unwrap();

        assert_eq!(
            result,
            vec![
                ProtoValue::String("string".to_string()),
                ProtoValue::Number(42.5),
                ProtoValue::Bool(true),
                ProtoValue::Null,
            ]
        );
    }

    #[test]
    fn test_slice_complex_values() {
        let input = vec![json!([1, 2, 3]), json!({"nested": "value"})];

        let result = slice_to_proto_values(Some(input)).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(
            result[0],
            ProtoValue::List(vec![
                ProtoValue::Number(1.0),
                ProtoValue::Number(2.0),
                ProtoValue::Number(3.0),
            ])
        );
        let fields = result[1].as_struct().unwrap();
        assert_eq!(fields["nested"].as_str(), Some("value"));
    }

    #[test]
    fn test_slice_drops_unconvertible_and_preserves_order() {
        let input = vec![
            Field::Json(json!("valid")),
            Field::Opaque(OpaqueHandle),
            Field::Json(json!(42)),
        ];

        let result = slice_to_proto_values(Some(input)).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].as_str(), Some("valid"));
        assert_eq!(result[1].as_f64(), Some(42.0));
    }

    #[test]
    fn test_try_proto_value_null_is_present() {
        assert_eq!(try_proto_value(json!(null)), Some(ProtoValue::Null));
    }

    #[test]
    fn test_try_proto_value_primitives() {
        assert_eq!(
            try_proto_value("test"),
            Some(ProtoValue::String("test".to_string()))
        );
        assert_eq!(try_proto_value(42.5), Some(ProtoValue::Number(42.5)));
        assert_eq!(try_proto_value(true), Some(ProtoValue::Bool(true)));
    }

    #[test]
    fn test_try_proto_value_complex() {
        let list = try_proto_value(json!([1, "two", true])).unwrap();
        assert_eq!(list.as_list().unwrap().len(), 3);

        let map = try_proto_value(json!({"key": "value"})).unwrap();
        let fields = map.as_struct().unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["key"].as_str(), Some("value"));
    }

    #[test]
    fn test_try_proto_value_unconvertible() {
        assert_eq!(try_proto_value(OpaqueHandle), None);
    }
}
