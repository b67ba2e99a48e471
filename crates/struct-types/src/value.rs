//! Runtime representation of `google.protobuf.Value`.
//!
//! The Struct well-known types model arbitrary JSON-like data on the wire as
//! a closed set of six value kinds. This module defines [`ProtoValue`], the
//! decoded runtime form of a single `Value`, together with the canonical
//! conversions in and out of native JSON data.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Decoded runtime form of a `google.protobuf.Value`.
///
/// The wire format has a single numeric kind: every number is an IEEE 754
/// double. Integer inputs are coerced to `f64` at this boundary, so a round
/// trip through `ProtoValue` yields `10.0` for an input of `10`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProtoValue {
    /// Null value
    Null,

    /// Boolean value
    Bool(bool),

    /// Numeric value, always a double on the wire
    Number(f64),

    /// String value
    String(String),

    /// Ordered list of values
    List(Vec<ProtoValue>),

    /// String-keyed struct of values
    Struct(HashMap<String, ProtoValue>),
}

impl ProtoValue {
    /// Build a proto value from any serializable Rust data.
    ///
    /// This is the canonical constructor. The input is funneled through
    /// `serde_json::to_value`, so anything serde can represent as JSON maps
    /// onto the six wire kinds. Inputs that cannot be serialized are
    /// rejected: maps with non-string keys, or types whose `Serialize`
    /// implementation reports an error.
    ///
    /// A null input (`serde_json::Value::Null`, `Option::None`) is
    /// representable and converts to [`ProtoValue::Null`].
    pub fn from_serialize<T: Serialize>(value: T) -> Result<Self> {
        let json = serde_json::to_value(value)?;
        Ok(json.into())
    }

    /// Convert into the equivalent native JSON value.
    ///
    /// This conversion is total. Non-finite numbers have no JSON
    /// representation and become null, matching `serde_json`'s convention.
    pub fn into_json(self) -> serde_json::Value {
        self.into()
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a list.
    pub fn as_list(&self) -> Option<&Vec<ProtoValue>> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    /// Try to get this value as a struct.
    pub fn as_struct(&self) -> Option<&HashMap<String, ProtoValue>> {
        match self {
            Self::Struct(fields) => Some(fields),
            _ => None,
        }
    }
}

impl Default for ProtoValue {
    fn default() -> Self {
        Self::Null
    }
}

impl From<serde_json::Value> for ProtoValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ProtoValue::Null,
            serde_json::Value::Bool(b) => ProtoValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => ProtoValue::Number(f),
                // Arbitrary-precision numbers outside the f64 range
                None => ProtoValue::Null,
            },
            serde_json::Value::String(s) => ProtoValue::String(s),
            serde_json::Value::Array(values) => {
                ProtoValue::List(values.into_iter().map(ProtoValue::from).collect())
            }
            serde_json::Value::Object(fields) => ProtoValue::Struct(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, ProtoValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<ProtoValue> for serde_json::Value {
    fn from(value: ProtoValue) -> Self {
        match value {
            ProtoValue::Null => serde_json::Value::Null,
            ProtoValue::Bool(b) => serde_json::Value::Bool(b),
            ProtoValue::Number(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            ProtoValue::String(s) => serde_json::Value::String(s),
            ProtoValue::List(values) => {
                serde_json::Value::Array(values.into_iter().map(Into::into).collect())
            }
            ProtoValue::Struct(fields) => serde_json::Value::Object(
                fields.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}
